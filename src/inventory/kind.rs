use std::fmt;

/// Managed-object kinds this tool knows how to enumerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    VirtualMachine,
    Datastore,
    Network,
}

impl ObjectKind {
    /// Kind order used by the `all` subcommand; affects output grouping only.
    pub const ALL: [ObjectKind; 3] = [
        ObjectKind::Datastore,
        ObjectKind::VirtualMachine,
        ObjectKind::Network,
    ];

    /// vSphere managed-object type name.
    pub fn vim_name(self) -> &'static str {
        match self {
            ObjectKind::VirtualMachine => "VirtualMachine",
            ObjectKind::Datastore => "Datastore",
            ObjectKind::Network => "Network",
        }
    }

    /// REST list endpoint returning this kind's summaries.
    pub fn list_path(self) -> &'static str {
        match self {
            ObjectKind::VirtualMachine => "/api/vcenter/vm",
            ObjectKind::Datastore => "/api/vcenter/datastore",
            ObjectKind::Network => "/api/vcenter/network",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.vim_name())
    }
}
