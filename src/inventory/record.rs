use super::kind::ObjectKind;
use serde::Deserialize;

/// VM power states as reported by the list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VmPowerState {
    PoweredOn,
    PoweredOff,
    Suspended,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Summary row from `GET /api/vcenter/vm`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VmSummary {
    /// Managed-object ID, e.g. "vm-42".
    pub vm: String,
    pub name: String,
    #[serde(default)]
    pub power_state: VmPowerState,
    #[serde(default)]
    pub cpu_count: Option<u32>,
    #[serde(default, rename = "memory_size_MiB")]
    pub memory_size_mib: Option<u64>,
}

/// Summary row from `GET /api/vcenter/datastore`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DatastoreSummary {
    pub datastore: String,
    pub name: String,
    #[serde(default, rename = "type")]
    pub ds_type: Option<String>,
    #[serde(default)]
    pub free_space: Option<u64>,
    #[serde(default)]
    pub capacity: Option<u64>,
}

/// Summary row from `GET /api/vcenter/network`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NetworkSummary {
    pub network: String,
    pub name: String,
    #[serde(default, rename = "type")]
    pub network_type: Option<String>,
}

/// One retrieved managed object; the variant fixes which column mapping the
/// renderer uses.
#[derive(Debug, Clone, PartialEq)]
pub enum InventoryRecord {
    VirtualMachine(VmSummary),
    Datastore(DatastoreSummary),
    Network(NetworkSummary),
}

impl InventoryRecord {
    pub fn kind(&self) -> ObjectKind {
        match self {
            InventoryRecord::VirtualMachine(_) => ObjectKind::VirtualMachine,
            InventoryRecord::Datastore(_) => ObjectKind::Datastore,
            InventoryRecord::Network(_) => ObjectKind::Network,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            InventoryRecord::VirtualMachine(vm) => &vm.name,
            InventoryRecord::Datastore(ds) => &ds.name,
            InventoryRecord::Network(net) => &net.name,
        }
    }

    /// Stable managed-object reference, e.g. "vm-42" or "datastore-11".
    pub fn reference(&self) -> &str {
        match self {
            InventoryRecord::VirtualMachine(vm) => &vm.vm,
            InventoryRecord::Datastore(ds) => &ds.datastore,
            InventoryRecord::Network(net) => &net.network,
        }
    }
}
