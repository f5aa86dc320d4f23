use crate::inventory::fetcher::Inventory;
use crate::inventory::kind::ObjectKind;
use std::io::{self, Write};
use tabled::builder::Builder;
use tabled::settings::Style;

/// One output line: display name plus managed-object reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub name: String,
    pub reference: String,
}

/// True when the filter is empty or matches the value exactly.
pub fn is_expected(value: &str, filter: &str) -> bool {
    filter.is_empty() || value == filter
}

/// Flattens the inventory into rows: kinds in requested order, records in
/// retrieval order, filtered by exact name.
pub fn render_rows(inventory: &Inventory, kinds: &[ObjectKind], filter: &str) -> Vec<Row> {
    let mut rows = Vec::new();
    for kind in kinds {
        let Some(records) = inventory.get(kind) else {
            continue;
        };
        for record in records {
            if is_expected(record.display_name(), filter) {
                rows.push(Row {
                    name: record.display_name().to_string(),
                    reference: record.reference().to_string(),
                });
            }
        }
    }
    rows
}

/// Writes the two-column table. The second column is labeled `Type:` but
/// carries the object reference; existing consumers depend on that layout.
pub fn print_table(out: &mut impl Write, rows: &[Row]) -> io::Result<()> {
    let mut builder = Builder::default();
    builder.push_record(["Name:", "Type:"]);
    for row in rows {
        builder.push_record([row.name.as_str(), row.reference.as_str()]);
    }

    let mut table = builder.build();
    table.with(Style::blank());
    writeln!(out, "{table}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::record::{
        DatastoreSummary, InventoryRecord, NetworkSummary, VmPowerState, VmSummary,
    };
    use rstest::rstest;

    fn vm(name: &str, reference: &str) -> InventoryRecord {
        InventoryRecord::VirtualMachine(VmSummary {
            vm: reference.to_string(),
            name: name.to_string(),
            power_state: VmPowerState::PoweredOn,
            cpu_count: None,
            memory_size_mib: None,
        })
    }

    fn datastore(name: &str, reference: &str) -> InventoryRecord {
        InventoryRecord::Datastore(DatastoreSummary {
            datastore: reference.to_string(),
            name: name.to_string(),
            ds_type: None,
            free_space: None,
            capacity: None,
        })
    }

    fn network(name: &str, reference: &str) -> InventoryRecord {
        InventoryRecord::Network(NetworkSummary {
            network: reference.to_string(),
            name: name.to_string(),
            network_type: None,
        })
    }

    fn row(name: &str, reference: &str) -> Row {
        Row {
            name: name.to_string(),
            reference: reference.to_string(),
        }
    }

    #[rstest]
    #[case("vm1", "", true)]
    #[case("", "", true)]
    #[case("vm1", "vm1", true)]
    #[case("vm1", "vm2", false)]
    #[case("vm1", "VM1", false)]
    #[case("vm1", "vm", false)]
    fn test_is_expected(#[case] value: &str, #[case] filter: &str, #[case] expected: bool) {
        assert_eq!(is_expected(value, filter), expected);
    }

    #[test]
    fn test_render_preserves_retrieval_order() {
        let mut inventory = Inventory::new();
        inventory.insert(
            ObjectKind::VirtualMachine,
            vec![vm("vm1", "vm-100"), vm("vm2", "vm-101")],
        );

        let rows = render_rows(&inventory, &[ObjectKind::VirtualMachine], "");
        assert_eq!(rows, vec![row("vm1", "vm-100"), row("vm2", "vm-101")]);
    }

    #[test]
    fn test_render_exact_name_filter() {
        let mut inventory = Inventory::new();
        inventory.insert(
            ObjectKind::VirtualMachine,
            vec![vm("vm1", "vm-100"), vm("vm2", "vm-101")],
        );

        let rows = render_rows(&inventory, &[ObjectKind::VirtualMachine], "vm2");
        assert_eq!(rows, vec![row("vm2", "vm-101")]);
    }

    #[test]
    fn test_render_groups_by_requested_kind_order() {
        // Populate the map in a different order than the requested kind set;
        // grouping must still follow the kind set.
        let mut inventory = Inventory::new();
        inventory.insert(ObjectKind::Network, vec![network("lan", "network-7")]);
        inventory.insert(ObjectKind::VirtualMachine, vec![vm("vm1", "vm-100")]);
        inventory.insert(ObjectKind::Datastore, vec![datastore("ssd0", "datastore-11")]);

        let rows = render_rows(&inventory, &ObjectKind::ALL, "");
        assert_eq!(
            rows,
            vec![
                row("ssd0", "datastore-11"),
                row("vm1", "vm-100"),
                row("lan", "network-7"),
            ]
        );
    }

    #[test]
    fn test_render_skips_kinds_without_results() {
        let inventory = Inventory::new();
        let rows = render_rows(&inventory, &ObjectKind::ALL, "");
        assert!(rows.is_empty());
    }

    #[test]
    fn test_print_table_renders_header_and_rows() {
        let mut out = Vec::new();
        print_table(&mut out, &[row("vm1", "vm-100")]).unwrap();
        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        let header = lines.next().unwrap();
        assert!(header.contains("Name:"));
        assert!(header.contains("Type:"));
        let first = lines.next().unwrap();
        assert!(first.contains("vm1"));
        assert!(first.contains("vm-100"));
    }

    #[test]
    fn test_print_table_empty_result_is_header_only() {
        let mut out = Vec::new();
        print_table(&mut out, &[]).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("Name:"));
        assert!(lines[0].contains("Type:"));
    }
}
