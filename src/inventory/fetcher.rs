use super::kind::ObjectKind;
use super::record::InventoryRecord;
use crate::error::ScoutError;
use crate::vsphere::VimClient;
use indexmap::IndexMap;
use log::{debug, warn};

/// Per-kind results; keys follow insertion order, records keep retrieval order.
pub type Inventory = IndexMap<ObjectKind, Vec<InventoryRecord>>;

/// Retrieves the summaries of every requested kind through one scoped view.
///
/// The fetch is all-or-nothing: the first failing retrieval aborts the whole
/// operation and nothing is returned for kinds already retrieved. The view is
/// destroyed on every exit path; a destroy failure is logged, not propagated.
pub async fn fetch_inventory(
    client: &dyn VimClient,
    kinds: &[ObjectKind],
) -> Result<Inventory, ScoutError> {
    let mut view = client
        .create_container_view(kinds)
        .await
        .map_err(ScoutError::View)?;

    let mut inventory = Inventory::new();
    let mut failure = None;

    for &kind in kinds {
        debug!("retrieving {kind} summaries");
        match view.retrieve(kind).await {
            Ok(records) => {
                debug!("retrieved {} {kind} objects", records.len());
                inventory.insert(kind, records);
            }
            Err(cause) => {
                failure = Some(ScoutError::Fetch { kind, cause });
                break;
            }
        }
    }

    if let Err(e) = view.destroy().await {
        warn!("failed to destroy container view: {e}");
    }

    match failure {
        Some(err) => Err(err),
        None => Ok(inventory),
    }
}
