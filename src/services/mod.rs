use crate::error::StorageResult;

pub mod admin_service;
pub mod auth_service;
pub mod cart_service;
pub mod order_service;
pub mod product_service;
pub mod profile_service;

/// Storage writes are best-effort: the in-memory state already changed, so a
/// failed write is only logged.
pub(crate) fn fail_soft(slot: &str, result: StorageResult<()>) {
    if let Err(err) = result {
        tracing::warn!(slot, error = %err, "slot write dropped");
    }
}
