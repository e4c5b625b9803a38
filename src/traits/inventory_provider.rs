use async_trait::async_trait;
use crate::enums::fetch_outcome::FetchOutcome;
use crate::structs::resource_inventory::ResourceInventory;

/// What an inventory fetch produced. On `Timeout` the inventory may be
/// empty or partial; the caller's timeout policy decides what happens
/// to the project.
pub struct InventoryFetch {
    pub inventory: ResourceInventory,
    pub outcome: FetchOutcome,
}

impl InventoryFetch {
    pub fn success(inventory: ResourceInventory) -> Self {
        Self { inventory, outcome: FetchOutcome::Success }
    }

    pub fn timeout(inventory: ResourceInventory) -> Self {
        Self { inventory, outcome: FetchOutcome::Timeout }
    }

    pub fn failure() -> Self {
        Self { inventory: ResourceInventory::default(), outcome: FetchOutcome::Failure }
    }
}

/// Resource inventory boundary. Implementations may gather a project's
/// resources any way they like — the production one prefers a bulk
/// query and silently falls back to per-service listings — and callers
/// must not assume which strategy produced a given inventory.
#[async_trait]
pub trait InventoryProvider: Send + Sync {
    async fn inventory(&self, project_id: &str) -> InventoryFetch;
}
