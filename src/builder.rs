use std::collections::HashMap;

use crate::catalog::{Catalog, CatalogItem, Category};
use crate::compat::{socket_status, SocketStatus};

/// Fixed slot order of the configurator.
pub const BUILD_SLOTS: [Category; 8] = [
    Category::Cpu,
    Category::Motherboard,
    Category::Ram,
    Category::Gpu,
    Category::Storage,
    Category::Psu,
    Category::Case,
    Category::Cooling,
];

/// One display line of the configurator: a filled slot with its pick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildRow {
    pub slot: Category,
    pub name: String,
    pub price: u64,
}

/// The configurator state: at most one selected part per slot. Selecting
/// into an occupied slot is a pure overwrite, no history.
#[derive(Debug, Default)]
pub struct BuildSelection {
    slots: HashMap<Category, CatalogItem>,
}

impl BuildSelection {
    pub fn new() -> Self {
        BuildSelection { slots: HashMap::new() }
    }

    /// Select the identified part into its category slot, replacing any
    /// prior pick. Unknown ids and categories outside the slot set are
    /// no-ops; returns whether a slot changed.
    pub fn select(&mut self, catalog: &Catalog, id: &str) -> bool {
        let Some(item) = catalog.get(id) else {
            return false;
        };
        if !BUILD_SLOTS.contains(&item.category) {
            return false;
        }
        self.slots.insert(item.category, item.clone());
        true
    }

    pub fn clear(&mut self, slot: Category) {
        self.slots.remove(&slot);
    }

    pub fn selected(&self, slot: Category) -> Option<&CatalogItem> {
        self.slots.get(&slot)
    }

    /// Sum over all filled slots, recomputed from scratch.
    pub fn total(&self) -> u64 {
        self.slots.values().map(|item| item.price).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// One row per filled slot, in fixed slot order.
    pub fn rows(&self) -> Vec<BuildRow> {
        BUILD_SLOTS
            .iter()
            .filter_map(|slot| {
                self.slots.get(slot).map(|item| BuildRow {
                    slot: *slot,
                    name: item.name.clone(),
                    price: item.price,
                })
            })
            .collect()
    }

    /// Socket verdict for the CPU + motherboard pair.
    pub fn socket_status(&self) -> SocketStatus {
        socket_status(
            self.selected(Category::Cpu),
            self.selected(Category::Motherboard),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builder_catalog;

    #[test]
    fn select_fills_the_slot_for_the_item_category() {
        let parts = builder_catalog();
        let mut build = BuildSelection::new();
        assert!(build.select(&parts, "part-cpu-i5"));
        assert_eq!(build.selected(Category::Cpu).unwrap().name, "Intel i5");
        assert!(build.selected(Category::Motherboard).is_none());
    }

    #[test]
    fn selecting_again_replaces_the_prior_pick() {
        let parts = builder_catalog();
        let mut build = BuildSelection::new();
        build.select(&parts, "part-cpu-i5");
        build.select(&parts, "part-cpu-r7");
        assert_eq!(build.selected(Category::Cpu).unwrap().id, "part-cpu-r7");
        assert_eq!(build.rows().len(), 1);
    }

    #[test]
    fn unknown_id_is_a_noop() {
        let parts = builder_catalog();
        let mut build = BuildSelection::new();
        assert!(!build.select(&parts, "part-cpu-i9"));
        assert!(build.is_empty());
    }

    #[test]
    fn total_sums_filled_slots_and_clear_removes() {
        let parts = builder_catalog();
        let mut build = BuildSelection::new();
        assert_eq!(build.total(), 0);
        build.select(&parts, "part-cpu-r5"); // 12500
        build.select(&parts, "part-psu-650w"); // 4600
        assert_eq!(build.total(), 17100);

        build.clear(Category::Psu);
        assert_eq!(build.total(), 12500);
        assert!(build.selected(Category::Psu).is_none());
    }

    #[test]
    fn rows_follow_fixed_slot_order() {
        let parts = builder_catalog();
        let mut build = BuildSelection::new();
        build.select(&parts, "part-case-mid");
        build.select(&parts, "part-cpu-i7");
        build.select(&parts, "part-ram-32gb");

        let slots: Vec<Category> = build.rows().iter().map(|r| r.slot).collect();
        assert_eq!(slots, vec![Category::Cpu, Category::Ram, Category::Case]);
    }

    #[test]
    fn socket_status_follows_the_motherboard_swap() {
        let parts = builder_catalog();
        let mut build = BuildSelection::new();
        assert_eq!(build.socket_status(), SocketStatus::NoData);

        build.select(&parts, "part-cpu-r5"); // AM4
        build.select(&parts, "part-mobo-lga1200");
        assert_eq!(build.socket_status(), SocketStatus::Incompatible);

        build.select(&parts, "part-mobo-am4");
        assert_eq!(build.socket_status(), SocketStatus::Compatible);
    }
}
