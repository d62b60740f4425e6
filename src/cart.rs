use crate::catalog::{Catalog, CatalogItem, Category, CompatTag};

/// One unit of a product in the cart. Entries are value copies of the
/// catalog record at the time of the add, so later catalog edits never
/// retroactively change cart contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartEntry {
    pub id: String,
    pub name: String,
    pub price: u64,
    pub category: Category,
    pub tag: CompatTag,
}

impl From<&CatalogItem> for CartEntry {
    fn from(item: &CatalogItem) -> Self {
        CartEntry {
            id: item.id.clone(),
            name: item.name.clone(),
            price: item.price,
            category: item.category,
            tag: item.tag,
        }
    }
}

/// Why an add was refused. The cart is left unchanged in both cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddRejection {
    /// Id not present in the catalog. Callers treat this as a silent no-op.
    UnknownItem,
    /// A non-repeatable category already has an entry in the cart.
    /// Callers surface this to the user.
    CategoryTaken(Category),
}

/// A grouped display row: all units of one product collapsed into a
/// quantity and subtotal, in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartRow {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub unit_price: u64,
    pub quantity: u64,
    pub subtotal: u64,
}

/// The mutable ordered sequence of selected items.
#[derive(Debug, Default)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    pub fn new() -> Self {
        Cart { entries: Vec::new() }
    }

    /// Append one unit of the identified product. RAM and Storage may
    /// repeat; any other category is limited to a single entry.
    pub fn add(&mut self, catalog: &Catalog, id: &str) -> Result<(), AddRejection> {
        let item = catalog.get(id).ok_or(AddRejection::UnknownItem)?;
        if !item.category.repeatable()
            && self.entries.iter().any(|e| e.category == item.category)
        {
            return Err(AddRejection::CategoryTaken(item.category));
        }
        self.entries.push(CartEntry::from(item));
        Ok(())
    }

    /// Remove the first entry (insertion order) matching the id.
    /// Returns false when no entry matched.
    pub fn remove_one(&mut self, id: &str) -> bool {
        match self.entries.iter().position(|e| e.id == id) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// Grand total, recomputed from scratch on every call.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|e| e.price).sum()
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Group entries by id into display rows, preserving first-seen order.
    pub fn rows(&self) -> Vec<CartRow> {
        let mut rows: Vec<CartRow> = Vec::new();
        for entry in &self.entries {
            if let Some(row) = rows.iter_mut().find(|r| r.id == entry.id) {
                row.quantity += 1;
                row.subtotal += entry.price;
            } else {
                rows.push(CartRow {
                    id: entry.id.clone(),
                    name: entry.name.clone(),
                    category: entry.category,
                    unit_price: entry.price,
                    quantity: 1,
                    subtotal: entry.price,
                });
            }
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::storefront_catalog;

    #[test]
    fn add_unknown_id_is_a_noop() {
        let catalog = storefront_catalog();
        let mut cart = Cart::new();
        assert_eq!(cart.add(&catalog, "no-such-item"), Err(AddRejection::UnknownItem));
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0);
    }

    #[test]
    fn second_cpu_is_rejected() {
        let catalog = storefront_catalog();
        let mut cart = Cart::new();
        cart.add(&catalog, "cpu-amd-5600x").unwrap();
        assert_eq!(
            cart.add(&catalog, "cpu-intel-13600k"),
            Err(AddRejection::CategoryTaken(Category::Cpu))
        );
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.entries()[0].id, "cpu-amd-5600x");
    }

    #[test]
    fn ram_and_storage_may_repeat() {
        let catalog = storefront_catalog();
        let mut cart = Cart::new();
        cart.add(&catalog, "ram-ddr4-16gb").unwrap();
        cart.add(&catalog, "ram-ddr4-16gb").unwrap();
        cart.add(&catalog, "ram-ddr4-32gb").unwrap();
        cart.add(&catalog, "storage-hdd-2tb").unwrap();
        cart.add(&catalog, "storage-hdd-2tb").unwrap();
        assert_eq!(cart.len(), 5);
    }

    #[test]
    fn one_gpu_only_but_one_of_each_category_coexists() {
        let catalog = storefront_catalog();
        let mut cart = Cart::new();
        cart.add(&catalog, "gpu-rtx-3050").unwrap();
        assert_eq!(
            cart.add(&catalog, "gpu-rx-6600"),
            Err(AddRejection::CategoryTaken(Category::Gpu))
        );
        cart.add(&catalog, "cpu-amd-5600x").unwrap();
        cart.add(&catalog, "build-entry").unwrap();
        assert_eq!(cart.len(), 3);
    }

    #[test]
    fn adding_never_mutates_existing_entries() {
        let catalog = storefront_catalog();
        let mut cart = Cart::new();
        cart.add(&catalog, "cpu-amd-5600x").unwrap();
        cart.add(&catalog, "ram-ddr4-16gb").unwrap();
        let before: Vec<CartEntry> = cart.entries().to_vec();

        cart.add(&catalog, "gpu-rtx-3060").unwrap();
        assert_eq!(&cart.entries()[..2], &before[..]);
    }

    #[test]
    fn remove_first_matching_entry_in_insertion_order() {
        let catalog = storefront_catalog();
        let mut cart = Cart::new();
        cart.add(&catalog, "ram-ddr4-16gb").unwrap();
        cart.add(&catalog, "storage-hdd-2tb").unwrap();
        cart.add(&catalog, "ram-ddr4-16gb").unwrap();

        assert!(cart.remove_one("ram-ddr4-16gb"));
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.entries()[0].id, "storage-hdd-2tb");
        assert_eq!(cart.entries()[1].id, "ram-ddr4-16gb");
    }

    #[test]
    fn remove_absent_id_leaves_cart_unchanged() {
        let catalog = storefront_catalog();
        let mut cart = Cart::new();
        cart.add(&catalog, "ram-ddr4-16gb").unwrap();
        let before: Vec<CartEntry> = cart.entries().to_vec();

        assert!(!cart.remove_one("gpu-rtx-3050"));
        assert_eq!(cart.entries(), &before[..]);
    }

    #[test]
    fn total_matches_sum_of_entries_across_mutations() {
        let catalog = storefront_catalog();
        let mut cart = Cart::new();
        let actions: &[(&str, bool)] = &[
            ("cpu-amd-5600x", true),
            ("ram-ddr4-16gb", true),
            ("ram-ddr4-16gb", true),
            ("ram-ddr4-16gb", false), // remove
            ("storage-nvme-500gb", true),
            ("cpu-amd-5600x", false), // remove
            ("gpu-rx-6600", true),
        ];
        for (id, is_add) in actions {
            if *is_add {
                let _ = cart.add(&catalog, id);
            } else {
                cart.remove_one(id);
            }
            let expected: u64 = cart.entries().iter().map(|e| e.price).sum();
            assert_eq!(cart.total(), expected);
        }
    }

    #[test]
    fn empty_cart_totals_zero() {
        let cart = Cart::new();
        assert_eq!(cart.total(), 0);
        assert!(cart.rows().is_empty());
    }

    #[test]
    fn rows_group_by_id_in_first_seen_order() {
        let catalog = storefront_catalog();
        let mut cart = Cart::new();
        cart.add(&catalog, "ram-ddr4-16gb").unwrap();
        cart.add(&catalog, "storage-hdd-2tb").unwrap();
        cart.add(&catalog, "ram-ddr4-16gb").unwrap();

        let rows = cart.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, "ram-ddr4-16gb");
        assert_eq!(rows[0].quantity, 2);
        assert_eq!(rows[0].unit_price, 3500);
        assert_eq!(rows[0].subtotal, 7000);
        assert_eq!(rows[1].id, "storage-hdd-2tb");
        assert_eq!(rows[1].quantity, 1);
        assert_eq!(rows[1].subtotal, 2200);
    }
}
