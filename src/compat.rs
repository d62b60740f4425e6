//! Component compatibility checks.
//!
//! These are deliberately simplified stand-ins for real motherboard,
//! socket and chipset matrices: AMD Ryzen 5000 CPUs are assumed DDR4-only,
//! Intel is assumed fine with either generation, and builder socket
//! matching is plain tag equality. Advisory only; a conflict never blocks
//! a cart mutation.

use crate::cart::CartEntry;
use crate::catalog::{CatalogItem, Category, CompatTag};

pub const ONLY_ONE_CPU: &str = "Only one CPU can be in the cart at a time.";
pub const AMD_NEEDS_DDR4: &str =
    "An AMD Ryzen 5000 series CPU is typically compatible only with DDR4 RAM. Remove the DDR5 RAM.";
pub const NO_MIXED_DDR: &str = "You cannot mix DDR4 and DDR5 RAM in a single build.";

/// Check the cart contents against the CPU/RAM rules. Rules are evaluated
/// in source order and the first violation wins.
pub fn check_cart(entries: &[CartEntry]) -> Option<&'static str> {
    let cpus: Vec<&CartEntry> = entries.iter().filter(|e| e.category == Category::Cpu).collect();
    let rams: Vec<&CartEntry> = entries.iter().filter(|e| e.category == Category::Ram).collect();

    if cpus.len() > 1 {
        return Some(ONLY_ONE_CPU);
    }

    if let [cpu] = cpus[..] {
        if cpu.tag == CompatTag::Amd && rams.iter().any(|r| r.tag == CompatTag::Ddr5) {
            return Some(AMD_NEEDS_DDR4);
        }
    }

    let has_ddr4 = rams.iter().any(|r| r.tag == CompatTag::Ddr4);
    let has_ddr5 = rams.iter().any(|r| r.tag == CompatTag::Ddr5);
    if has_ddr4 && has_ddr5 {
        return Some(NO_MIXED_DDR);
    }

    None
}

/// Live CPU + motherboard socket verdict for the configurator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocketStatus {
    Compatible,
    Incompatible,
    /// One or both of the pair is still unselected.
    NoData,
}

pub fn socket_status(cpu: Option<&CatalogItem>, motherboard: Option<&CatalogItem>) -> SocketStatus {
    match (cpu, motherboard) {
        (Some(cpu), Some(board)) if cpu.tag == board.tag => SocketStatus::Compatible,
        (Some(_), Some(_)) => SocketStatus::Incompatible,
        _ => SocketStatus::NoData,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::Cart;
    use crate::catalog::{builder_catalog, storefront_catalog};

    fn entry(id: &str, category: Category, tag: CompatTag) -> CartEntry {
        CartEntry {
            id: id.to_string(),
            name: id.to_string(),
            price: 0,
            category,
            tag,
        }
    }

    #[test]
    fn empty_cart_has_no_warning() {
        assert_eq!(check_cart(&[]), None);
    }

    #[test]
    fn two_cpus_report_only_one_allowed() {
        // Unreachable through Cart::add, but the checker is pure over
        // whatever entries it is handed.
        let entries = vec![
            entry("a", Category::Cpu, CompatTag::Amd),
            entry("b", Category::Cpu, CompatTag::Intel),
            entry("c", Category::Ram, CompatTag::Ddr4),
            entry("d", Category::Ram, CompatTag::Ddr5),
        ];
        assert_eq!(check_cart(&entries), Some(ONLY_ONE_CPU));
    }

    #[test]
    fn amd_with_ddr5_warns_and_swapping_to_ddr4_clears() {
        let catalog = storefront_catalog();
        let mut cart = Cart::new();
        cart.add(&catalog, "cpu-amd-5600x").unwrap();
        cart.add(&catalog, "ram-ddr5-16gb").unwrap();
        assert_eq!(check_cart(cart.entries()), Some(AMD_NEEDS_DDR4));

        cart.remove_one("ram-ddr5-16gb");
        cart.add(&catalog, "ram-ddr4-16gb").unwrap();
        assert_eq!(check_cart(cart.entries()), None);
    }

    #[test]
    fn intel_accepts_either_generation() {
        let catalog = storefront_catalog();
        let mut cart = Cart::new();
        cart.add(&catalog, "cpu-intel-13600k").unwrap();
        cart.add(&catalog, "ram-ddr5-16gb").unwrap();
        assert_eq!(check_cart(cart.entries()), None);
    }

    #[test]
    fn mixed_ddr_generations_warn_without_a_cpu() {
        let catalog = storefront_catalog();
        let mut cart = Cart::new();
        cart.add(&catalog, "ram-ddr4-16gb").unwrap();
        cart.add(&catalog, "ram-ddr5-16gb").unwrap();
        assert_eq!(check_cart(cart.entries()), Some(NO_MIXED_DDR));
    }

    #[test]
    fn amd_rule_outranks_mix_rule() {
        let catalog = storefront_catalog();
        let mut cart = Cart::new();
        cart.add(&catalog, "cpu-amd-5700x").unwrap();
        cart.add(&catalog, "ram-ddr4-16gb").unwrap();
        cart.add(&catalog, "ram-ddr5-16gb").unwrap();
        assert_eq!(check_cart(cart.entries()), Some(AMD_NEEDS_DDR4));
    }

    #[test]
    fn socket_status_transitions() {
        let parts = builder_catalog();
        let am4_cpu = parts.get("part-cpu-r5");
        let lga_board = parts.get("part-mobo-lga1200");
        let am4_board = parts.get("part-mobo-am4");

        assert_eq!(socket_status(None, None), SocketStatus::NoData);
        assert_eq!(socket_status(am4_cpu, None), SocketStatus::NoData);
        assert_eq!(socket_status(am4_cpu, lga_board), SocketStatus::Incompatible);
        assert_eq!(socket_status(am4_cpu, am4_board), SocketStatus::Compatible);
    }
}
