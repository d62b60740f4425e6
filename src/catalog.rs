use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// The functional slot a component fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "CPU")]
    Cpu,
    #[serde(rename = "RAM")]
    Ram,
    Storage,
    #[serde(rename = "GPU")]
    Gpu,
    Build,
    Motherboard,
    #[serde(rename = "PSU")]
    Psu,
    Case,
    Cooling,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Cpu => "CPU",
            Category::Ram => "RAM",
            Category::Storage => "Storage",
            Category::Gpu => "GPU",
            Category::Build => "Build",
            Category::Motherboard => "Motherboard",
            Category::Psu => "PSU",
            Category::Case => "Case",
            Category::Cooling => "Cooling",
        }
    }

    /// RAM and Storage are the only categories the cart accepts more than once.
    pub fn repeatable(&self) -> bool {
        matches!(self, Category::Ram | Category::Storage)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Interoperability group of an item: CPU vendor, RAM generation,
/// CPU socket, or Universal for unconstrained parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompatTag {
    #[serde(rename = "AMD")]
    Amd,
    Intel,
    #[serde(rename = "DDR4")]
    Ddr4,
    #[serde(rename = "DDR5")]
    Ddr5,
    #[serde(rename = "AM4")]
    Am4,
    #[serde(rename = "LGA1200")]
    Lga1200,
    Universal,
    Build,
}

impl CompatTag {
    pub fn label(&self) -> &'static str {
        match self {
            CompatTag::Amd => "AMD",
            CompatTag::Intel => "Intel",
            CompatTag::Ddr4 => "DDR4",
            CompatTag::Ddr5 => "DDR5",
            CompatTag::Am4 => "AM4",
            CompatTag::Lga1200 => "LGA1200",
            CompatTag::Universal => "Universal",
            CompatTag::Build => "Build",
        }
    }
}

/// A single product record. Prices are non-negative integers in the minor
/// currency unit. Catalog items are never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    pub price: u64,
    pub category: Category,
    pub tag: CompatTag,
}

#[derive(Debug)]
pub enum CatalogError {
    Io(io::Error),
    Parse(serde_json::Error),
    DuplicateId(String),
}

impl From<io::Error> for CatalogError {
    fn from(error: io::Error) -> Self {
        CatalogError::Io(error)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(error: serde_json::Error) -> Self {
        CatalogError::Parse(error)
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io(e) => write!(f, "could not read catalog file: {}", e),
            CatalogError::Parse(e) => write!(f, "invalid catalog JSON: {}", e),
            CatalogError::DuplicateId(id) => write!(f, "duplicate item id '{}'", id),
        }
    }
}

/// Read-only ordered collection of catalog items. Lookups are linear scans;
/// catalogs hold at most a few dozen items.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    pub fn new(items: Vec<CatalogItem>) -> Result<Self, CatalogError> {
        for (i, item) in items.iter().enumerate() {
            if items[..i].iter().any(|other| other.id == item.id) {
                return Err(CatalogError::DuplicateId(item.id.clone()));
            }
        }
        Ok(Catalog { items })
    }

    /// Load a catalog from a JSON array of items.
    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let data = fs::read_to_string(path)?;
        let items: Vec<CatalogItem> = serde_json::from_str(&data)?;
        Catalog::new(items)
    }

    pub fn get(&self, id: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Reverse lookup by display name. The original site resolved static
    /// button labels back to ids this way; kept for external catalog files
    /// that reference items by name.
    pub fn find_by_name(&self, name: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.name == name)
    }

    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &CatalogItem> {
        self.items.iter().filter(move |item| item.category == category)
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn item(id: &str, name: &str, price: u64, category: Category, tag: CompatTag) -> CatalogItem {
    CatalogItem {
        id: id.to_string(),
        name: name.to_string(),
        price,
        category,
        tag,
    }
}

/// The built-in storefront products: CPUs and RAM carry vendor/generation
/// tags for the cart compatibility rules, everything else is Universal.
pub fn storefront_catalog() -> Catalog {
    let items = vec![
        // Processors
        item("cpu-amd-5600x", "AMD Ryzen 5 5600X", 8500, Category::Cpu, CompatTag::Amd),
        item("cpu-intel-13600k", "Intel Core i5-13600K", 9200, Category::Cpu, CompatTag::Intel),
        item("cpu-amd-5700x", "AMD Ryzen 7 5700X", 12500, Category::Cpu, CompatTag::Amd),
        // Memory
        item("ram-ddr4-16gb", "16GB DDR4 RAM", 3500, Category::Ram, CompatTag::Ddr4),
        item("ram-ddr4-32gb", "32GB DDR4 RAM", 6500, Category::Ram, CompatTag::Ddr4),
        item("ram-ddr5-16gb", "16GB DDR5 RAM", 5200, Category::Ram, CompatTag::Ddr5),
        // Storage
        item("storage-nvme-500gb", "500GB NVMe SSD", 2800, Category::Storage, CompatTag::Universal),
        item("storage-sata-1tb", "1TB SATA SSD", 4500, Category::Storage, CompatTag::Universal),
        item("storage-hdd-2tb", "2TB HDD", 2200, Category::Storage, CompatTag::Universal),
        // Graphics cards
        item("gpu-rtx-3050", "NVIDIA RTX 3050", 12000, Category::Gpu, CompatTag::Universal),
        item("gpu-rx-6600", "AMD RX 6600", 14500, Category::Gpu, CompatTag::Universal),
        item("gpu-rtx-3060", "NVIDIA RTX 3060", 18000, Category::Gpu, CompatTag::Universal),
        // Prebuilt machines, sold as single items
        item("build-entry", "Entry-Level Gaming Build", 25000, Category::Build, CompatTag::Build),
        item("build-high", "High-Performance Gaming Build", 40000, Category::Build, CompatTag::Build),
        item("build-ultimate", "Ultimate Gaming Build", 60000, Category::Build, CompatTag::Build),
    ];
    // Built-in ids are distinct by construction.
    Catalog { items }
}

/// The configurator parts list. CPUs and motherboards carry socket tags
/// compared for the live compatibility status.
pub fn builder_catalog() -> Catalog {
    let items = vec![
        item("part-cpu-i5", "Intel i5", 11500, Category::Cpu, CompatTag::Lga1200),
        item("part-cpu-i7", "Intel i7", 20000, Category::Cpu, CompatTag::Lga1200),
        item("part-cpu-r5", "AMD Ryzen 5", 12500, Category::Cpu, CompatTag::Am4),
        item("part-cpu-r7", "AMD Ryzen 7", 23000, Category::Cpu, CompatTag::Am4),
        item("part-mobo-lga1200", "ASUS LGA1200 Board", 8600, Category::Motherboard, CompatTag::Lga1200),
        item("part-mobo-am4", "Gigabyte AM4 Board", 7500, Category::Motherboard, CompatTag::Am4),
        item("part-ram-16gb", "16GB DDR4", 4600, Category::Ram, CompatTag::Ddr4),
        item("part-ram-32gb", "32GB DDR4", 8600, Category::Ram, CompatTag::Ddr4),
        item("part-gpu-3060", "NVIDIA RTX 3060", 23000, Category::Gpu, CompatTag::Universal),
        item("part-gpu-4070", "NVIDIA RTX 4070", 34500, Category::Gpu, CompatTag::Universal),
        item("part-storage-ssd-1tb", "1TB SSD", 4000, Category::Storage, CompatTag::Universal),
        item("part-storage-hdd-2tb", "2TB HDD", 2900, Category::Storage, CompatTag::Universal),
        item("part-psu-650w", "650W PSU", 4600, Category::Psu, CompatTag::Universal),
        item("part-psu-750w", "750W PSU", 5800, Category::Psu, CompatTag::Universal),
        item("part-case-mid", "Mid Tower", 4000, Category::Case, CompatTag::Universal),
        item("part-case-full", "Full Tower", 6900, Category::Case, CompatTag::Universal),
        item("part-cooling-air", "Air Cooler", 2900, Category::Cooling, CompatTag::Universal),
        item("part-cooling-liquid", "Liquid Cooler", 6900, Category::Cooling, CompatTag::Universal),
    ];
    Catalog { items }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn get_by_id_and_not_found() {
        let catalog = storefront_catalog();
        let cpu = catalog.get("cpu-amd-5600x").unwrap();
        assert_eq!(cpu.name, "AMD Ryzen 5 5600X");
        assert_eq!(cpu.price, 8500);
        assert_eq!(cpu.category, Category::Cpu);
        assert_eq!(cpu.tag, CompatTag::Amd);
        assert!(catalog.get("no-such-item").is_none());
    }

    #[test]
    fn reverse_lookup_by_name() {
        let catalog = storefront_catalog();
        let item = catalog.find_by_name("16GB DDR5 RAM").unwrap();
        assert_eq!(item.id, "ram-ddr5-16gb");
        assert!(catalog.find_by_name("Quantum RAM").is_none());
    }

    #[test]
    fn in_category_filters() {
        let catalog = storefront_catalog();
        let cpus: Vec<_> = catalog.in_category(Category::Cpu).collect();
        assert_eq!(cpus.len(), 3);
        assert!(cpus.iter().all(|i| i.category == Category::Cpu));
    }

    #[test]
    fn builder_catalog_carries_socket_tags() {
        let parts = builder_catalog();
        assert_eq!(parts.get("part-cpu-r5").unwrap().tag, CompatTag::Am4);
        assert_eq!(parts.get("part-mobo-lga1200").unwrap().tag, CompatTag::Lga1200);
        assert_eq!(parts.get("part-psu-650w").unwrap().tag, CompatTag::Universal);
    }

    #[test]
    fn duplicate_ids_rejected() {
        let items = vec![
            item("x", "First", 1, Category::Gpu, CompatTag::Universal),
            item("x", "Second", 2, Category::Gpu, CompatTag::Universal),
        ];
        match Catalog::new(items) {
            Err(CatalogError::DuplicateId(id)) => assert_eq!(id, "x"),
            other => panic!("expected duplicate id error, got {:?}", other),
        }
    }

    #[test]
    fn loads_catalog_from_json_file() {
        let json = r#"[
            {"id": "cpu-1", "name": "Test CPU", "price": 100, "category": "CPU", "tag": "AMD"},
            {"id": "ram-1", "name": "Test RAM", "price": 50, "category": "RAM", "tag": "DDR5"}
        ]"#;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let catalog = Catalog::from_json_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("cpu-1").unwrap().tag, CompatTag::Amd);
        assert_eq!(catalog.get("ram-1").unwrap().category, Category::Ram);
    }

    #[test]
    fn bad_json_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json ]").unwrap();
        assert!(matches!(
            Catalog::from_json_file(file.path()),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(matches!(
            Catalog::from_json_file(Path::new("/nonexistent/catalog.json")),
            Err(CatalogError::Io(_))
        ));
    }
}
