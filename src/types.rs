use std::time::Instant;

use crate::builder::{BuildSelection, BUILD_SLOTS};
use crate::cart::{AddRejection, Cart};
use crate::catalog::{Catalog, CatalogItem, Category};
use crate::config::{SavedConfig, StartView};

/// How long a notice stays on screen before the tick loop clears it.
pub const NOTICE_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Shop,
    Builder,
    Settings,
}

/// Which half of the shop view the cursor lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopPane {
    Catalog,
    Cart,
}

/// A discrete user action carrying stable item ids end-to-end. Key events
/// are translated into these before any state is touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    AddItem(String),
    RemoveOne(String),
    Select(Category, String),
    ClearSlot(Category),
}

/// All mutable application state, owned by the main loop and passed by
/// reference to input handling and rendering.
pub struct App {
    pub mode: AppMode,
    pub catalog: Catalog,
    pub parts: Catalog,
    pub cart: Cart,
    pub build: BuildSelection,
    pub config: SavedConfig,

    pub shop_pane: ShopPane,
    pub catalog_index: usize,
    pub cart_index: usize,
    pub slot_index: usize,
    pub settings_index: usize,

    pub notice: Option<String>,
    pub notice_time: Option<Instant>,
    pub settings_notification: Option<String>,
    pub settings_notification_time: Option<Instant>,
}

impl App {
    pub fn new(catalog: Catalog, parts: Catalog, config: SavedConfig) -> Self {
        let mode = match config.start_view {
            StartView::Shop => AppMode::Shop,
            StartView::Builder => AppMode::Builder,
        };
        App {
            mode,
            catalog,
            parts,
            cart: Cart::new(),
            build: BuildSelection::new(),
            config,
            shop_pane: ShopPane::Catalog,
            catalog_index: 0,
            cart_index: 0,
            slot_index: 0,
            settings_index: 0,
            notice: None,
            notice_time: None,
            settings_notification: None,
            settings_notification_time: None,
        }
    }

    /// The single mutation entry point for cart and build state. Rejected
    /// adds raise a timed notice; unknown ids stay silent no-ops.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::AddItem(id) => match self.cart.add(&self.catalog, &id) {
                Ok(()) => {}
                Err(AddRejection::CategoryTaken(category)) => {
                    self.set_notice(format!(
                        "You can only add one {} item to the cart. Remove the existing one first.",
                        category.label()
                    ));
                }
                Err(AddRejection::UnknownItem) => {}
            },
            Action::RemoveOne(id) => {
                self.cart.remove_one(&id);
                self.clamp_cart_cursor();
            }
            Action::Select(slot, id) => {
                // The slot is implied by the item's category; the explicit
                // slot in the action only guards against mismatched pairs.
                if self.parts.get(&id).map(|item| item.category) == Some(slot) {
                    self.build.select(&self.parts, &id);
                }
            }
            Action::ClearSlot(slot) => {
                self.build.clear(slot);
            }
        }
    }

    pub fn set_notice(&mut self, message: String) {
        self.notice = Some(message);
        self.notice_time = Some(Instant::now());
    }

    pub fn set_settings_notification(&mut self, message: String) {
        self.settings_notification = Some(message);
        self.settings_notification_time = Some(Instant::now());
    }

    /// Expire timed notices. Called from the main loop on every tick.
    pub fn tick(&mut self) {
        if let Some(time) = self.notice_time {
            if time.elapsed().as_secs() >= NOTICE_TIMEOUT_SECS {
                self.notice = None;
                self.notice_time = None;
            }
        }
        if let Some(time) = self.settings_notification_time {
            if time.elapsed().as_secs() >= NOTICE_TIMEOUT_SECS {
                self.settings_notification = None;
                self.settings_notification_time = None;
            }
        }
    }

    /// Catalog item under the shop cursor.
    pub fn selected_catalog_item(&self) -> Option<&CatalogItem> {
        self.catalog.items().get(self.catalog_index)
    }

    /// Id of the cart row under the cart cursor.
    pub fn selected_cart_id(&self) -> Option<String> {
        self.cart.rows().get(self.cart_index).map(|row| row.id.clone())
    }

    /// Slot category under the builder cursor.
    pub fn selected_slot(&self) -> Category {
        BUILD_SLOTS[self.slot_index % BUILD_SLOTS.len()]
    }

    pub fn clamp_cart_cursor(&mut self) {
        let rows = self.cart.rows().len();
        if rows == 0 {
            self.cart_index = 0;
        } else if self.cart_index >= rows {
            self.cart_index = rows - 1;
        }
    }
}
