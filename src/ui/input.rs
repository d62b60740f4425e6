use crossterm::event::KeyCode;

use crate::builder::BUILD_SLOTS;
use crate::config::{save_config, reset_config, StartView};
use crate::types::{Action, App, AppMode, ShopPane};

/// Handle keyboard input events for all application modes.
/// Returns true when the application should exit.
pub fn handle_key_event(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('q') => return true,
        KeyCode::Tab => {
            app.mode = match app.mode {
                AppMode::Shop => AppMode::Builder,
                AppMode::Builder => AppMode::Settings,
                AppMode::Settings => AppMode::Shop,
            };
            return false;
        }
        _ => {}
    }
    match app.mode {
        AppMode::Shop => handle_shop_keys(app, key),
        AppMode::Builder => handle_builder_keys(app, key),
        AppMode::Settings => handle_settings_keys(app, key),
    }
}

/// Handle key events in the storefront view
fn handle_shop_keys(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Left => app.shop_pane = ShopPane::Catalog,
        KeyCode::Right => app.shop_pane = ShopPane::Cart,
        KeyCode::Up => match app.shop_pane {
            ShopPane::Catalog => {
                if app.catalog_index > 0 {
                    app.catalog_index -= 1;
                }
            }
            ShopPane::Cart => {
                if app.cart_index > 0 {
                    app.cart_index -= 1;
                }
            }
        },
        KeyCode::Down => match app.shop_pane {
            ShopPane::Catalog => {
                if app.catalog_index + 1 < app.catalog.len() {
                    app.catalog_index += 1;
                }
            }
            ShopPane::Cart => {
                if app.cart_index + 1 < app.cart.rows().len() {
                    app.cart_index += 1;
                }
            }
        },
        KeyCode::Enter | KeyCode::Char('a') => {
            let id = app.selected_catalog_item().map(|item| item.id.clone());
            if let Some(id) = id {
                app.apply(Action::AddItem(id));
            }
        }
        KeyCode::Char('r') | KeyCode::Delete => {
            if let Some(id) = app.selected_cart_id() {
                app.apply(Action::RemoveOne(id));
            }
        }
        _ => {}
    }
    false
}

/// Handle key events in the build configurator view
fn handle_builder_keys(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up => {
            if app.slot_index > 0 {
                app.slot_index -= 1;
            }
        }
        KeyCode::Down => {
            if app.slot_index + 1 < BUILD_SLOTS.len() {
                app.slot_index += 1;
            }
        }
        KeyCode::Left => cycle_slot_option(app, -1),
        KeyCode::Right => cycle_slot_option(app, 1),
        KeyCode::Char('c') | KeyCode::Delete => {
            let slot = app.selected_slot();
            app.apply(Action::ClearSlot(slot));
        }
        _ => {}
    }
    false
}

/// Cycle the cursor slot's selection through None -> first option -> ... ->
/// last option -> None.
fn cycle_slot_option(app: &mut App, step: isize) {
    let slot = app.selected_slot();
    let options: Vec<String> = app
        .parts
        .in_category(slot)
        .map(|item| item.id.clone())
        .collect();
    if options.is_empty() {
        return;
    }

    // Position 0 is "nothing selected", positions 1..=len are the options.
    let current = app
        .build
        .selected(slot)
        .and_then(|item| options.iter().position(|id| *id == item.id))
        .map(|i| i + 1)
        .unwrap_or(0);
    let count = options.len() as isize + 1;
    let next = (current as isize + step).rem_euclid(count) as usize;

    if next == 0 {
        app.apply(Action::ClearSlot(slot));
    } else {
        app.apply(Action::Select(slot, options[next - 1].clone()));
    }
}

/// Handle key events in the settings view
fn handle_settings_keys(app: &mut App, key: KeyCode) -> bool {
    const OPTION_COUNT: usize = 3; // currency, start view, subtotals
    match key {
        KeyCode::Esc => app.mode = AppMode::Shop,
        KeyCode::Up => {
            if app.settings_index > 0 {
                app.settings_index -= 1;
            }
        }
        KeyCode::Down => {
            if app.settings_index + 1 < OPTION_COUNT {
                app.settings_index += 1;
            }
        }
        KeyCode::Left | KeyCode::Right => {
            adjust_setting(app);
            match save_config(&app.config) {
                Ok(()) => app.set_settings_notification("✅ Configuration saved".to_string()),
                Err(e) => {
                    app.set_settings_notification(format!("❌ Could not save configuration: {}", e))
                }
            }
        }
        KeyCode::Char('r') => match reset_config() {
            Ok(true) => app.set_settings_notification("✅ Saved configuration removed".to_string()),
            Ok(false) => {
                app.set_settings_notification("ℹ️ No saved configuration found".to_string())
            }
            Err(e) => {
                app.set_settings_notification(format!("❌ Could not remove configuration: {}", e))
            }
        },
        _ => {}
    }
    false
}

fn adjust_setting(app: &mut App) {
    match app.settings_index {
        0 => {
            // Cycle through the supported currency symbols.
            const SYMBOLS: [&str; 3] = ["₱", "$", "€"];
            let current = SYMBOLS
                .iter()
                .position(|s| *s == app.config.currency)
                .unwrap_or(0);
            app.config.currency = SYMBOLS[(current + 1) % SYMBOLS.len()].to_string();
        }
        1 => {
            app.config.start_view = match app.config.start_view {
                StartView::Shop => StartView::Builder,
                StartView::Builder => StartView::Shop,
            };
        }
        _ => app.config.show_subtotals = !app.config.show_subtotals,
    }
}
