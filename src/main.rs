mod builder;
mod cart;
mod catalog;
mod compat;
mod config;
mod types;
mod ui;

use clap::Parser;
use crossterm::event::{self, Event};
use serde::Serialize;
use std::io;
use std::process::exit;
use std::time::{Duration, Instant};

use catalog::{builder_catalog, storefront_catalog, Catalog, CatalogItem};
use config::{load_config, reset_config, Cli, SavedConfig, StartView};
use types::App;

fn display_startup_info(config: &SavedConfig, catalog_items: usize, part_count: usize) {
    eprintln!("🚀 Starting rigcart...");
    eprintln!("🛒 Storefront products: {}", catalog_items);
    eprintln!("🛠️  Builder parts: {}", part_count);
    eprintln!("💱 Currency: {}", config.currency);
    eprintln!();
    eprintln!("🎯 Tip: Tab switches between Shop, Builder and Settings (press 'q' to quit)");
    eprintln!();
}

fn show_view_help() {
    eprintln!("❌ Unknown start view!");
    eprintln!();
    eprintln!("💡 Usage examples:");
    eprintln!("   rigcart --view shop               # Open the storefront");
    eprintln!("   rigcart --view builder            # Open the PC build configurator");
    eprintln!("   rigcart --catalog parts.json      # Load a custom storefront catalog");
    eprintln!("   rigcart --json                    # Print the catalogs as JSON");
    eprintln!("   rigcart --reset                   # Reset saved configuration");
    eprintln!();
    eprintln!("📖 Use --help for more options");
}

#[derive(Serialize)]
struct CatalogDump<'a> {
    storefront: &'a [CatalogItem],
    builder_parts: &'a [CatalogItem],
}

fn load_storefront_catalog(cli: &Cli) -> Catalog {
    match &cli.catalog {
        Some(path) => match Catalog::from_json_file(path) {
            Ok(catalog) => catalog,
            Err(e) => {
                eprintln!("❌ Failed to load catalog from {}: {}", path.display(), e);
                exit(1);
            }
        },
        None => storefront_catalog(),
    }
}

fn main() -> Result<(), io::Error> {
    let cli = Cli::parse();

    // Handle reset flag first
    if cli.reset {
        match reset_config() {
            Ok(true) => {
                println!("✅ Saved configuration has been reset.");
                println!("   Next time you run the program, the defaults apply again.");
            }
            Ok(false) => {
                println!("ℹ️  No saved configuration found to reset.");
            }
            Err(e) => {
                eprintln!("❌ Error resetting configuration: {}", e);
                exit(1);
            }
        }
        return Ok(());
    }

    let catalog = load_storefront_catalog(&cli);
    let parts = builder_catalog();

    if cli.json {
        let dump = CatalogDump {
            storefront: catalog.items(),
            builder_parts: parts.items(),
        };
        if let Ok(json_output) = serde_json::to_string_pretty(&dump) {
            println!("{}", json_output);
        }
        return Ok(());
    }

    let mut config = load_config().unwrap_or_default();
    if let Some(view) = &cli.view {
        config.start_view = match view.as_str() {
            "shop" => StartView::Shop,
            "builder" => StartView::Builder,
            _ => {
                show_view_help();
                exit(1);
            }
        };
    }

    display_startup_info(&config, catalog.len(), parts.len());

    // Small delay to let the user read the information
    std::thread::sleep(Duration::from_millis(800));

    let mut app = App::new(catalog, parts, config);
    let mut terminal = ui::setup_terminal()?;

    let tick_rate = Duration::from_millis(250);
    let mut last_tick = Instant::now();

    loop {
        // --- Draw UI ---
        ui::render_ui(&app, &mut terminal)?;

        // --- Input Handling ---
        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(event) = event::read()? {
                if event.kind == crossterm::event::KeyEventKind::Press {
                    if ui::input::handle_key_event(&mut app, event.code) {
                        break; // Exit condition
                    }
                }
            }
        }

        // --- Tick-based updates ---
        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }
    }

    ui::restore_terminal(&mut terminal)?;
    Ok(())
}
