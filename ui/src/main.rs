use clap::Parser;
use moodji::app::application_lifecycle::{ApplicationLifecycle, StartupOptions, load_catalog};
use moodji::config::AppConfig;
use moodji::{listing, logger};

use catalog::{CategoryFilter, GalleryState};
use std::error::Error as StdError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "moodji", version)]
#[command(about = "Browse, search and inspect the Moodji archetypes in your terminal")]
struct Cli {
    /// Archetype dataset to load (.json or .toml) instead of the built-in one
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Start with this search text
    #[arg(long, value_name = "TEXT", default_value = "")]
    query: String,

    /// Start with this category selected
    #[arg(long, value_name = "NAME")]
    category: Option<String>,

    /// Print the matching archetypes and exit without starting the gallery
    #[arg(long)]
    list: bool,

    /// Print the --list output as JSON
    #[arg(long, requires = "list")]
    json: bool,
}

fn main() -> Result<(), Box<dyn StdError>> {
    let cli = Cli::parse();

    let config = ApplicationLifecycle::load_configuration()?;
    if let Err(e) = logger::setup_logger(config.logging()) {
        eprintln!("Warning: Failed to initialize logger: {e}");
    }

    if cli.list {
        return print_listing(&cli, config);
    }

    let options = StartupOptions {
        catalog_path: cli.catalog,
        query: cli.query,
        category: cli.category,
    };

    let mut model = ApplicationLifecycle::initialize(options)?;
    ApplicationLifecycle::setup_terminal(&mut model)?;
    let result = ApplicationLifecycle::run_application_loop(&mut model);
    ApplicationLifecycle::shutdown_application(model)?;
    result
}

fn print_listing(cli: &Cli, config: &AppConfig) -> Result<(), Box<dyn StdError>> {
    let path = cli.catalog.clone().or_else(|| config.catalog_path());
    let catalog = load_catalog(path.as_deref(), config.color_policy())?;

    let category = cli
        .category
        .as_deref()
        .map(CategoryFilter::from)
        .unwrap_or_default();
    let gallery = GalleryState::with_filters(cli.query.as_str(), category);
    let visible = gallery.visible(&catalog);

    if cli.json {
        println!("{}", listing::render_json(&visible)?);
    } else {
        print!("{}", listing::render_table(&visible, &gallery.summary(visible.len())));
    }
    Ok(())
}
