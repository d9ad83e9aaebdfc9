mod app;
mod cli;
mod error;
mod logging;
mod paths;
mod terminal;

use std::path::PathBuf;

use clap::Parser;
use combobox::{ComboOption, Combobox, ComboboxConfig, Theme};
use log::info;

use crate::cli::Cli;
use crate::error::DemoError;
use crate::terminal::TerminalGuard;

fn sample_combobox() -> Combobox {
    Combobox::new([
        ComboOption::new("next", "Next.js"),
        ComboOption::new("sveltekit", "SvelteKit"),
        ComboOption::new("nuxt", "Nuxt.js").disabled(),
        ComboOption::new("remix", "Remix"),
        ComboOption::new("astro", "Astro").icon("★"),
        ComboOption::new("axum", "Axum"),
        ComboOption::new("actix", "Actix Web"),
        ComboOption::new("rocket", "Rocket").icon("➚"),
        ComboOption::new("leptos", "Leptos"),
        ComboOption::new("dioxus", "Dioxus"),
    ])
    .placeholder("Select framework...")
    .search_placeholder("Search framework...")
    .empty_message("No framework found.")
    .class_name("framework")
}

/// Config from the command line, else the user config file, else the
/// built-in sample.
fn load_combobox(explicit: Option<PathBuf>) -> Result<Combobox, DemoError> {
    let path = explicit.or_else(|| paths::config_file().filter(|path| path.exists()));

    match path {
        Some(path) => {
            info!("Loading options from {}", path.display());
            Ok(ComboboxConfig::load(&path)?.into_combobox())
        }
        None => {
            info!("No config found, using sample options");
            Ok(sample_combobox())
        }
    }
}

async fn run(cli: Cli) -> Result<Option<String>, DemoError> {
    let combobox = load_combobox(cli.config)?;
    let mut term = TerminalGuard::new()?;
    app::run(combobox, Theme::default(), &mut term).await
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(paths::log_dir());

    match run(cli).await {
        Ok(Some(value)) => println!("{value}"),
        Ok(None) => {}
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
