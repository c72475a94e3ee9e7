//! # wathiqa - Arabic assistant for Moroccan government documents
//!
//! Entry point for the CLI and TUI. Replies are annotated before display: document
//! mentions become searchable references and `{{map-pin}}` placeholders become icons.
//!
//! ## Modes
//! - Interactive terminal UI (default)
//! - Single question with `-p` / `--prompt`
//! - Offline annotation with `annotate`
//! - Settings management with `config`

mod cli;
mod core;
mod run;
mod tui;

use clap::{CommandFactory, Parser};
use dotenv::dotenv;

use cli::{Args, Commands, ConfigAction};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv().ok();

    let args = Args::parse();
    run::init_logger(&args);

    let stored_settings = core::settings::load();
    let render_config = stored_settings.with_overrides(&args.render.overrides());

    match &args.command {
        Some(Commands::Annotate { text }) => {
            return run::run_annotate(&args, text.as_deref(), &render_config);
        }
        Some(Commands::Prompts) => {
            run::print_prompts();
            return Ok(());
        }
        Some(Commands::Config { action: None }) => {
            run::show_config(&render_config);
            return Ok(());
        }
        Some(Commands::Config {
            action: Some(ConfigAction::Set { api_key }),
        }) => {
            return run::config_set(&args, api_key.as_deref(), stored_settings);
        }
        Some(Commands::Completions { shell }) => {
            let mut cmd = Args::command();
            cli::generate(*shell, &mut cmd, core::app::NAME, &mut std::io::stdout());
            return Ok(());
        }
        None => {}
    }

    // Network modes need an API key (print user-friendly message; exit uses Display not Debug)
    let config = core::config::load().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    if args.prompt.is_some() {
        return run::run_single_prompt(&args, &config, &render_config).await;
    }

    run::launch_tui(config, render_config).await
}
