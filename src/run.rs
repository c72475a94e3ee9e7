//! Application run modes: logger init, single prompt, offline annotation, config, TUI launch.

use std::io::{self, IsTerminal, Read};

use crate::cli::Args;
use crate::core;
use crate::core::annotate::AnnotatedMessage;
use crate::core::config::{Config, KeySource};
use crate::core::render::{self, OutputFormat};
use crate::core::settings::RenderConfig;

/// Initialize env_logger. In TUI mode, writes to file to avoid corrupting the display.
pub fn init_logger(args: &Args) {
    let log_level = args.log_level();
    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level));

    if args.prompt.is_none() && args.command.is_none() {
        let log_path = core::paths::cache_dir().and_then(|dir| {
            std::fs::create_dir_all(&dir).ok()?;
            Some(dir.join(core::app::LOG_FILE))
        });
        if let Some(path) = log_path
            && let Ok(file) = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
        {
            logger.target(env_logger::Target::Pipe(Box::new(file)));
        }
    }
    let _ = logger.try_init();
}

/// Resolve a text argument: `-` or absent reads stdin.
fn read_text_arg(arg: Option<&str>) -> io::Result<String> {
    match arg {
        Some(text) if text != "-" => Ok(text.to_string()),
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn print_annotated(
    text: &str,
    format: OutputFormat,
    render_config: &RenderConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let message = AnnotatedMessage::new(text, render_config);
    let styled = format == OutputFormat::Text && io::stdout().is_terminal();
    let out = render::render(&message, format, styled)?;
    println!("{}", out);
    Ok(())
}

/// Run single prompt mode: ask the assistant, print the annotated reply to stdout.
pub async fn run_single_prompt(
    args: &Args,
    config: &Config,
    render_config: &RenderConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let prompt = read_text_arg(args.prompt.as_deref())?;
    let prompt = prompt.trim();
    if prompt.is_empty() {
        eprintln!("Error: empty prompt");
        std::process::exit(1);
    }

    let result = core::llm::chat(core::llm::ChatRequest {
        config,
        prompt,
        history: &[],
        cancel_token: None,
    })
    .await;
    let reply = match result {
        Ok(reply) => reply,
        Err(e) => {
            log::error!("Chat request failed: {:?}", e);
            eprintln!("Chat error: {}", e);
            std::process::exit(1);
        }
    };

    print_annotated(&reply, args.format, render_config)
}

/// Annotate text locally (no network) and print it.
pub fn run_annotate(
    args: &Args,
    text: Option<&str>,
    render_config: &RenderConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_text_arg(text)?;
    // Drop the trailing newline from piped input
    let text = text.strip_suffix('\n').unwrap_or(&text);
    print_annotated(text, args.format, render_config)
}

/// Print the built-in example questions, one per line.
pub fn print_prompts() {
    for (i, prompt) in core::prompts::EXAMPLE_PROMPTS.iter().enumerate() {
        println!("{}. {}", i + 1, prompt);
    }
}

/// Show config paths, endpoint, key status, and display settings.
pub fn show_config(render_config: &RenderConfig) {
    let display_path = |p: Option<std::path::PathBuf>| {
        p.map(|p| p.display().to_string())
            .unwrap_or_else(|| "(unavailable)".to_string())
    };
    println!("{} {}", core::app::NAME, core::app::VERSION);
    println!("Settings file: {}", display_path(core::settings::settings_path()));
    println!("API key file:  {}", display_path(core::api_key::credentials_path()));
    println!(
        "Log file:      {}",
        display_path(
            core::paths::cache_dir().map(|d| d.join(core::app::LOG_FILE))
        )
    );
    let endpoint = std::env::var("AZURE_OPENAI_ENDPOINT")
        .unwrap_or_else(|_| core::config::DEFAULT_ENDPOINT.to_string());
    let deployment = std::env::var("AZURE_OPENAI_DEPLOYMENT")
        .unwrap_or_else(|_| core::config::DEFAULT_DEPLOYMENT.to_string());
    println!("Endpoint:      {}", endpoint);
    println!("Deployment:    {}", deployment);
    let key_status = match core::config::key_source() {
        KeySource::Environment => "set (AZURE_OPENAI_API_KEY)",
        KeySource::StoredFile => "set (stored key file)",
        KeySource::Missing => "missing",
    };
    println!("API key:       {}", key_status);
    println!("Font size:     {}", render_config.font_size.class());
    println!("Font weight:   {}", render_config.font_weight.class());
    println!("Icon color:    {}", render_config.icon_color);
}

/// `config set`: persist display overrides and/or the API key.
pub fn config_set(
    args: &Args,
    api_key: Option<&str>,
    stored: RenderConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let overrides = args.render.overrides();
    if overrides.is_empty() && api_key.is_none() {
        eprintln!(
            "Error: nothing to set (use --icon-color, --font-size, --font-weight, or --api-key)"
        );
        std::process::exit(1);
    }
    if !overrides.is_empty() {
        let path = core::settings::save(&stored.with_overrides(&overrides))?;
        println!("Saved settings to {}", path.display());
    }
    if let Some(key) = api_key {
        let path = core::api_key::store_api_key(key)?;
        println!("Stored API key in {}", path.display());
    }
    Ok(())
}

/// Launch the TUI in a blocking thread. Returns on panic or IO error.
pub async fn launch_tui(
    config: Config,
    render_config: RenderConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = std::sync::Arc::new(config);
    let join_result: Result<io::Result<()>, tokio::task::JoinError> =
        tokio::task::spawn_blocking(move || crate::tui::run(config, render_config)).await;

    match join_result {
        Ok(io_result) => io_result?,
        Err(join_err) => {
            if let Ok(panic) = join_err.try_into_panic() {
                let msg = if let Some(s) = panic.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic.downcast_ref::<String>() {
                    s.clone()
                } else {
                    format!("{:?}", panic)
                };
                eprintln!("TUI panic: {}", msg);
            }
            return Err(
                Box::new(io::Error::other("TUI thread panicked")) as Box<dyn std::error::Error>
            );
        }
    }
    Ok(())
}
