//! CLI definitions: argument parsing, subcommands, and help text.

use clap::{ArgAction, Args as ClapArgs, Parser, Subcommand};
use clap_complete::Shell;

pub use clap_complete::generate;

use crate::core::render::OutputFormat;
use crate::core::settings::{FontSize, FontWeight, IconColor, RenderOverrides};

const AFTER_HELP: &str = "\
EXAMPLES:
  wathiqa                                  Launch interactive TUI
  wathiqa -p \"كيف أحصل على جواز السفر؟\"     Single question, print the annotated answer
  wathiqa -p -                             Read the question from stdin
  wathiqa annotate \"رخصة السياقة.\"          Annotate text offline
  wathiqa annotate - --format html         Annotate stdin as an HTML fragment
  wathiqa config set --icon-color #C1272D  Change the icon color
  wathiqa completions bash                 Generate bash completions
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Arabic assistant for Moroccan government documents",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Send a single prompt then exit (without opening the TUI)
    #[arg(
        short = 'p',
        long,
        help = "Ask a single question and print the answer (use '-' to read from stdin)"
    )]
    pub prompt: Option<String>,

    /// Output format for prompt mode and `annotate`
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    #[command(flatten)]
    pub render: RenderArgs,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

/// Display overrides; with `config set` they are saved instead.
#[derive(ClapArgs, Debug, Default)]
pub struct RenderArgs {
    /// Icon color as #RRGGBB
    #[arg(long, global = true, value_name = "HEX")]
    pub icon_color: Option<IconColor>,

    /// Font size token
    #[arg(long, value_enum, global = true)]
    pub font_size: Option<FontSize>,

    /// Font weight token
    #[arg(long, value_enum, global = true)]
    pub font_weight: Option<FontWeight>,
}

impl RenderArgs {
    pub fn overrides(&self) -> RenderOverrides {
        RenderOverrides {
            font_size: self.font_size,
            font_weight: self.font_weight,
            icon_color: self.icon_color,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Annotate text without calling the assistant
    Annotate {
        /// Text to annotate ('-' or omitted: read stdin)
        text: Option<String>,
    },
    /// List example questions
    Prompts,
    /// Show config paths, endpoint, API key status, and display settings
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Save display settings (--icon-color, --font-size, --font-weight) and/or the API key
    Set {
        /// Store the Azure OpenAI API key in the config directory
        #[arg(long, value_name = "KEY")]
        api_key: Option<String>,
    },
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }
}
