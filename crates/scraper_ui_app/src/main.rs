mod platform;

use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;

use platform::commands::{self, CommandContext};
use platform::logging::LogDestination;

#[derive(Debug, Parser)]
#[command(
    name = "scraper_ui",
    version,
    about = "Terminal front end for the web scraper's result viewer and page widgets"
)]
struct Cli {
    /// RON file overriding timing and threshold settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding saved preferences and the log file
    #[arg(long, global = true, default_value = ".")]
    state_dir: PathBuf,

    /// Where log output goes
    #[arg(long, global = true, value_enum, default_value_t = LogTarget::Off)]
    log: LogTarget,

    /// Log at debug level instead of info
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogTarget {
    Off,
    Terminal,
    File,
    Both,
}

impl LogTarget {
    fn destination(self) -> Option<LogDestination> {
        match self {
            LogTarget::Off => None,
            LogTarget::Terminal => Some(LogDestination::Terminal),
            LogTarget::File => Some(LogDestination::File),
            LogTarget::Both => Some(LogDestination::Both),
        }
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show a result file with line numbers, optionally highlighting a search term
    View {
        file: PathBuf,
        #[arg(short, long)]
        search: Option<String>,
        /// Only print lines containing a match
        #[arg(long, requires = "search")]
        matches_only: bool,
    },
    /// Play the loading overlay shown while a scrape runs
    Progress {
        /// Finish the simulated scrape after this many ticks
        #[arg(long)]
        ticks: Option<u32>,
    },
    /// Show the saved theme, or flip it
    Theme {
        #[arg(long)]
        toggle: bool,
    },
    /// Validate a URL the way the scrape form does
    CheckUrl { url: String },
    /// Print the help text for a scraper mode (basic or enhanced)
    Tooltip { mode: String },
    /// Run a copy button's click-and-reset cycle
    Copy { text: String },
    /// Count statistics up from zero
    Stats {
        #[arg(required = true)]
        targets: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(destination) = cli.log.destination() {
        let level = if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };
        if let Err(err) = platform::persistence::ensure_state_dir(&cli.state_dir) {
            eprintln!("Warning: {err}");
        }
        platform::logging::initialize(destination, level, &cli.state_dir);
    }

    let ctx = CommandContext {
        config: platform::config::load(cli.config.as_deref())?,
        state_dir: cli.state_dir,
    };
    let mut out = io::stdout().lock();

    match cli.command {
        Command::View {
            file,
            search,
            matches_only,
        } => commands::view(&ctx, &file, search.as_deref(), matches_only, &mut out),
        Command::Progress { ticks } => commands::progress(&ctx, ticks, &mut out),
        Command::Theme { toggle } => commands::theme(&ctx, toggle, &mut out),
        Command::CheckUrl { url } => commands::check_url(&ctx, &url, &mut out),
        Command::Tooltip { mode } => commands::tooltip(&ctx, &mode, &mut out),
        Command::Copy { text } => commands::copy(&ctx, &text, &mut out),
        Command::Stats { targets } => commands::stats(&ctx, &targets, &mut out),
    }
}
