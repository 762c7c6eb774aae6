mod feed;
mod preference;
mod render;
mod telemetry;
mod web;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::process::ExitCode;
use std::sync::Arc;

use crate::feed::Feeds;
use crate::preference::ThemeToggle;
use crate::render::{render_text, TerminalSink};
use crate::telemetry::{Clock, FixedClock, Link, SystemClock};
use crate::web::Config;

#[derive(Parser)]
#[command(name = "qsl-sim")]
#[command(about = "Quantum signal loss simulator for synthetic deep-space links")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the telemetry dashboard
    Serve {
        #[arg(short, long)]
        config: Option<String>,
    },
    /// Print both feeds to the terminal
    Watch {
        #[arg(short, long)]
        config: Option<String>,
    },
    /// Compute and print a single snapshot
    Snapshot {
        #[arg(value_enum)]
        link: LinkArg,
        /// Seed for the interference draw
        #[arg(long)]
        seed: Option<u64>,
        /// Instant to sample at (RFC 3339), defaults to now
        #[arg(long)]
        at: Option<DateTime<Utc>>,
        #[arg(long)]
        json: bool,
    },
    /// Show or flip the stored display theme
    Theme {
        #[arg(short, long)]
        config: Option<String>,
        #[arg(value_enum, default_value_t = ThemeAction::Show)]
        action: ThemeAction,
    },
    /// Validate a configuration file
    CheckConfig { config: String },
}

#[derive(Clone, Copy, ValueEnum)]
enum LinkArg {
    Mars,
    DeepSpace,
}

impl From<LinkArg> for Link {
    fn from(arg: LinkArg) -> Self {
        match arg {
            LinkArg::Mars => Link::Mars,
            LinkArg::DeepSpace => Link::DeepSpace,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ThemeAction {
    Show,
    Toggle,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => serve(config.as_deref()),
        Commands::Watch { config } => watch(config.as_deref()),
        Commands::Snapshot {
            link,
            seed,
            at,
            json,
        } => snapshot(link.into(), seed, at, json),
        Commands::Theme { config, action } => theme(config.as_deref(), action),
        Commands::CheckConfig { config } => check_config(&config),
    }
}

fn load_config(path: Option<&str>) -> Option<Config> {
    match Config::load(path) {
        Ok(config) => Some(config),
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            None
        }
    }
}

fn runtime() -> Option<tokio::runtime::Runtime> {
    match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => Some(rt),
        Err(e) => {
            eprintln!("Error starting runtime: {}", e);
            None
        }
    }
}

fn serve(path: Option<&str>) -> ExitCode {
    let Some(config) = load_config(path) else {
        return ExitCode::FAILURE;
    };
    let Some(rt) = runtime() else {
        return ExitCode::FAILURE;
    };

    match rt.block_on(web::run_server(config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Server error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn watch(path: Option<&str>) -> ExitCode {
    let Some(config) = load_config(path) else {
        return ExitCode::FAILURE;
    };
    let Some(rt) = runtime() else {
        return ExitCode::FAILURE;
    };

    rt.block_on(async {
        let sink = Arc::new(TerminalSink::stdout());
        let feeds = Feeds::start(&config.feeds, Arc::new(SystemClock), sink);
        web::server::shutdown_signal().await;
        feeds.shutdown().await;
    });
    ExitCode::SUCCESS
}

fn snapshot(link: Link, seed: Option<u64>, at: Option<DateTime<Utc>>, json: bool) -> ExitCode {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let clock: Box<dyn Clock> = match at {
        Some(at) => Box::new(FixedClock(at)),
        None => Box::new(SystemClock),
    };
    let snapshot = link.sample(clock.now(), &mut rng);

    if json {
        match serde_json::to_string_pretty(&snapshot) {
            Ok(body) => println!("{}", body),
            Err(e) => {
                eprintln!("Error encoding snapshot: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("{}", render_text(&snapshot));
    }
    ExitCode::SUCCESS
}

fn theme(path: Option<&str>, action: ThemeAction) -> ExitCode {
    let Some(config) = load_config(path) else {
        return ExitCode::FAILURE;
    };

    let mut toggle = match ThemeToggle::load(config.preferences.open_store()) {
        Ok(toggle) => toggle,
        Err(e) => {
            eprintln!("Error reading preferences: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if action == ThemeAction::Toggle {
        if let Err(e) = toggle.toggle() {
            eprintln!("Error writing preferences: {}", e);
            return ExitCode::FAILURE;
        }
    }

    println!("{} (control label: {})", toggle.theme(), toggle.label());
    ExitCode::SUCCESS
}

fn check_config(path: &str) -> ExitCode {
    let config = match Config::from_file(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("Config is valid");
    println!("  bind: {}", config.web.bind);
    println!("  static dir: {}", config.web.static_dir.display());
    println!(
        "  mars feed: every {}",
        humantime::format_duration(config.feeds.mars_interval)
    );
    println!(
        "  deep-space feed: every {}",
        humantime::format_duration(config.feeds.deep_space_interval)
    );
    match config.feeds.seed {
        Some(seed) => println!("  seed: {}", seed),
        None => println!("  seed: entropy"),
    }
    println!("  preferences: {}", config.preferences.path.display());
    ExitCode::SUCCESS
}
