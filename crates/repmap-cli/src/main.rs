//! repmap CLI - serve and maintain the state/representative signup widget.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use repmap_ops::{Config, StoreKind};
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

mod commands;

use commands::{check, config as config_cmd, serve, svg, widget};

/// repmap - congressional district signup widget.
///
/// Serves the widget's data, maps and signup endpoint, and provides the
/// tools to check the data and preprocess district maps.
#[derive(Parser, Debug)]
#[command(
    name = "repmap",
    author,
    version,
    about = "repmap: state and representative signup widget",
    long_about = None
)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP service.
    Serve {
        /// Port to listen on.
        #[arg(short, long)]
        port: Option<u16>,

        /// Directory with stateOptions.json and districtToRep.json.
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Directory with one {state}.svg per state.
        #[arg(long)]
        states_dir: Option<PathBuf>,

        /// Static page assets served at `/`.
        #[arg(long)]
        public_dir: Option<PathBuf>,

        /// Signup backend: memory, jsonl or supabase.
        #[arg(long)]
        store: Option<StoreKind>,
    },

    /// Validate the catalog and the map directory.
    Check {
        /// Fail on orphaned districts or missing maps.
        #[arg(long)]
        strict: bool,
    },

    /// Preprocess district map files.
    #[command(subcommand)]
    Svg(SvgCommands),

    /// Load the widget against a running server and print what it shows.
    Preview {
        /// Page query, e.g. "?state=ohio&rep=Jane Doe".
        #[arg(default_value = "")]
        query: String,

        /// Server root.
        #[arg(long, default_value = "http://localhost:3000")]
        url: String,

        /// Print the full widget state as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Submit a signup through the widget's form flow.
    Signup {
        #[arg(long)]
        email: String,

        /// State code or name.
        #[arg(long)]
        state: String,

        /// Representative name.
        #[arg(long)]
        rep: String,

        /// Server root.
        #[arg(long, default_value = "http://localhost:3000")]
        url: String,
    },

    /// Manage configuration.
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// Map preprocessing passes. Each takes a file or a directory of `.svg` files
/// and rewrites them in place.
#[derive(Subcommand, Debug)]
pub enum SvgCommands {
    /// Add data-state="<State Name>" to district shapes.
    Tag {
        path: PathBuf,
        /// Report without writing.
        #[arg(long)]
        dry_run: bool,
    },

    /// Drop paths that belong to other states (state taken from the file name).
    Trim {
        path: PathBuf,
        #[arg(long)]
        dry_run: bool,
    },

    /// Normalise the outline stroke of every stroked element.
    Stroke {
        path: PathBuf,
        #[arg(long, default_value = repmap_svg::DEFAULT_STROKE)]
        stroke: String,
        #[arg(long, default_value = repmap_svg::DEFAULT_STROKE_WIDTH)]
        width: String,
        #[arg(long)]
        dry_run: bool,
    },

    /// Remove the map credit text.
    StripCredit {
        path: PathBuf,
        #[arg(long)]
        dry_run: bool,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Show current configuration.
    Show,

    /// Set a configuration value.
    Set {
        /// Configuration key.
        key: String,
        /// Configuration value.
        value: String,
    },

    /// Get a configuration value.
    Get {
        /// Configuration key.
        key: String,
    },

    /// Reset configuration to defaults.
    Reset,

    /// Show path to config file.
    Path,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing based on verbosity
    let level = if cli.quiet {
        Level::ERROR
    } else if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .init();

    let mut config = Config::load()?;

    match cli.command {
        Commands::Serve {
            port,
            data_dir,
            states_dir,
            public_dir,
            store,
        } => {
            // Flags win over file and environment
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(dir) = data_dir {
                config.data_dir = dir;
            }
            if let Some(dir) = states_dir {
                config.states_dir = dir;
            }
            if public_dir.is_some() {
                config.public_dir = public_dir;
            }
            if let Some(store) = store {
                config.store = store;
            }
            serve::execute(&config).await?;
        }

        Commands::Check { strict } => {
            check::execute(&config, strict)?;
        }

        Commands::Svg(svg_cmd) => {
            svg::execute(svg_cmd)?;
        }

        Commands::Preview { query, url, json } => {
            widget::preview(&url, &query, json).await?;
        }

        Commands::Signup {
            email,
            state,
            rep,
            url,
        } => {
            widget::signup(&url, &email, &state, &rep).await?;
        }

        Commands::Config(config_cmd_inner) => match config_cmd_inner {
            ConfigCommands::Show => {
                config_cmd::show(&config);
            }
            ConfigCommands::Set { key, value } => {
                config_cmd::set(&mut config, &key, &value)?;
            }
            ConfigCommands::Get { key } => {
                config_cmd::get(&config, &key)?;
            }
            ConfigCommands::Reset => {
                config_cmd::reset()?;
            }
            ConfigCommands::Path => {
                if let Some(path) = Config::config_file_path() {
                    println!("{}", path.display());
                } else {
                    println!("(no config file path available)");
                }
            }
        },
    }

    Ok(())
}
