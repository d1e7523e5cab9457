use clap::{Parser, Subcommand};
use danlann::config::{self, ConfigOverrides};
use danlann::{load, manifest, output};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "danlann")]
#[command(about = "Photo gallery generator: album description front-end")]
#[command(long_about = "\
Photo gallery generator: album description front-end

Albums and photos are described in plain text album files listed in
danlann.toml. Each line is one statement:

  /travel; Travel; Trips abroad      # album definition
  /travel/japan                      # subalbum (may be defined later)
  tokyo; Tokyo; Shibuya crossing     # photo of the album above
  # comment

An album may be referenced before it is defined, even from an earlier
file. After the last file the gallery is checked: every referenced album
must be defined, every album must have subalbums or photos, and there
must be at least one root album.

Run 'danlann gen-config' to generate a documented danlann.toml.")]
#[command(version)]
struct Cli {
    /// Gallery config file
    #[arg(long, default_value = "danlann.toml", global = true)]
    config: PathBuf,

    /// Override the gallery title from the config file
    #[arg(long, global = true)]
    title: Option<String>,

    /// Override the gallery description from the config file
    #[arg(long, global = true)]
    description: Option<String>,

    /// Log filter: a level (off, error, warn, info, debug, trace) or
    /// env_logger directives such as `info,danlann=debug`
    #[arg(long = "log-level", env = "RUST_LOG", global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse and check album files, print the album tree
    Check,
    /// Write the checked gallery as a JSON manifest
    Manifest {
        /// Output file (stdout when omitted)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print a stock danlann.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref().unwrap_or("warn"));

    let overrides = ConfigOverrides {
        title: cli.title,
        description: cli.description,
    };

    match cli.command {
        Command::Check => {
            println!("==> Checking {}", cli.config.display());
            let gallery = load::load_gallery(&cli.config, &overrides)?;
            output::print_gallery_output(&gallery);
            println!("==> Gallery is valid");
        }
        Command::Manifest { output } => {
            let gallery = load::load_gallery(&cli.config, &overrides)?;
            let manifest = manifest::Manifest::from_gallery(&gallery);
            let json = serde_json::to_string_pretty(&manifest)?;
            match output {
                Some(path) => {
                    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, json)?;
                    println!("==> Manifest written to {}", path.display());
                }
                None => println!("{}", json),
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Log to stderr so manifest output on stdout stays clean.
fn init_logging(filters: &str) {
    log_builder(filters).init();
}

fn log_builder(filters: &str) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder.parse_filters(filters).format_timestamp(None);
    builder
}
