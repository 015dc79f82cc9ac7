use clap::{Parser, Subcommand};
use folio::controller::App;
use folio::store::{DataStore, LOAD_ERROR_BANNER, LoadOutcome};
use folio::{config, output, render, script};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Single-page portfolio: load, check, build and replay")]
#[command(long_about = "\
Single-page portfolio: load, check, build and replay

Site structure:

  site/
  ├── config.toml          # Optional overrides (see 'folio gen-config')
  └── data/
      ├── about.json       # name, headline, short_bio, long_bio, skills
      ├── portfolio.json   # projects: id, title, category, tech, gallery, ...
      ├── certs.json       # certifications: id, name, issuer, type, ...
      └── socials.json     # platform → URI (email, linkedin, github, kaggle, medium)

Session scripts replay UI events against the loaded data:

  filter portfolio Web
  open portfolio atlas
  wait 4000
  slide 2
  close

Run 'folio gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Site directory (contains config.toml and the data directory)
    #[arg(long, default_value = ".", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load the data files and print a content inventory
    Check,
    /// Render index.html for the initial page state
    Build,
    /// Run a session script and print every visible change
    Replay {
        /// Script file, one command per line
        script: PathBuf,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Check => {
            let (_, outcome) = load_site(&cli.source)?;
            println!("==> Checking {}", cli.source.display());
            output::print_inventory(&outcome.store);
            let store = outcome.into_result()?;
            println!(
                "==> Content is valid ({} projects, {} certifications)",
                store.portfolio.len(),
                store.certs.len()
            );
        }
        Command::Build => {
            let (config, outcome) = load_site(&cli.source)?;
            let banner = outcome.error.as_ref().map(|_| LOAD_ERROR_BANNER);
            let app = App::new(outcome.store, config);
            let path = render::build(&app, banner, &cli.output)?;
            println!("==> Build complete: {}", path.display());
        }
        Command::Replay { script: script_path } => {
            let commands = script::parse_script(&std::fs::read_to_string(&script_path)?)?;
            let (config, outcome) = load_site(&cli.source)?;
            if outcome.error.is_some() {
                eprintln!("{LOAD_ERROR_BANNER}");
            }
            let mut app = App::new(outcome.store, config);
            println!("==> Replaying {} commands", commands.len());
            for command in commands {
                let updates = app.dispatch(command);
                output::print_updates(&updates, app.now());
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Load `config.toml` and the data directory it points at.
fn load_site(source: &Path) -> Result<(config::SiteConfig, LoadOutcome), config::ConfigError> {
    let config = config::load_config(source)?;
    let outcome = DataStore::load(&source.join(&config.data_dir));
    Ok((config, outcome))
}

/// Log to stderr. `RUST_LOG` wins; otherwise `warn`, or `debug` with `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
