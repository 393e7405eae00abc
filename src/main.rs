// SPDX-License-Identifier: MPL-2.0
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use magazine_lens::catalog::PageCatalog;
use magazine_lens::config;
use magazine_lens::error::{Error, Result};
use magazine_lens::script;
use magazine_lens::viewer::{ViewerSession, ViewerSnapshot};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
magazine-lens: replay gesture events against a magazine viewer session

USAGE:
  magazine-lens [OPTIONS] [SCRIPT]

ARGS:
  SCRIPT               Event script file (reads stdin when omitted)

OPTIONS:
  --config-dir DIR     Directory holding settings.toml
                       (default: $MAGAZINE_LENS_CONFIG_DIR, then the platform config dir)
  --catalog FILE       TOML file with [[pages]] entries (overrides settings)
  -h, --help           Print this help

The scale/offset readout is printed only while the info panel is shown
(toggle it with the `info` event).
";

struct Args {
    config_dir: Option<PathBuf>,
    catalog: Option<PathBuf>,
    script: Option<PathBuf>,
}

fn parse_args() -> std::result::Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let parsed = Args {
        config_dir: args.opt_value_from_str("--config-dir")?,
        catalog: args.opt_value_from_str("--catalog")?,
        script: args.opt_free_from_str()?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        return Err(pico_args::Error::ArgumentParsingFailed {
            cause: format!("unexpected arguments: {remaining:?}"),
        });
    }
    Ok(Some(parsed))
}

fn init_tracing(config: &config::Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_script(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn describe(snapshot: &ViewerSnapshot) -> String {
    let mut line = format!(
        "page {} ({}/{}) drawer {}",
        snapshot.page_id,
        snapshot.page_index + 1,
        snapshot.page_count,
        if snapshot.drawer.is_open { "open" } else { "closed" },
    );
    if let Some(readout) = snapshot.visible_readout() {
        line.push_str(&format!("  {readout}"));
    }
    line
}

fn run(args: Args) -> Result<()> {
    let (config, warning) = config::load(args.config_dir);
    init_tracing(&config);
    if let Some(key) = warning {
        tracing::warn!(warning = %key, "settings could not be loaded, using defaults");
    }

    let catalog = match &args.catalog {
        Some(path) => PageCatalog::load_from_path(path)?,
        None => config.catalog()?,
    };
    tracing::info!(pages = catalog.len(), "catalog loaded");

    let steps = script::parse_script(&read_script(args.script.as_ref())?)?;
    let mut session = ViewerSession::with_history_capacity(catalog, config.history_capacity());

    println!("   - {:<16} {}", "open", describe(&session.snapshot()));
    for step in steps {
        match session.handle(step.event) {
            Ok(_) => println!(
                "{:>4} {:<16} {}",
                step.line,
                step.event.to_string(),
                describe(&session.snapshot())
            ),
            Err(err @ Error::InvalidPage { .. }) => println!(
                "{:>4} {:<16} rejected: {err}",
                step.line,
                step.event.to_string()
            ),
            Err(err) => return Err(err),
        }
    }

    let history = session.history();
    println!(
        "{} events, {} normalized, {} rejected",
        history.total_recorded(),
        history.normalization_count(),
        history.rejected_count()
    );
    Ok(())
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
