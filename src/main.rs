use anyhow::Result;
use boundq::config::{Config, ReportFormat};
use boundq::{report, scenarios};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use std::io;

#[derive(Parser, Debug)]
#[command(name = "boundq", about = "Self-check for the fixed-capacity bounded queue", version)]
struct Cli {
    /// Queue capacity; falls back to the configured default if missing or not a positive integer
    size: Option<String>,

    /// Print the results as JSON
    #[arg(long)]
    json: bool,

    /// Print config file path and current values, then exit
    #[arg(long)]
    config: bool,

    /// Print shell completions for the given shell and exit
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "boundq", &mut io::stdout());
        return Ok(());
    }

    let cfg = Config::load();
    if cli.config {
        return run_print_config(&cfg);
    }

    let capacity = resolve_capacity(cli.size.as_deref(), cfg.default_capacity());
    let outcomes = scenarios::run_all(capacity)?;

    let json = cli.json || cfg.report.format == ReportFormat::Json;
    if json {
        println!("{}", report::render_json(capacity, &outcomes)?);
    } else {
        print!("{}", report::render_text(capacity, &outcomes));
    }

    if outcomes.iter().all(|o| o.passed()) {
        Ok(())
    } else {
        std::process::exit(1);
    }
}

/// Parse the size argument, falling back to `default` when it is absent,
/// unparseable, or zero.
fn resolve_capacity(arg: Option<&str>, default: usize) -> usize {
    match arg.map(|s| s.trim().parse::<usize>()) {
        Some(Ok(n)) if n > 0 => {
            log::info!("using a capacity of {}", n);
            n
        }
        Some(_) => {
            log::warn!("unable to parse queue size argument, using default of {}", default);
            default
        }
        None => default,
    }
}

fn run_print_config(cfg: &Config) -> Result<()> {
    let path = Config::config_path()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| "(unknown)".to_string());
    println!("Config: {}", path);
    println!();
    println!("[queue]");
    println!("  default_capacity = {}", cfg.default_capacity());
    println!();
    println!("[report]");
    let format = match cfg.report.format {
        ReportFormat::Text => "text",
        ReportFormat::Json => "json",
    };
    println!("  format = {}", format);
    Ok(())
}
