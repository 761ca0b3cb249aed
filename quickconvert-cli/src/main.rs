//! QuickConvert command line
//!
//! Commands:
//! - list: Show registered converters
//! - units: Show the units and parameters of one converter
//! - convert: Convert a single value
//! - serve: Answer JSON-lines requests on stdin/stdout

mod serve;

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use quickconvert::{parse_number, Config, ParamValue, Params, QuickConvert};
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "quickconvert")]
#[command(version, about = "Convert values between units", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Significant figures in displayed results
    #[arg(short, long, global = true)]
    precision: Option<usize>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered converters
    List {
        /// Print converter descriptions as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the units and parameters of a converter
    Units {
        converter: String,
    },

    /// Convert a value
    Convert {
        converter: String,

        #[arg(allow_negative_numbers = true)]
        value: String,

        from: String,

        to: String,

        /// Converter parameter, repeatable
        #[arg(long = "param", value_name = "KEY=VALUE", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },

    /// Answer JSON-lines requests on stdin
    Serve,
}

fn parse_param(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim().to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{}'", arg)),
    }
}

fn init_tracing(cli: &Cli, config: &Config) {
    let filter_layer = if cli.debug {
        EnvFilter::new("debug")
    } else if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&config.log_level))
            .unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(precision) = cli.precision {
        config = config.with_precision(precision);
    }

    init_tracing(&cli, &config);
    info!("QuickConvert v{}", env!("CARGO_PKG_VERSION"));

    let engine = QuickConvert::with_standard_library(config)
        .map_err(|e| anyhow!("{}", e.report()))
        .context("Failed to build converter registry")?;

    match cli.command {
        Commands::List { json } => cmd_list(&engine, json),
        Commands::Units { converter } => cmd_units(&engine, &converter),
        Commands::Convert { converter, value, from, to, params } => {
            cmd_convert(&engine, &converter, &value, &from, &to, params)
        }
        Commands::Serve => {
            let stdin = io::stdin();
            serve::serve(&engine, stdin.lock(), io::stdout().lock())?;
            Ok(())
        }
    }
}

fn cmd_list(engine: &QuickConvert, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&engine.describe())?);
        return Ok(());
    }

    for converter in engine.registry().list() {
        let meta = converter.meta();
        println!("{:<12} {:<12} {}", meta.name, meta.category, meta.description);
    }
    Ok(())
}

fn cmd_units(engine: &QuickConvert, name: &str) -> anyhow::Result<()> {
    let converter = engine.registry().get(name).map_err(|e| anyhow!("{}", e.report()))?;

    println!("Units: {}", converter.units().join(", "));
    for param in converter.parameters() {
        match param.default {
            Some(default) => println!("  --param {}=<{}>  (default {})", param.key, param.label, default.to_value()),
            None => println!("  --param {}=<{}>", param.key, param.label),
        }
    }
    Ok(())
}

fn cmd_convert(
    engine: &QuickConvert,
    converter: &str,
    value: &str,
    from: &str,
    to: &str,
    params: Vec<(String, String)>,
) -> anyhow::Result<()> {
    let value = parse_number(value).with_context(|| format!("Invalid value '{}'", value))?;
    let params: Params = params.into_iter().map(|(k, v)| (k, ParamValue::Text(v))).collect();

    let result = engine
        .convert(converter, value, from, to, &params)
        .map_err(|e| anyhow!("{}", e.report()))?;
    println!("{} {}", engine.format(result), to);
    Ok(())
}
