//! ABI Binding Generator
//!
//! Generates typed client bindings from contract ABI JSON.

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use abi_define::Description;
use abi_gen::errors::GeneratorError;
use abi_gen::output::generate_and_write;
use abi_gen::registry::FormatRegistry;
use abi_gen::validation::{binding_collisions, validate_contract_name};
use clap::Parser;
use colored::Colorize;
use tracing::info;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// ABI binding generator - transforms contract ABIs into typed client classes
#[derive(Parser, Debug)]
#[command(name = "abi-gen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Contract name (becomes the class name and the file name)
    #[arg(short, long, required_unless_present = "list_formats")]
    name: Option<String>,

    /// Contract address, emitted verbatim into the generated class
    #[arg(short, long, required_unless_present = "list_formats")]
    address: Option<String>,

    /// ABI JSON file (reads stdin if not provided, use "-" for explicit stdin)
    #[arg(long, value_name = "PATH")]
    abi: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "ts")]
    format: String,

    /// Output directory for the generated file
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// Print generated code without writing files
    #[arg(long)]
    dry_run: bool,

    /// List available output formats
    #[arg(long)]
    list_formats: bool,

    /// Increase verbosity (-v INFO, -vv DEBUG, -vvv TRACE, -vvvv TRACE with file/line)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Initialize tracing subscriber based on verbosity level.
///
/// Verbosity levels:
/// - 0 (default): WARN only (dropped ABI entries, duplicate constructors)
/// - 1 (-v): INFO (files written)
/// - 2 (-vv): DEBUG (pipeline phases)
/// - 3 (-vvv): TRACE (per-entry naming)
/// - 4+ (-vvvv): TRACE with file/line numbers
fn init_tracing(verbose: u8) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,abi_gen=info,abi_define=info".to_string(),
            2 => "info,abi_gen=debug,abi_define=debug".to_string(),
            _ => "debug,abi_gen=trace,abi_define=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_thread_ids(false)
                .with_file(verbose >= 4)
                .with_line_number(verbose >= 4)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

/// Reads the ABI text from a file, or from stdin for `None` and `-`.
fn read_abi(path: Option<&Path>) -> Result<String, GeneratorError> {
    match path {
        Some(path) if path != Path::new("-") => {
            std::fs::read_to_string(path).map_err(|source| GeneratorError::ReadError {
                path: path.display().to_string(),
                source,
            })
        }
        _ => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|source| GeneratorError::ReadError {
                    path: "<stdin>".to_string(),
                    source,
                })?;
            Ok(buffer)
        }
    }
}

fn main() -> Result<(), GeneratorError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let registry = FormatRegistry::new();

    if cli.list_formats {
        for spec in registry.formats() {
            println!("{}\t{}", spec.id, spec.content_type);
        }
        return Ok(());
    }

    // Fail on an unknown format before waiting on stdin.
    registry.lookup(&cli.format)?;

    let (Some(name), Some(address)) = (cli.name, cli.address) else {
        return Err(GeneratorError::ConfigError(
            "--name and --address are required".to_string(),
        ));
    };
    validate_contract_name(&name)?;

    let abi = read_abi(cli.abi.as_deref())?;
    let description = Description::from_json_str(name, address, &abi)?;

    let collisions = binding_collisions(&description);

    info!(
        contract = %description.name,
        methods = description.methods.len(),
        events = description.events.len(),
        dropped = description.dropped.len(),
        collisions = collisions.len(),
        "parsed ABI"
    );

    let file = generate_and_write(
        &description,
        &registry,
        &cli.format,
        &cli.output,
        cli.dry_run,
    )?;

    if !cli.dry_run {
        eprintln!(
            "{} {}",
            "Generated".green().bold(),
            cli.output.join(&file.file_name).display()
        );
    }

    Ok(())
}
