use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use rdfa_metadata::loading::{DriverOptions, IdentityMapper, StandardFactory, XmlDriver};

/// Inspect RDFa type-metadata definitions.
#[derive(Parser)]
#[command(name = "rdfa-metadata", version, about)]
struct Cli {
    /// Definition directory; repeat to build a search path (first match wins).
    #[arg(short, long = "dir", value_name = "DIR", required = true)]
    dirs: Vec<PathBuf>,

    /// Definition file extension.
    #[arg(long, value_name = "EXT", default_value = "xml")]
    extension: String,

    /// Namespace separator used in type names.
    #[arg(long, value_name = "SEP", default_value = "::")]
    separator: String,

    /// Verbose output (-vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet output.
    #[arg(short, long)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load one type and print its descriptor as JSON.
    Show {
        /// Type name, e.g. `blog::Article`.
        name: String,

        /// Pretty-print the JSON.
        #[arg(long)]
        pretty: bool,
    },
    /// List every declared RDF type with the type name defining it.
    List,
}

fn init_tracing(cli: &Cli) {
    let default_level = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let options = DriverOptions::new(cli.dirs)
        .with_extension(&cli.extension)
        .with_namespace_separator(&cli.separator);
    let driver = XmlDriver::new(options);

    let mut out = BufWriter::new(io::stdout().lock());
    match cli.command {
        Command::Show { name, pretty } => {
            let descriptor = driver.load_type(&name, &IdentityMapper, &StandardFactory)?;
            if pretty {
                serde_json::to_writer_pretty(&mut out, &descriptor)?;
            } else {
                serde_json::to_writer(&mut out, &descriptor)?;
            }
            writeln!(out)?;
        }
        Command::List => {
            for (uri, type_name) in driver.all_names()? {
                writeln!(out, "{uri}\t{type_name}")?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);
    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
