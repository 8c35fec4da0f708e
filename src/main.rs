//! Binary entrypoint for the soulblazer-locations CLI.
//!
//! Commands:
//! - `list [--kind <kind>] [--flag <flag>]` - print locations with their addresses
//! - `lookup <name>` - print one location's descriptor and address as JSON
//! - `address <kind> <id>` - compute the address for a kind and internal id
//! - `reverse <address>` - find the location that owns an address
//! - `verify` - build the catalog and report integrity problems
//! - `export [--output <path>] [--pretty]` - write the data package JSON
//! - `init` - create a starter `config.toml`
//!
//! See the library crate docs for module-level details: `soulblazer_locations::`.
use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use log::{error, info};

use soulblazer_locations::catalog::{
    address_for, build_catalog, AccessFlag, Address, Catalog, InternalId, LocationKind,
};
use soulblazer_locations::config::Config;
use soulblazer_locations::datapackage::DataPackage;

#[derive(Parser)]
#[command(name = "soulblazer-locations")]
#[command(about = "Inspect and export the Soul Blazer location catalog")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// List locations, optionally filtered
    List {
        /// Only this kind: chest, npc-reward or lair
        #[arg(short, long)]
        kind: Option<String>,
        /// Only locations gated by this access flag (e.g. can_cut_metal)
        #[arg(short, long)]
        flag: Option<String>,
    },
    /// Show a location by name
    Lookup { name: String },
    /// Compute the address of a kind/internal id pair
    Address {
        kind: String,
        /// Internal id, decimal or 0x-prefixed hex
        id: String,
    },
    /// Find the location at an address
    Reverse {
        /// Address, decimal or 0x-prefixed hex
        address: String,
    },
    /// Build the catalog and check its integrity
    Verify,
    /// Write the data package JSON
    Export {
        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<String>,
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Write a default configuration file
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match cli.command {
        Commands::Init => None,
        _ => Some(Config::load_or_default(&cli.config).await?),
    };
    init_logging(&config, cli.verbose);
    let config = config.unwrap_or_default();

    match cli.command {
        Commands::List { kind, flag } => {
            let kind = kind.as_deref().map(parse_kind).transpose()?;
            let flag = flag.as_deref().map(parse_flag).transpose()?;
            let catalog = Catalog::global();
            for (name, d) in catalog.iter() {
                if kind.is_some_and(|k| k != d.kind) || flag.is_some_and(|f| f != d.access_flag) {
                    continue;
                }
                println!(
                    "{:#010x}  {:<10}  {:#05x}  {:<14}  {}",
                    d.address(),
                    d.kind.label(),
                    d.internal_id,
                    d.access_flag,
                    name
                );
            }
        }
        Commands::Lookup { name } => {
            let catalog = Catalog::global();
            let d = catalog.lookup(&name)?;
            let payload = serde_json::json!({
                "name": name,
                "address": d.address(),
                "descriptor": d,
                "boss_lair": catalog.is_boss_lair(&name),
                "village_leader": catalog.is_village_leader(&name),
            });
            println!("{}", payload);
        }
        Commands::Address { kind, id } => {
            let kind = parse_kind(&kind)?;
            let id: InternalId = parse_number(&id)?
                .try_into()
                .map_err(|_| anyhow!("internal id {} does not fit in 16 bits", id))?;
            println!("{}", address_for(kind, id));
        }
        Commands::Reverse { address } => {
            let address: Address = parse_number(&address)?;
            let (name, d) = Catalog::global().lookup_address(address)?;
            println!("{} ({} {:#04x})", name, d.kind, d.internal_id);
        }
        Commands::Verify => match build_catalog() {
            Ok(catalog) => {
                for kind in LocationKind::ALL {
                    info!("{}: {}", kind.group_name(), catalog.table(kind).len());
                }
                println!("ok: {} locations", catalog.len());
            }
            Err(e) => {
                error!("location catalog failed integrity checks: {}", e);
                std::process::exit(1);
            }
        },
        Commands::Export { output, pretty } => {
            let package = DataPackage::for_catalog(&config.export.game_name, Catalog::global())?;
            let json = package.to_json(pretty || config.export.pretty)?;
            match output.or(config.export.output) {
                Some(path) => {
                    tokio::fs::write(&path, json)
                        .await
                        .with_context(|| format!("Failed to write data package {}", path))?;
                    info!("Data package written to {}", path);
                }
                None => println!("{}", json),
            }
        }
        Commands::Init => {
            Config::create_default(&cli.config).await?;
            info!("Configuration file created at {}", cli.config);
        }
    }

    Ok(())
}

fn parse_kind(s: &str) -> Result<LocationKind> {
    LocationKind::parse(s).ok_or_else(|| anyhow!("unknown location kind '{}'", s))
}

fn parse_flag(s: &str) -> Result<AccessFlag> {
    AccessFlag::parse(s).ok_or_else(|| anyhow!("unknown access flag '{}'", s))
}

fn parse_number(s: &str) -> Result<u64> {
    let s = s.trim();
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.with_context(|| format!("'{}' is not a number", s))
}

fn init_logging(config: &Option<Config>, verbosity: u8) {
    use std::io::Write;
    let mut builder = env_logger::Builder::new();
    // CLI verbosity overrides the configured level
    let base_level = match verbosity {
        0 => config
            .as_ref()
            .map(|cfg| cfg.logging.level_filter())
            .unwrap_or(log::LevelFilter::Info),
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(base_level);

    let log_file = config
        .as_ref()
        .and_then(|cfg| cfg.logging.file.as_ref())
        .and_then(|file| {
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(file)
                .ok()
        });

    if let Some(f) = log_file {
        let write_mutex = std::sync::Arc::new(std::sync::Mutex::new(f));
        // Mirror to the console only when attached to a terminal
        let is_tty = atty::is(atty::Stream::Stderr);

        builder.format(move |fmt, record| {
            let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            let line = format!("{} [{}] {}", ts, record.level(), record.args());

            if let Ok(mut guard) = write_mutex.lock() {
                let _ = writeln!(guard, "{}", line);
            }

            if is_tty {
                writeln!(fmt, "{}", line)
            } else {
                Ok(())
            }
        });
    } else {
        builder.format(|fmt, record| {
            let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            writeln!(fmt, "{} [{}] {}", ts, record.level(), record.args())
        });
    }
    let _ = builder.try_init();
}
