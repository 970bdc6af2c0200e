//! `mc-address` command-line interface.
//!
//! Thin wrapper over `mc_address`: argument parsing with clap, the chosen
//! `HexConfig` and decode budget passed straight through, results written
//! to the supplied output.

use std::io::Write;

use clap::{Args, Parser, Subcommand};
use mc_address::evm::Address;
use mc_address::{AddressError, HexConfig};
use mc_codec::{CodecReader, Decode, Encode, MAX_BYTES};
use tracing::debug;

/// Errors surfaced by CLI commands.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The address or payload could not be decoded.
    #[error(transparent)]
    Address(#[from] AddressError),
    /// Writing output failed.
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}

/// Top-level arguments.
#[derive(Parser, Debug)]
#[command(name = "mc-address")]
#[command(about = "Inspect and convert 20-byte account addresses", long_about = None)]
pub struct Cli {
    /// Hex parsing policy.
    #[command(flatten)]
    pub hex: HexArgs,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Command to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Flags selecting the hex parsing policy.
#[derive(Args, Debug, Clone, Copy)]
pub struct HexArgs {
    /// Accept a leading 0x on address input.
    #[arg(long, global = true, conflicts_with = "canonical")]
    pub allow_prefix: bool,

    /// Accept only bare lowercase hex.
    #[arg(long, global = true)]
    pub canonical: bool,
}

impl HexArgs {
    /// The `HexConfig` these flags select.
    pub fn config(&self) -> HexConfig {
        if self.canonical {
            HexConfig::canonical()
        } else if self.allow_prefix {
            HexConfig::lenient()
        } else {
            HexConfig::standard()
        }
    }
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show every encoding of an address
    Inspect {
        /// Address as hex text
        address: String,
    },
    /// Print the JSON form of an address
    ToJson {
        /// Address as hex text
        address: String,
    },
    /// Decode an address from a JSON value
    FromJson {
        /// JSON document, e.g. '"00..01"'
        json: String,
    },
    /// Decode an address from the front of a binary payload
    FromBinary {
        /// Payload bytes as hex
        payload: String,
        /// Maximum bytes the decode may consume
        #[arg(long, default_value_t = MAX_BYTES)]
        max_bytes: usize,
    },
}

/// Filter directive for a `-v` count, used when `RUST_LOG` is unset.
pub fn default_log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Execute a parsed command, writing results to `out`.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<(), CliError> {
    let config = cli.hex.config();
    debug!(?config, "hex policy");

    match &cli.command {
        Commands::Inspect { address } => {
            let addr = Address::from_hex_with(address, config)?;
            writeln!(out, "hex:      {}", addr)?;
            writeln!(out, "prefixed: {}", addr.to_hex_prefixed())?;
            writeln!(out, "json:     {}", addr.to_json())?;
            writeln!(out, "size:     {}", addr.size_hint())?;
        }
        Commands::ToJson { address } => {
            let addr = Address::from_hex_with(address, config)?;
            writeln!(out, "{}", addr.to_json())?;
        }
        Commands::FromJson { json } => {
            let addr = Address::from_json_with(json.as_bytes(), config)?;
            writeln!(out, "{}", addr)?;
        }
        Commands::FromBinary { payload, max_bytes } => {
            let digits = payload.strip_prefix("0x").unwrap_or(payload);
            let data = hex::decode(digits).map_err(AddressError::from)?;
            let mut r = CodecReader::with_budget(&data, *max_bytes);
            let addr = Address::decode(&mut r).map_err(AddressError::from)?;
            debug!(consumed = r.position(), budget_left = r.budget(), "decoded address");
            writeln!(out, "{}", addr)?;
            writeln!(out, "unread:   {}", r.remaining())?;
        }
    }
    Ok(())
}
