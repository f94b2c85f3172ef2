// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Iroha query schema CLI
//!
//! Loads the query schema and encodes/decodes messages against it.
//!
//! # Usage
//!
//! ```bash
//! # Load and resolve the schema
//! iroha-schema check
//!
//! # Dump one type as JSON
//! iroha-schema dump --type iroha_data_model.query.Payload
//!
//! # Decode a response
//! iroha-schema decode --type iroha_data_model.query.VersionedPaginatedQueryResult \
//!     --version V1 --hex 01...
//!
//! # Encode a JSON value
//! iroha-schema encode --type iroha_data_model.pagination.Pagination \
//!     --json '{"Struct":[["start",{"Option":null}],["limit",{"Option":null}]]}'
//!
//! # Configuration
//! iroha-schema gen-config --output iroha-schema.toml
//! iroha-schema --config iroha-schema.toml decode --hex ...
//! ```

mod commands;
mod config;

use clap::{Parser, Subcommand};
use config::ToolConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Iroha query schema tool
#[derive(Parser, Debug)]
#[command(name = "iroha-schema")]
#[command(about = "Inspect the Iroha 2 query schema and encode/decode messages")]
#[command(version)]
struct Args {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); overrides the config file
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load and resolve the schema, then print a summary
    Check,

    /// Print the schema (or one type) as JSON
    Dump {
        /// Fully-qualified type name
        #[arg(short, long = "type")]
        type_name: Option<String>,
    },

    /// List query variants with their wire tags
    Queries,

    /// Decode hex bytes and print the value as JSON
    Decode {
        /// Fully-qualified type name
        #[arg(short, long = "type", default_value = commands::DEFAULT_REQUEST_TYPE)]
        type_name: String,

        /// Hex-encoded message (optional 0x prefix, whitespace ignored)
        #[arg(long)]
        hex: String,

        /// Unwrap this envelope version (e.g. V1)
        #[arg(long)]
        version: Option<String>,
    },

    /// Encode a JSON value and print it as hex
    Encode {
        /// Fully-qualified type name
        #[arg(short, long = "type")]
        type_name: String,

        /// Value in JSON form
        #[arg(long, conflicts_with = "file")]
        json: Option<String>,

        /// Read the JSON value from a file
        #[arg(long)]
        file: Option<PathBuf>,

        /// Wrap the value in this envelope version (e.g. V1)
        #[arg(long)]
        version: Option<String>,
    },

    /// Generate example configuration file
    GenConfig {
        /// Output file path
        #[arg(short, long, default_value = "iroha-schema.toml")]
        output: PathBuf,
    },

    /// Validate a configuration file
    ValidateConfig {
        /// Configuration file path
        #[arg(short, long)]
        config: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => ToolConfig::from_file(path)?,
        None => ToolConfig::default(),
    };

    // Initialize logging
    let level = args.log_level.as_deref().unwrap_or(&config.log_level);
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Commands that do not need the schema
    match &args.command {
        Commands::GenConfig { output } => return print(commands::gen_config(output)),
        Commands::ValidateConfig { config } => {
            return match commands::validate_config(config) {
                Ok(out) => {
                    println!("{}", out);
                    Ok(())
                }
                Err(e) => {
                    eprintln!("Configuration invalid: {}", e);
                    std::process::exit(1);
                }
            };
        }
        Commands::Queries => return print(Ok(commands::queries())),
        _ => {}
    }

    let schema = iroha_data_model::load_schema()?;

    let output = match args.command {
        Commands::Check => Ok(commands::check(&schema)),
        Commands::Dump { type_name } => commands::dump(&schema, type_name.as_deref()),
        Commands::Decode {
            type_name,
            hex,
            version,
        } => commands::decode(
            &schema,
            &config.codec,
            &type_name,
            &hex,
            version.as_deref(),
        ),
        Commands::Encode {
            type_name,
            json,
            file,
            version,
        } => {
            let json = match (json, file) {
                (Some(json), _) => json,
                (None, Some(path)) => std::fs::read_to_string(path)?,
                (None, None) => return Err("encode needs --json or --file".into()),
            };
            commands::encode(&schema, &type_name, &json, version.as_deref())
        }
        Commands::GenConfig { .. } | Commands::ValidateConfig { .. } | Commands::Queries => {
            Ok(String::new())
        }
    };
    print(output)
}

fn print(output: commands::CmdResult<String>) -> Result<(), Box<dyn std::error::Error>> {
    let text = output?;
    if !text.is_empty() {
        println!("{}", text.trim_end());
    }
    Ok(())
}
