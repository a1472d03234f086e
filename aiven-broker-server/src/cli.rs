use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Aiven Broker - service broker for Aiven Elasticsearch
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub mode: Mode,
}

#[derive(Subcommand, Debug)]
pub enum Mode {
    /// Run the broker API server
    Serve {
        /// API port
        #[arg(short, long, env = "PORT", default_value = "3000")]
        port: u16,
    },

    /// Print the plan catalog from a broker config file
    Plans {
        /// Path to the broker config JSON
        #[arg(short, long, env = "BROKER_CONFIG")]
        config: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "table")]
        output: String,
    },
}
