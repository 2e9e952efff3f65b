//! CLI argument definitions using clap derive API

use clap::Parser;

/// SQL test-scenario generation service
#[derive(Parser, Debug)]
#[command(name = "tg-server")]
#[command(author, version, about, long_about = None)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long, env = "TG_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "TG_PORT", default_value_t = 8000)]
    pub port: u16,

    /// SQL dialect used for parsing
    #[arg(short, long, env = "TG_DIALECT", default_value = "generic")]
    pub dialect: String,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
