use clap::{Parser, ValueEnum};
use std::fmt;

/// Which flavour of the demo API to serve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Plain-text index, closed random range, parameterized user lookup
    #[default]
    Safe,
    /// JSON index, half-open random range, string-built user lookup
    Vulnerable,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Safe => write!(f, "safe"),
            Mode::Vulnerable => write!(f, "vulnerable"),
        }
    }
}

/// Startup configuration for the demo server.
#[derive(Debug, Clone, Parser)]
#[command(name = "demo-api", version, about = "Tiny HTTP demo API (with an intentional SQL injection)")]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 5000)]
    pub port: u16,

    /// API variant to serve
    #[arg(long, value_enum, default_value_t = Mode::Safe)]
    pub mode: Mode,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
