use anyhow::{Context as AnyhowContext, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::catalog::ProtocolFamily;
use crate::config::PolicyConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "cipher-prefs")]
#[command(about = "Compile TLS cipher preference rules and curve lists", long_about = None)]
pub struct Args {
    /// Cipher rule string, e.g. "ECDHE+AESGCM:!kRSA"
    #[arg(long, value_name = "RULE")]
    pub ciphers: Option<String>,

    /// Colon-separated curve list, e.g. "X25519:P-256"
    #[arg(long, value_name = "LIST")]
    pub curves: Option<String>,

    /// Policy file (JSON or YAML). Command-line values override it.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Protocol family the rule is evaluated for
    #[arg(long, value_enum)]
    pub protocol: Option<ProtocolFamily>,

    /// Output file path (prints to stdout if not specified)
    #[arg(short = 'O', long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short = 'f', long, default_value = "text")]
    pub format: OutputFormat,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        if self.ciphers.is_none() && self.curves.is_none() && self.config.is_none() {
            anyhow::bail!("Nothing to evaluate: pass --ciphers, --curves or --config");
        }
        if let Some(ref config_path) = self.config {
            if !config_path.is_file() {
                anyhow::bail!("Policy file does not exist: {}", config_path.display());
            }
        }
        Ok(())
    }

    /// The policy file, if any, with command-line values laid over it.
    pub fn policy_config(&self) -> Result<PolicyConfig> {
        let mut config = match self.config {
            Some(ref path) => PolicyConfig::load(path)
                .with_context(|| format!("Cannot load policy file: {}", path.display()))?,
            None => PolicyConfig::default(),
        };

        if let Some(protocol) = self.protocol {
            config.protocol = protocol;
        }
        if let Some(ref ciphers) = self.ciphers {
            config.cipher_list = Some(ciphers.clone());
        }
        if let Some(ref curves) = self.curves {
            config.curves = Some(curves.clone());
        }
        Ok(config)
    }
}
