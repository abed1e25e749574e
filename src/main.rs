use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use std::fs;
use tracing::{debug, info, warn};

use cipher_prefs::cli;
use cipher_prefs::config::TlsPolicy;
use cipher_prefs::logging::{self, Verbosity};
use cipher_prefs::output::OutputFormatter;

fn main() -> Result<()> {
    let args = cli::Args::parse();
    logging::init(Verbosity::from_flags(args.verbose, args.quiet))?;

    args.validate().context("Invalid arguments")?;

    let config = args.policy_config()?;
    debug!(
        protocol = config.protocol.as_str(),
        format = args.format.as_str(),
        "evaluating policy"
    );

    if config.cipher_list.is_none() && config.curves.is_none() {
        warn!("policy file sets neither cipher_list nor curves; showing protocol only");
    }

    let policy = TlsPolicy::from_config(&config).context("Invalid TLS policy")?;
    info!(
        suites = policy.cipher_list().len(),
        curves = policy.curves().len(),
        "policy compiled"
    );

    let output = OutputFormatter::format(&config, &policy, args.format)?;

    match args.output_file {
        Some(ref path) => {
            fs::write(path, &output)
                .with_context(|| format!("Cannot write output file: {}", path.display()))?;
            info!(path = %path.display(), "wrote output");
        }
        None => {
            print!("{output}");
            if !output.ends_with('\n') {
                println!();
            }
        }
    }

    Ok(())
}
