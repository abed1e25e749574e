use std::io::IsTerminal;

use anyhow::{anyhow, Result};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, EnvFilter};

const LOG_TARGET: &str = "cipher_prefs";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    Debug,
    Trace,
}

impl Verbosity {
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    /// Quiet still lets errors through; the report itself goes to stdout.
    pub fn level_filter(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::ERROR,
            Self::Normal => LevelFilter::WARN,
            Self::Verbose => LevelFilter::INFO,
            Self::Debug => LevelFilter::DEBUG,
            Self::Trace => LevelFilter::TRACE,
        }
    }

    pub fn directive(self) -> String {
        let level = match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        };
        format!("{LOG_TARGET}={level}")
    }

    /// Source locations and timestamps, from `-vv` up.
    pub fn shows_source(self) -> bool {
        self >= Self::Debug
    }
}

/// Installs the global subscriber on stderr. `RUST_LOG` overrides the flags.
pub fn init(verbosity: Verbosity) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.directive()));

    let builder = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(verbosity == Verbosity::Trace)
        .with_file(verbosity.shows_source())
        .with_line_number(verbosity.shows_source())
        .compact();

    let installed = if verbosity.shows_source() {
        builder.try_init()
    } else {
        builder.without_time().try_init()
    };
    installed.map_err(|err| anyhow!("cannot install log subscriber: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_from_flags() {
        assert_eq!(Verbosity::from_flags(0, true), Verbosity::Quiet);
        assert_eq!(Verbosity::from_flags(0, false), Verbosity::Normal);
        assert_eq!(Verbosity::from_flags(1, false), Verbosity::Verbose);
        assert_eq!(Verbosity::from_flags(2, false), Verbosity::Debug);
        assert_eq!(Verbosity::from_flags(7, false), Verbosity::Trace);
        assert_eq!(Verbosity::from_flags(2, true), Verbosity::Quiet);
    }

    #[test]
    fn test_directive_targets_crate() {
        assert_eq!(Verbosity::Quiet.directive(), "cipher_prefs=error");
        assert_eq!(Verbosity::Normal.directive(), "cipher_prefs=warn");
        assert_eq!(Verbosity::Verbose.directive(), "cipher_prefs=info");
        assert_eq!(Verbosity::Trace.directive(), "cipher_prefs=trace");
    }

    #[test]
    fn test_directive_parses_as_filter() {
        for verbosity in [Verbosity::Quiet, Verbosity::Normal, Verbosity::Debug] {
            assert!(verbosity.directive().parse::<EnvFilter>().is_ok());
        }
    }

    #[test]
    fn test_source_shown_from_debug() {
        assert!(!Verbosity::Normal.shows_source());
        assert!(!Verbosity::Verbose.shows_source());
        assert!(Verbosity::Debug.shows_source());
        assert!(Verbosity::Trace.shows_source());
        assert!(Verbosity::Quiet.level_filter() < Verbosity::Normal.level_filter());
    }
}
