use std::ffi::OsString;

use clap::Parser;

/// Raw command line as clap sees it.
///
/// The built-in help and version flags are disabled so that both print the
/// fixed one-line output instead of clap's generated text. Any other
/// dash-prefixed token is taken as a positional, and repeated flags are
/// accepted, so clap only rejects arguments that are not valid UTF-8.
#[derive(Debug, Parser)]
#[command(
    name = "headcheck",
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true
)]
pub struct Cli {
    /// Print the documentation link.
    #[arg(long)]
    pub help: bool,

    /// Print the version.
    #[arg(long)]
    pub version: bool,

    /// URL to check. Exactly one is expected.
    #[arg(value_name = "URL", allow_hyphen_values = true)]
    pub urls: Vec<String>,
}

/// What a single run of the program was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Help,
    Version,
    /// Check the given candidate URL (not yet validated).
    Check(String),
    /// Wrong number of arguments, or arguments that are not valid UTF-8.
    Usage,
}

impl Invocation {
    /// Classify a full argument list, program name included.
    ///
    /// `--help` wins over everything else, `--version` wins over positional
    /// arguments. A single other token, dash-prefixed or not, is the
    /// candidate URL.
    pub fn parse_from<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let cli = match Cli::try_parse_from(args) {
            Ok(cli) => cli,
            Err(err) => {
                tracing::debug!(kind = ?err.kind(), "rejected arguments");
                return Invocation::Usage;
            }
        };

        Self::from_cli(cli)
    }

    /// Classify the arguments of the running process.
    pub fn from_env() -> Self {
        Self::parse_from(std::env::args_os())
    }

    fn from_cli(cli: Cli) -> Self {
        // Once a positional has been seen, clap hands later flags over as values.
        let passed = |flag: &str| cli.urls.iter().any(|url| url == flag);

        if cli.help || passed("--help") {
            return Invocation::Help;
        }
        if cli.version || passed("--version") {
            return Invocation::Version;
        }

        let mut urls = cli.urls;
        match (urls.pop(), urls.is_empty()) {
            (Some(url), true) => Invocation::Check(url),
            _ => Invocation::Usage,
        }
    }
}
