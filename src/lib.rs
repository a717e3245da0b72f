pub mod args;
pub mod config;
pub mod http;
pub mod outcome;
pub mod telemetry;


use tracing::debug;

// Re-export main types for easy access
pub use args::Invocation;
pub use config::CheckOptions;
pub use outcome::{classify, Outcome};

/// Carry one invocation through the whole pipeline.
pub fn run(invocation: Invocation, options: &CheckOptions) -> Outcome {
    debug!(?invocation, "parsed arguments");

    match invocation {
        Invocation::Help => Outcome::Help,
        Invocation::Version => Outcome::Version,
        Invocation::Usage => Outcome::Usage,
        Invocation::Check(candidate) => check(&candidate, options),
    }
}

/// Validate `candidate`, request it once and classify the answer.
pub fn check(candidate: &str, options: &CheckOptions) -> Outcome {
    let target = match http::url::parse(candidate) {
        Ok(target) => target,
        Err(err) => {
            debug!(%err, "rejected URL");
            return Outcome::Unparseable(candidate.to_string());
        }
    };

    match http::fetch_status(&target, options) {
        Ok(status) => classify(status),
        Err(err) => {
            debug!(error = ?err, "request failed");
            err.into()
        }
    }
}
