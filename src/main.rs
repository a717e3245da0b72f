use headcheck::{run, telemetry, CheckOptions, Invocation};
use std::io::{self, ErrorKind, Write};
use std::process;

/// headcheck - report whether a URL answers with a 2xx status
fn main() {
    telemetry::init_logging();

    let outcome = run(Invocation::from_env(), &CheckOptions::default());
    let mut code = outcome.exit_code();

    if let Err(err) = writeln!(io::stdout().lock(), "{}", outcome) {
        // A reader that went away early still gets the exit code
        if err.kind() != ErrorKind::BrokenPipe {
            tracing::error!(%err, "could not write result");
            code = code.max(1);
        }
    }

    process::exit(code);
}
