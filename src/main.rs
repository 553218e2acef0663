// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! cg - Conventional Commit Grouping Assistant

use clap::Parser;
use commit_groups::cli::{run, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Set up logging/tracing on stderr.
fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_new("commit_groups=debug,cg=debug,warn")
            .unwrap_or_else(|_| EnvFilter::new("warn"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if verbose {
        tracing::debug!("Verbose logging enabled");
    }
}
