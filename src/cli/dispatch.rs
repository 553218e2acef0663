// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use crate::analysis::Classifier;
use crate::config::CgConfig;
use crate::error::{CgError, ConfigError, Result, ResultExt};
use crate::git::{self, ChangedFile};
use crate::report::{Report, TextRenderer};
use std::io::Read;
use std::path::Path;

use super::args::{Cli, Commands, InitArgs, OutputFormat};

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    match cli.effective_command() {
        Commands::Analyze => run_analyze(&cli),
        Commands::Init(args) => run_init(args),
        Commands::Version => run_version(),
    }
}

/// Load configuration from `--config` or the default locations.
fn load_config(cli: &Cli) -> Result<CgConfig> {
    if let Some(config_path) = &cli.config {
        CgConfig::load_from(config_path)
    } else {
        CgConfig::load()
    }
}

/// Collect the change list from stdin or the current repository.
fn changed_files(cli: &Cli) -> Result<Vec<ChangedFile>> {
    if cli.stdin {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("Failed to read status from stdin")?;
        let files = git::parse_porcelain(&input);
        tracing::debug!("Read {} changed files from stdin", files.len());
        Ok(files)
    } else {
        git::open_repo()?.changed_files()
    }
}

/// Run the analyze command.
fn run_analyze(cli: &Cli) -> Result<()> {
    tracing::debug!("Running analyze command");

    let files = changed_files(cli)?;
    let config = load_config(cli)?;
    let classifier = Classifier::from_config(&config)?;
    let format = cli.output_format();

    if files.is_empty() && format == OutputFormat::Text {
        println!("No changed files detected.");
        println!("Run 'git status' to see the current state.");
        return Ok(());
    }

    let groups = classifier.group(&files);
    let report = Report::new(&files, &groups);

    match format {
        OutputFormat::Text => {
            let color = !cli.no_color && console::colors_enabled();
            let renderer = TextRenderer::from_config(&config.report, color);
            println!("{}", renderer.render(&report));
        }
        OutputFormat::Json => println!("{}", report.to_json()?),
    }

    Ok(())
}

/// Run the init command.
fn run_init(args: InitArgs) -> Result<()> {
    use crate::config::default::example_config;

    tracing::debug!("Running init command with args: {:?}", args);

    let config_path = Path::new("cg.toml");

    if config_path.exists() && !args.force {
        return Err(CgError::Config(ConfigError::AlreadyExists {
            path: config_path.to_path_buf(),
        }));
    }

    std::fs::write(config_path, example_config()).context("Failed to write configuration")?;

    println!("✓ Created cg.toml");

    Ok(())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("cg {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(())
}
