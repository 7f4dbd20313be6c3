// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::{bail, Context};
use bridgegen::config::load_and_validate_config;
use bridgegen::generator::Generator;
use bridgegen::render::TargetKind;
use std::env;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Parsed command line
struct Args {
    config: String,
    targets: Vec<TargetKind>,
    check: bool,
}

fn usage(program: &str) -> String {
    format!(
        "Usage: {program} <config.(yaml|json|toml)> [--target NAME]... [--check]\n\
         Targets: rust, python, c\n\
         Example: {program} demos/flywheel.yaml --target python --check"
    )
}

fn parse_args(args: &[String]) -> anyhow::Result<Args> {
    let mut config = None;
    let mut targets = Vec::new();
    let mut check = false;

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--check" => check = true,
            "--target" => {
                let Some(name) = iter.next() else {
                    bail!("--target requires a value");
                };
                targets.push(name.parse::<TargetKind>()?);
            }
            flag if flag.starts_with("--") => bail!("Unknown option '{}'", flag),
            path if config.is_none() => config = Some(path.to_string()),
            extra => bail!("Unexpected argument '{}'", extra),
        }
    }

    let Some(config) = config else {
        bail!("Missing config file");
    };

    Ok(Args {
        config,
        targets,
        check,
    })
}

fn run(args: &Args) -> anyhow::Result<()> {
    let validated = load_and_validate_config(&args.config)
        .with_context(|| format!("Failed to load {}", args.config))?;
    let generator = Generator::from_config(&validated);

    if args.check {
        let outputs = generator.render_all(&args.targets);
        tracing::info!(
            output_count = outputs.len(),
            "Check passed: {} signatures, {} outputs rendered",
            validated.model.len(),
            outputs.len()
        );
        return Ok(());
    }

    let written = generator
        .write_all(&args.targets)
        .context("Failed to write bindings")?;
    tracing::info!(output_count = written.len(), "Generated {} bindings", written.len());
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let argv: Vec<String> = env::args().collect();
    let program = argv.first().map(String::as_str).unwrap_or("bridgegen");

    let args = match parse_args(&argv) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}\n\n{}", e, usage(program));
            return ExitCode::FAILURE;
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Generation failed");
            eprintln!("Error: {:?}", e);
            ExitCode::FAILURE
        }
    }
}
