//! size-gate - flash footprint gate

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use fw_core::{Stream, Style};
use size_gate::cli::{Args, Mode, EXIT_FAIL, EXIT_FATAL, EXIT_OK, EXIT_USAGE};
use size_gate::gate::ArtifactReport;
use size_gate::settings::DEFAULT_EXTENSION;
use size_gate::{
    discover_artifacts, resolve_limit, Gate, SizeGateConfig, SizeGateError, SizeTool, Verdict,
    LIMIT_ENV,
};
use std::process::ExitCode;
use tracing::info;

fn main() -> ExitCode {
    let args = Args::parse();
    fw_core::logging::init(args.verbose, args.quiet);

    let mode = match args.mode() {
        Ok(mode) => mode,
        Err(message) => Args::command()
            .error(ErrorKind::WrongNumberOfValues, message)
            .exit(),
    };

    match run(&args, mode) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("[size-gate] error: {:#}", err);
            let code = match err.downcast_ref::<SizeGateError>() {
                Some(e) if e.is_usage() => EXIT_USAGE,
                _ => EXIT_FATAL,
            };
            ExitCode::from(code)
        }
    }
}

fn run(args: &Args, mode: Mode) -> Result<u8> {
    let config = SizeGateConfig::load(args.config.as_deref())?;
    let env_limit = std::env::var(LIMIT_ENV).ok();
    let limit = resolve_limit(args.limit, env_limit.as_deref(), config.limit)?;

    let tool = args
        .tool
        .clone()
        .or(config.tool)
        .map(SizeTool::new)
        .unwrap_or_default();

    let (artifacts, stamp) = match mode {
        Mode::Explicit { artifacts, stamp } => (artifacts, stamp),
        Mode::Sweep { dir, stamp } => {
            let extension = args
                .extension
                .clone()
                .or(config.extension)
                .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());

            let artifacts = discover_artifacts(&dir, &extension)?;
            if artifacts.is_empty() {
                let err = SizeGateError::NoArtifacts {
                    dir,
                    extension: extension.trim_start_matches('.').to_string(),
                };
                eprintln!("[size-gate] {}", err);
                return Ok(EXIT_FAIL);
            }
            (artifacts, stamp)
        }
    };

    info!("Using {} with limit {} bytes", tool.program(), limit);

    let out = Style::detect(Stream::Stdout, args.no_color);
    let err = Style::detect(Stream::Stderr, args.no_color);

    let gate = Gate::new(tool, limit);
    let report = gate.run(&artifacts, |r| print_result(r, limit, args.quiet, out, err))?;

    report
        .write_stamp(&stamp)
        .with_context(|| format!("recording max size {}", report.max_size()))?;

    if report.passed() {
        return Ok(EXIT_OK);
    }

    eprintln!(
        "[size-gate] {} of {} artifacts exceed the flash limit of {} bytes",
        report.failures().count(),
        report.results.len(),
        limit
    );
    Ok(EXIT_FAIL)
}

fn print_result(report: &ArtifactReport, limit: u64, quiet: bool, out: Style, err: Style) {
    match report.verdict {
        Verdict::Pass if quiet => {}
        Verdict::Pass => println!(
            "[size-gate] {} : {} bytes {}",
            report.artifact.display(),
            report.flash(),
            out.pass("OK")
        ),
        Verdict::OverLimit => eprintln!(
            "[size-gate] {} : {} bytes {}",
            report.artifact.display(),
            report.flash(),
            err.fail(&format!("> {}", limit))
        ),
    }
}
