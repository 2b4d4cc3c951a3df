//! check-docs - toctree reference checker

use clap::Parser;
use doc_check::cli::{Args, EXIT_FATAL, EXIT_MISSING, EXIT_OK};
use doc_check::{check_references, parse_references, DocCheckError, ParseOptions, Settings};
use fw_core::{Stream, Style};
use std::process::ExitCode;
use tracing::info;

fn main() -> ExitCode {
    let args = Args::parse();
    fw_core::logging::init(args.verbose, args.quiet);

    match run(&args) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::from(EXIT_FATAL)
        }
    }
}

fn run(args: &Args) -> Result<u8, DocCheckError> {
    let Settings {
        docs_dir,
        index_file,
        recursive,
        extensions,
    } = args.settings()?;

    info!(
        "Checking {} (docs dir {}, recursive: {})",
        index_file.display(),
        docs_dir.display(),
        recursive
    );

    let options = ParseOptions::for_index(&index_file)
        .docs_dir(&docs_dir)
        .recursive(recursive)
        .extensions(extensions.clone());

    let refs = parse_references(&index_file, &options)?;
    let missing = check_references(&refs, &docs_dir, &extensions);

    if missing.is_empty() {
        if !args.quiet {
            let out = Style::detect(Stream::Stdout, args.no_color);
            println!(
                "{} {} toctree reference(s) resolve",
                out.pass("All"),
                refs.len()
            );
        }
        return Ok(EXIT_OK);
    }

    let err = Style::detect(Stream::Stderr, args.no_color);
    for item in &missing {
        eprintln!(
            "{} {} {}",
            err.fail("Missing file:"),
            item.path.display(),
            err.dim(&format!(
                "(referenced from {}:{})",
                item.reference.source.display(),
                item.reference.line
            ))
        );
    }

    Ok(EXIT_MISSING)
}
