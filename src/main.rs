// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use std::io::Write;
use std::process::ExitCode;

use anyhow::{Context, Result};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, error};

use adaptive_manifest::directives;
use adaptive_manifest::errors::DirectiveError;
use adaptive_manifest::manifest_model::ManifestModel;

fn print_usage() {
    println!(
        "Usage: adaptive-manifest <-mg [mg options] <-m [m options]>...>... \
         [-mi options] [-o output_file]"
    );
    println!();
    println!("Main options:");
    println!("-h                    show help");
    println!("-v                    show version");
    println!("-?                    show help");
    println!();
    println!("mg options:");
    println!("-id <string>          id of the MediaGroup");
    println!("-lang <string>        lang of the MediaGroup");
    println!();
    println!("m options:");
    println!("-id <string>          id of the Media");
    println!("-file <string>        filename of the Media");
    println!();
    println!("mi options:");
    println!("-duration <double>    duration in seconds");
    println!("-groups <string>      list of MediaGroups separated by :");
    println!("-id <string>          id of the MediaInterval");
    println!("-start <double>       start time in seconds");
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let mut stderr = std::io::stderr();
            let _ = match record.level() {
                Level::Error => {
                    writeln!(stderr, "\x1B[1;31m{} {}\x1B[0m", now, record.args())
                }
                Level::Warn => {
                    writeln!(stderr, "\x1B[1;33m{} {}\x1B[0m", now, record.args())
                }
                _ => writeln!(stderr, "{} {}", now, record.args()),
            };
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Validates the built model and writes the manifest file
fn emit_manifest(model: &ManifestModel) -> Result<()> {
    let validated = model
        .validate()
        .context("manifest model failed validation")?;
    validated.emit().context("manifest emission failed")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = CustomLogger::init(LevelFilter::Info) {
        eprintln!("Failed to initialize logger: {}", err);
    }

    let args: Vec<String> = std::env::args().skip(1).collect();

    let mut model = ManifestModel::new();
    if let Err(err) = directives::apply(&args, &mut model) {
        if !matches!(err, DirectiveError::UsageRequested) {
            error!("{}", err);
        }
        print_usage();
        return ExitCode::FAILURE;
    }

    if let Err(err) = emit_manifest(&model) {
        error!("{:#}", err);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
