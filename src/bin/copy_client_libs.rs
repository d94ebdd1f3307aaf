use clap::Parser;
use client_assets::config::CopierConfig;
use client_assets::libs::LibraryCopier;
use client_assets::logger;
use std::process::ExitCode;

/// Copy front-end libraries from node_modules into the web root
#[derive(Debug, Parser)]
#[command(name = "copy-client-libs", version)]
struct Cli {
    /// Output root; `lib` is appended verbatim (default: ./../wwwroot/)
    output_root: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let cfg = match CopierConfig::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            logger::log_error(&format!("Invalid copier configuration: {e}"));
            return ExitCode::FAILURE;
        }
    };

    let base_dir = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            logger::log_error(&format!("Cannot determine working directory: {e}"));
            return ExitCode::FAILURE;
        }
    };

    let report = LibraryCopier::new(base_dir, cli.output_root.as_deref()).run(cfg.on_failure);

    let failed = report.failed().count();
    if failed > 0 {
        logger::log_warning(&format!(
            "{failed} of {} libraries could not be copied",
            report.outcomes.len()
        ));
        if cfg.fail_on_error {
            return ExitCode::FAILURE;
        }
    }
    ExitCode::SUCCESS
}
