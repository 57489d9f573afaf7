//! Bulk File Renamer (bfr) - Main binary entry point

use bfr::NamingConfig;
use bfr::cli::args::{AnalyzeArgs, Command, RenameArgs, parse_args};
use bfr::cli::output;
use std::process;

fn main() {
    // Initialize logger (controlled by RUST_LOG environment variable)
    // Example: RUST_LOG=debug bfr preview /path
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_help();
        return;
    }

    match args[1].as_str() {
        "--help" | "-h" => {
            print_help();
            return;
        }
        "--version" | "-v" => {
            print_version();
            return;
        }
        _ => {}
    }

    let cli_args = match parse_args(&args) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Use --help for usage information");
            process::exit(2);
        }
    };

    let exit_code = match &cli_args.command {
        Command::Analyze(analyze_args) => handle_analyze(analyze_args),
        Command::Preview(rename_args) => handle_batch(rename_args, true),
        Command::Rename(rename_args) => handle_batch(rename_args, false),
    };

    process::exit(exit_code);
}

fn handle_analyze(args: &AnalyzeArgs) -> i32 {
    let analysis = match bfr::analyze(&args.path) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {e}");
            return match e {
                bfr::Error::InvalidInput(_) => 2,
                _ => 4,
            };
        }
    };

    if args.json {
        println!("{}", output::format_analysis_json(&analysis));
    } else {
        print!("{}", output::format_analysis_text(&analysis));
    }

    0
}

fn handle_batch(args: &RenameArgs, preview_only: bool) -> i32 {
    let config = NamingConfig {
        start_number: args.start,
        digits: args.digits,
        separator: args.separator.clone(),
        file_types: args.types.clone(),
        dry_run: args.dry_run,
    };

    if !args.quiet {
        let verb = if preview_only || config.dry_run {
            "Previewing"
        } else {
            "Renaming"
        };
        eprintln!("{verb}: {}", args.path);
    }

    let report = if preview_only {
        bfr::preview(&args.path, &config)
    } else {
        bfr::rename(&args.path, &config)
    };

    let report = match report {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {e}");
            return match e {
                bfr::Error::InvalidInput(_) => 2,
                _ => 4,
            };
        }
    };

    if args.json {
        println!("{}", output::format_report_json(&report));
    } else {
        print!("{}", output::format_report_text(&report));
    }

    // Recorded errors are expected output, not an exceptional path, but the
    // exit code still has to reflect them
    if report.errors.is_empty() { 0 } else { 3 }
}

fn print_help() {
    println!("Bulk File Renamer (bfr) - Rename subfolder files to a sequential scheme");
    println!();
    println!("Files inside each immediate subfolder of PATH are renamed to");
    println!("<folder><separator><padded counter><extension>.");
    println!();
    println!("USAGE:");
    println!("    bfr analyze <PATH> [--json]");
    println!("    bfr preview <PATH> [OPTIONS]");
    println!("    bfr rename <PATH> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    analyze   Count files per subfolder and list extensions, no changes");
    println!("    preview   Compute the full rename plan without touching anything");
    println!("    rename    Apply the renames");
    println!();
    println!("GLOBAL OPTIONS:");
    println!("    -h, --help                Show this help message");
    println!("    -v, --version             Show version information");
    println!();
    println!("NAMING OPTIONS:");
    println!("    --start <N>               First sequence number per folder (default: 1)");
    println!("    --digits <N>              Zero-pad width (default: 3)");
    println!("    --separator <S>           Folder/number separator (default: _)");
    println!("    --types <.ext,.ext>       Only rename these extensions (default: all)");
    println!();
    println!("OUTPUT OPTIONS:");
    println!("    --dry-run                 Plan without renaming (rename command only)");
    println!("    --json                    Emit machine-readable output");
    println!("    --quiet                   Suppress non-error output");
    println!();
    println!("EXAMPLES:");
    println!("    bfr analyze ~/Pictures");
    println!("    bfr preview ~/Pictures --digits 4 --separator -");
    println!("    bfr rename ~/Pictures --types .jpg,.png --start 10");
}

fn print_version() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const BUILD_TARGET: &str = env!("BUILD_TARGET");

    println!("bfr {VERSION}");
    println!("Commit: {GIT_HASH}");
    println!("Target: {BUILD_TARGET}");

    #[cfg(debug_assertions)]
    println!("Build: debug");
    #[cfg(not(debug_assertions))]
    println!("Build: release");
}
