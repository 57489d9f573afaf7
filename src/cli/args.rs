//! CLI argument parsing

use std::collections::BTreeSet;

#[derive(Debug, Clone)]
pub struct CliArgs {
    pub command: Command,
}

#[derive(Debug, Clone)]
pub enum Command {
    Analyze(AnalyzeArgs),
    Preview(RenameArgs),
    Rename(RenameArgs),
}

#[derive(Debug, Clone)]
pub struct AnalyzeArgs {
    pub path: String,
    pub json: bool,
}

#[derive(Debug, Clone)]
pub struct RenameArgs {
    pub path: String,
    pub start: u32,
    pub digits: usize,
    pub separator: String,
    pub types: BTreeSet<String>,
    pub dry_run: bool,
    pub json: bool,
    pub quiet: bool,
}

impl Default for RenameArgs {
    fn default() -> Self {
        Self {
            path: String::new(),
            start: 1,
            digits: 3,
            separator: "_".to_string(),
            types: BTreeSet::new(),
            dry_run: false,
            json: false,
            quiet: false,
        }
    }
}

/// Normalize a user-supplied extension: lower-cased, leading dot enforced
fn normalize_extension(raw: &str) -> String {
    let lower = raw.trim().to_lowercase();
    if lower.starts_with('.') {
        lower
    } else {
        format!(".{lower}")
    }
}

/// Parse command line arguments
pub fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    if args.len() < 2 {
        return Err("No command specified".to_string());
    }

    let command = match args[1].as_str() {
        "analyze" => Command::Analyze(parse_analyze_args(&args[2..])?),
        "preview" => Command::Preview(parse_rename_args(&args[2..])?),
        "rename" => Command::Rename(parse_rename_args(&args[2..])?),
        _ => return Err(format!("Unknown command: {}", args[1])),
    };

    Ok(CliArgs { command })
}

fn parse_analyze_args(args: &[String]) -> Result<AnalyzeArgs, String> {
    let mut path = String::new();
    let mut json = false;
    let mut i = 0;

    while i < args.len() {
        match args[i].as_str() {
            "--json" => {
                json = true;
            }
            arg if !arg.starts_with("--") => {
                if path.is_empty() {
                    path = arg.to_string();
                } else {
                    return Err(format!("Unexpected argument: {arg}"));
                }
            }
            _ => return Err(format!("Unknown option: {}", args[i])),
        }
        i += 1;
    }

    if path.is_empty() {
        return Err("Missing required argument: PATH".to_string());
    }

    Ok(AnalyzeArgs { path, json })
}

fn parse_rename_args(args: &[String]) -> Result<RenameArgs, String> {
    let mut rename_args = RenameArgs::default();
    let mut i = 0;

    while i < args.len() {
        match args[i].as_str() {
            "--start" => {
                i += 1;
                if i >= args.len() {
                    return Err("--start requires a value".to_string());
                }
                rename_args.start = args[i]
                    .parse()
                    .map_err(|_| "--start must be a non-negative number".to_string())?;
            }
            "--digits" => {
                i += 1;
                if i >= args.len() {
                    return Err("--digits requires a value".to_string());
                }
                let digits: usize = args[i]
                    .parse()
                    .map_err(|_| "--digits must be a number".to_string())?;
                if digits == 0 {
                    return Err("--digits must be at least 1".to_string());
                }
                rename_args.digits = digits;
            }
            "--separator" => {
                i += 1;
                if i >= args.len() {
                    return Err("--separator requires a value".to_string());
                }
                rename_args.separator.clone_from(&args[i]);
            }
            "--types" => {
                i += 1;
                if i >= args.len() {
                    return Err("--types requires a comma-separated list".to_string());
                }
                rename_args.types = args[i]
                    .split(',')
                    .filter(|s| !s.trim().is_empty())
                    .map(normalize_extension)
                    .collect();
            }
            "--dry-run" => {
                rename_args.dry_run = true;
            }
            "--json" => {
                rename_args.json = true;
            }
            "--quiet" => {
                rename_args.quiet = true;
            }
            arg if !arg.starts_with("--") => {
                if rename_args.path.is_empty() {
                    rename_args.path = arg.to_string();
                } else {
                    return Err(format!("Unexpected argument: {arg}"));
                }
            }
            _ => return Err(format!("Unknown option: {}", args[i])),
        }
        i += 1;
    }

    if rename_args.path.is_empty() {
        return Err("Missing required argument: PATH".to_string());
    }

    Ok(rename_args)
}
