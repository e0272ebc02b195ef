mod debug_report;
mod telemetry;

use menuscan::{Context, FileSource, HttpSource, MenuSource, Options, Venue, find_venue, run_venue, venues, write_report};
use std::io::{self, IsTerminal};
use std::path::PathBuf;

fn main() {
    telemetry::init();

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    if let Err(err) = run(&config) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

struct CliConfig {
    venues: Vec<&'static Venue>,
    context: Context,
    input: Option<PathBuf>,
    options: Options,
    stdout: bool,
    color: bool,
}

fn run(config: &CliConfig) -> menuscan::Result<()> {
    let source: Box<dyn MenuSource> = match &config.input {
        Some(path) => Box::new(FileSource::new(path)),
        None => Box::new(HttpSource::new(config.options.timeout, &config.options.user_agent)?),
    };

    for venue in &config.venues {
        let report = run_venue(venue, source.as_ref(), &config.context);

        if config.stdout {
            println!("{}", serde_json::to_string_pretty(&report)?);
            continue;
        }

        let path = write_report(&config.options.out_dir, venue.file_name, &report)?;
        debug_report::print_report(&report, &path.display().to_string(), config.color);
    }
    Ok(())
}

fn parse_args() -> Result<CliConfig, String> {
    let mut selected: Vec<&'static Venue> = Vec::new();
    let mut date: Option<String> = None;
    let mut input: Option<PathBuf> = None;
    let mut options = Options::from_env();
    let mut stdout = false;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("menuscan {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--all" => selected = venues().iter().collect(),
            "--stdout" => stdout = true,
            "--color" => color = true,
            "--no-color" => color = false,
            "--date" => {
                date = Some(args.next().ok_or_else(|| "error: --date expects a value".to_string())?);
            }
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                input = Some(PathBuf::from(value));
            }
            "--out-dir" | "-o" => {
                let value = args.next().ok_or_else(|| "error: --out-dir expects a value".to_string())?;
                options.out_dir = PathBuf::from(value);
            }
            _ if arg.starts_with("--date=") => date = Some(arg.trim_start_matches("--date=").to_string()),
            _ if arg.starts_with("--input=") => input = Some(PathBuf::from(arg.trim_start_matches("--input="))),
            _ if arg.starts_with("--out-dir=") => options.out_dir = PathBuf::from(arg.trim_start_matches("--out-dir=")),
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let venue =
                    find_venue(&arg).ok_or_else(|| format!("error: {}", menuscan::Error::UnknownVenue(arg.clone())))?;
                if !selected.iter().any(|v| v.slug == venue.slug) {
                    selected.push(venue);
                }
            }
        }
    }

    if selected.is_empty() {
        selected = venues().iter().collect();
    }

    let now = Context::now();
    let context = match date {
        Some(expr) => now.with_date_expr(&expr).map_err(|err| format!("error: {err}"))?,
        None => now,
    };

    Ok(CliConfig { venues: selected, context, input, options, stdout, color })
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    let slugs = venues().iter().map(|v| format!("  {:<10} {}", v.slug, v.label)).collect::<Vec<_>>().join("\n");
    format!(
        "menuscan {version}

Fetch today's dining menus and write normalized JSON reports.

Usage:
  menuscan [OPTIONS] [<venue>...]

Venues:
{slugs}

Options:
  --all                      Run every venue (default when none are named).
  --date <when>              Service date: YYYY-MM-DD or a phrase such as
                             'tomorrow' or 'next saturday'. Default: today
                             in {timezone}.
  -i, --input <file>         Read the API week JSON from a file instead of
                             fetching it.
  -o, --out-dir <dir>        Directory for report files. Default: $MENUSCAN_OUT_DIR
                             or the current directory.
  --stdout                   Print reports to stdout instead of writing files.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Environment:
  {log_var}               Log filter (e.g. 'info', 'menuscan=debug'). Default: warn.

Exit codes:
  0  Reports produced (fetch failures are recorded in the report status).
  1  Write or internal error.
  2  Invalid arguments.
",
        version = env!("CARGO_PKG_VERSION"),
        timezone = "America/New_York",
        log_var = telemetry::ENV_VAR,
    )
}
