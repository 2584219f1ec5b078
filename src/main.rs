use std::{
    fs,
    io::{self, BufRead},
    path::{Path, PathBuf},
};

use clap::Parser;
use radixa::{get_result, input::request::REQUEST_LINES};
use tracing::{Level, debug, level_filters::LevelFilter, warn};
use tracing_subscriber::EnvFilter;

/// radixa converts a numeral from one radix into another.
///
/// Reads three lines: the source radix, the numeral and the target radix.
/// Prints the converted numeral, or `error` if the input is invalid.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Reads the three input lines from a file instead of standard input.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Logs diagnostics to stderr. Repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let input = match read_input(args.file.as_deref()) {
        Ok(input) => input,
        Err(e) => {
            warn!("Failed to read the input: {e}");
            println!("error");
            return;
        },
    };

    match get_result(&input) {
        Ok(numeral) => println!("{numeral}"),
        Err(e) => {
            debug!("{e}");
            println!("error");
        },
    }
}

/// Reads the whole file, or at most three lines of standard input so that an
/// interactive session does not wait for end of input.
fn read_input(file: Option<&Path>) -> io::Result<String> {
    if let Some(path) = file {
        return fs::read_to_string(path);
    }

    let mut input = String::new();
    for line in io::stdin().lock().lines().take(REQUEST_LINES) {
        input.push_str(&line?);
        input.push('\n');
    }
    Ok(input)
}

/// Installs a stderr subscriber. `RUST_LOG` takes precedence; otherwise the
/// level is WARN, DEBUG with `-v` and TRACE with `-vv`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::builder().with_default_directive(LevelFilter::from_level(level).into())
                                     .from_env_lossy();

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_target(false)
                             .with_writer(io::stderr)
                             .init();
}
