use buildver::prelude::*;
use clap::{ArgAction, Args, Parser};
use tracing_subscriber::EnvFilter;

/// Where the reference date comes from. The flags are mutually exclusive;
/// omitting them all uses the local date.
#[derive(Args, Debug)]
#[group(required = false, multiple = false)]
struct DateArg {
    /// Use the current UTC date when encoding the build number.
    #[arg(long)]
    utc: bool,

    /// Use the current local date when encoding the build number.
    #[arg(long)]
    local: bool,

    /// Use an explicit date when encoding the build number.
    #[arg(long, value_name = "YYYY-MM-DD")]
    date: Option<Date>,
}

impl DateArg {
    fn to_date(&self) -> Date {
        if self.utc {
            return Date::utc_now();
        }
        if let Some(date) = self.date {
            return date;
        }
        Date::local_now()
    }
}

/// Stamps and advances four-part version numbers with date-encoded build
/// numbers.
///
/// The increment format has four dot-separated fields for (major, minor,
/// build, patch): `*` holds a field, `+` increments it, and a decimal number
/// pins it to that value. The build field is encoded under the scheme given
/// with --increment; all other fields are plain counters.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// The current version, as `major.minor.build.patch`.
    #[arg(value_name = "VERSION")]
    current: String,

    /// The per-field increment format.
    #[arg(short, long, default_value = "*.*.+.*")]
    format: String,

    /// The build-number encoding scheme.
    #[arg(short, long, default_value = "simple")]
    increment: IncrementType,

    /// The base year offsets are measured against. Omit to leave it unset.
    #[arg(short = 'y', long = "year", value_parser = clap::value_parser!(u32).range(1970..))]
    year: Option<u32>,

    /// Print the calendar date decoded from the build field instead of
    /// bumping the version.
    #[arg(long)]
    to_date: bool,

    #[command(flatten)]
    date: DateArg,

    /// Increase log verbosity (-v for debug, -vv for trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<String, CompositeError> {
    let format: Format = cli.format.parse()?;
    let mut version: VersionInfo = cli.current.parse()?;
    version.set_base_year(cli.year.unwrap_or(0));
    version.set_scheme(cli.increment);

    let today = cli.date.to_date();

    if cli.to_date {
        let decoded = version.to_date(&today)?;
        return Ok(match decoded {
            Some(date) => date.to_string(),
            None => "no date".to_string(),
        });
    }

    version.apply(&format, &today);
    Ok(version.to_string())
}
