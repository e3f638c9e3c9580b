use anyhow::Context;
use clap::{Parser, ValueEnum};
use commit_overview::logging::{self, LogConfig, LogLevel};
use commit_overview::{CommitAnalyzer, Filter};
use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;

/// 1文字より長い短縮オプションと、その正式名
const MULTI_CHAR_SHORT_FLAGS: &[(&str, &str)] = &[
    ("-sd", "--start-date"), // 開始日
    ("-ed", "--end-date"),   // 終了日
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Csv,
}

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Displays a commit overview and an ASCII commit graph for the specified period",
    long_about = None
)]
struct Cli {
    /// Start date in dd-mm-yyyy format, e.g. 01-04-2025 (short form: -sd)
    #[arg(long = "start-date")]
    start_date: String,

    /// End date in dd-mm-yyyy format, e.g. 30-04-2025 (short form: -ed)
    #[arg(long = "end-date")]
    end_date: String,

    /// Filter commits by author (case-insensitive substring), e.g. 'John Doe'
    #[arg(short, long)]
    author: Option<String>,

    /// Branch to analyze, e.g. 'develop' (defaults to the current branch)
    #[arg(short, long)]
    branch: Option<String>,

    /// Path inside the Git repository
    #[arg(short, long, default_value = ".")]
    repo: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Maximum length of a graph bar
    #[arg(short, long, default_value_t = 50, value_parser = clap::value_parser!(u16).range(1..=200))]
    width: u16,

    /// Minimum level of log messages (RUST_LOG takes precedence)
    #[arg(long, value_enum, default_value_t = LogLevel::Warning)]
    log_level: LogLevel,

    /// Directory for daily rotated log files
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Number of rotated log files to keep
    #[arg(long, default_value_t = 7)]
    log_keep: usize,
}

fn expand_short_flag(arg: &str) -> Option<String> {
    for (short, long) in MULTI_CHAR_SHORT_FLAGS {
        if arg == *short {
            return Some(long.to_string());
        }
        if let Some(value) = arg.strip_prefix(*short).and_then(|rest| rest.strip_prefix('=')) {
            return Some(format!("{}={}", long, value));
        }
    }
    None
}

/// `-sd`/`-ed`形式の引数を正式名に書き換えます
///
/// `-sd 01-04-2025`と`-sd=01-04-2025`のどちらの形式にも対応します。
fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| match arg.to_str().and_then(expand_short_flag) {
            Some(expanded) => OsString::from(expanded),
            None => arg,
        })
        .collect()
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));

    logging::init(&LogConfig {
        level: cli.log_level,
        log_dir: cli.log_dir.as_deref(),
        max_files: cli.log_keep,
    })
    .context("Failed to initialize logging")?;

    let filter = Filter::parse(&cli.start_date, &cli.end_date, cli.author, cli.branch)
        .context("Invalid filter")?;

    let analyzer = CommitAnalyzer::open(&cli.repo)
        .context("This command must be run inside a git repository")?;

    let report = analyzer
        .analyze(&filter)
        .context("Failed to analyze repository")?;

    match cli.format {
        OutputFormat::Text => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(report.to_text(cli.width as usize).as_bytes())
                .context("Failed to write report")?;
        }
        OutputFormat::Json => {
            println!("{}", report.to_json().context("Failed to serialize to JSON")?);
        }
        OutputFormat::Csv => {
            report
                .write_daily_csv(std::io::stdout())
                .context("Failed to write CSV records")?;
        }
    }

    Ok(())
}
