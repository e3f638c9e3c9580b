//! ログ出力の初期化を担当するモジュール
//!
//! コンソール（標準エラー出力、端末の場合は色付き）へ、ログディレクトリが指定された場合は
//! 日付ごとにローテーションされるファイルへも出力します。
//! 標準出力はレポート専用です。

use anyhow::Context;
use clap::ValueEnum;
use std::io::IsTerminal;
use std::path::Path;
use tracing::level_filters::LevelFilter;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// ログファイル名の接頭辞（`commit-overview.YYYY-MM-DD.log`）
const LOG_FILE_PREFIX: &str = "commit-overview";

/// ログレベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    /// `tracing`のレベルへの対応付け（`Critical`は`ERROR`として扱う）
    pub fn as_filter(self) -> LevelFilter {
        match self {
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warning => LevelFilter::WARN,
            LogLevel::Error | LogLevel::Critical => LevelFilter::ERROR,
        }
    }
}

/// ログ出力の設定
///
/// # フィールド
///
/// - `level`: 出力する最低レベル（環境変数`RUST_LOG`が優先される）
/// - `log_dir`: ログファイルの出力先（`None`の場合はファイルに出力しない）
/// - `max_files`: 保持するログファイルの最大数
#[derive(Debug, Clone)]
pub struct LogConfig<'a> {
    pub level: LogLevel,
    pub log_dir: Option<&'a Path>,
    pub max_files: usize,
}

/// 日付ごとにローテーションするファイル出力を作成します
pub fn daily_file_appender(
    log_dir: &Path,
    max_files: usize,
) -> anyhow::Result<RollingFileAppender> {
    std::fs::create_dir_all(log_dir)?;
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix("log")
        .max_log_files(max_files.max(1))
        .build(log_dir)?;
    Ok(appender)
}

/// グローバルなロガーを初期化します
///
/// 既にグローバルなロガーが設定されている場合はエラーを返します。
pub fn init(config: &LogConfig<'_>) -> anyhow::Result<()> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(config.level.as_filter().into())
        .from_env_lossy();

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal());

    let file_layer = match config.log_dir {
        Some(dir) => Some(
            fmt::layer()
                .with_writer(daily_file_appender(dir, config.max_files)?)
                .with_ansi(false),
        ),
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to install log subscriber")?;

    Ok(())
}
