//! Gitリポジトリのコミット履歴を集計するツール
//!
//! このクレートは、指定された期間のコミット履歴を作成者やブランチで絞り込み、
//! 作成者ごとのコミット数と日ごとのコミット数のASCIIグラフを出力する機能を提供します。
//!
//! # 主な機能
//!
//! - ブランチごとのコミット履歴の取得
//! - 期間と作成者による絞り込み
//! - 作成者ごとのコミット数の集計
//! - 日ごとのコミット数のグラフ化
//!
//! # 使用例
//!
//! ```no_run
//! use commit_overview::{CommitAnalyzer, Filter};
//!
//! let filter = Filter::parse("01-04-2025", "30-04-2025", None, None).unwrap();
//! let analyzer = CommitAnalyzer::open("path/to/repo").unwrap();
//!
//! let report = analyzer.analyze(&filter).unwrap();
//! print!("{}", report.to_text(50));
//! ```

pub mod analyzer;
pub mod logging;
pub use analyzer::{AnalyzerError, CommitAnalyzer, Filter, Report};
