//! 分析結果の表現と出力形式を担当するモジュール
//!
//! `Report`は集計結果とグラフ用のバケットをまとめたもので、
//! テキスト、JSON、CSVの各形式に変換できます。いずれの変換も入力のみに依存します。

use super::date::{DateRange, DATE_FORMAT};
use super::graph::{render_graph, DailyBucket};
use super::summary::AuthorSummary;
use serde::Serialize;

const SECTION_RULE: &str = "---------------";

/// 1回の分析の結果
///
/// # フィールド
///
/// - `branch`: 分析したブランチ名
/// - `range`: 対象期間
/// - `author_filter`: 作成者の絞り込み条件（指定された場合）
/// - `authors`: 作成者ごとのコミット数（件数の降順）
/// - `daily`: 期間内の日ごとのコミット数
/// - `total`: 対象コミットの総数
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub branch: String,
    pub range: DateRange,
    pub author_filter: Option<String>,
    pub authors: Vec<AuthorSummary>,
    pub daily: Vec<DailyBucket>,
    pub total: usize,
}

impl Report {
    /// 人が読むためのテキストを生成します
    ///
    /// セクションの順序は見出し、作成者ごとの内訳、グラフ、総数で固定です。
    pub fn to_text(&self, width: usize) -> String {
        let mut lines = vec![
            "Commit Overview".to_string(),
            SECTION_RULE.to_string(),
            format!("Branch: {}", self.branch),
            format!(
                "Period: {} to {}",
                self.range.start().format(DATE_FORMAT),
                self.range.end().format(DATE_FORMAT)
            ),
        ];
        if let Some(author) = &self.author_filter {
            lines.push(format!("Author filter: {}", author));
        }

        lines.push(String::new());
        lines.push("Commits by author:".to_string());
        if self.authors.is_empty() {
            lines.push("  No commits found for the specified period.".to_string());
        }
        for summary in &self.authors {
            lines.push(format!("  {}: {}", summary.author, summary.count));
        }

        lines.push(String::new());
        lines.push("Commit Graph".to_string());
        lines.push(SECTION_RULE.to_string());
        lines.extend(render_graph(&self.daily, width).lines().map(str::to_string));

        lines.push(String::new());
        lines.push(format!("Total commits: {}", self.total));

        let mut text = lines.join("\n");
        text.push('\n');
        text
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// 日ごとのコミット数を`date,count`形式のCSVとして出力します
    pub fn write_daily_csv<W: std::io::Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut wtr = csv::Writer::from_writer(writer);
        for bucket in &self.daily {
            wtr.serialize(bucket)?;
        }
        wtr.flush()?;
        Ok(())
    }
}
