//! 日ごとのコミット数の集計とASCIIグラフの描画を担当するモジュール
//!
//! 期間内のすべての日についてバケットを作成するため、
//! コミットのない日もグラフ上に空の行として表示されます。

use super::date::{DateRange, DATE_FORMAT};
use super::git::CommitRecord;
use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::Serialize;

/// グラフのバーに使う文字
const BAR_CHAR: char = '#';

/// 1日分のコミット数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyBucket {
    pub date: NaiveDate,
    pub count: usize,
}

/// 期間内の各日についてコミット数を数えます
///
/// # 戻り値
///
/// 開始日から終了日まで1日ずつ連続した`DailyBucket`のベクター。
/// 期間外のコミットは無視されます。
pub fn daily_buckets(records: &[CommitRecord], range: &DateRange) -> Vec<DailyBucket> {
    let mut counts: IndexMap<NaiveDate, usize> = range.days().map(|day| (day, 0)).collect();

    for record in records {
        if let Some(count) = counts.get_mut(&record.date()) {
            *count += 1;
        }
    }

    counts
        .into_iter()
        .map(|(date, count)| DailyBucket { date, count })
        .collect()
}

/// 最大件数を`width`としたときのバーの長さ
///
/// 1件以上の日は必ず1文字以上になるよう切り上げます。
fn bar_length(count: usize, max: usize, width: usize) -> usize {
    if count == 0 || max == 0 {
        return 0;
    }
    (count * width).div_ceil(max)
}

/// バケットを1日1行の横棒グラフとして描画します
///
/// 出力は入力のみに依存し、同じバケットからは常に同じ文字列が得られます。
pub fn render_graph(buckets: &[DailyBucket], width: usize) -> String {
    let max = buckets.iter().map(|b| b.count).max().unwrap_or(0);

    let mut graph = String::new();
    for bucket in buckets {
        let bar: String = std::iter::repeat(BAR_CHAR)
            .take(bar_length(bucket.count, max, width))
            .collect();
        graph.push_str(&format!(
            "{} | {:<width$} | {}\n",
            bucket.date.format(DATE_FORMAT),
            bar,
            bucket.count,
            width = width
        ));
    }
    graph
}
