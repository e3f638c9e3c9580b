//! 日付の解析と期間の検証を担当するモジュール
//!
//! コマンドラインで受け取る`dd-mm-yyyy`形式の日付は、ここで一度だけ検証されます。
//! 以降の処理は検証済みの`DateRange`のみを扱います。

use super::error::AnalyzerError;
use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// 表示およびコマンドライン入力に使う日付フォーマット
pub const DATE_FORMAT: &str = "%d-%m-%Y";

fn date_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\d{2}-\d{2}-\d{4}$").expect("valid date pattern"))
}

/// `dd-mm-yyyy`形式の文字列を日付に変換します
///
/// # エラー
///
/// 形式が一致しない場合、または存在しない日付の場合は
/// `AnalyzerError::InvalidDateRange`を返します
pub fn parse_date(input: &str) -> Result<NaiveDate, AnalyzerError> {
    let trimmed = input.trim();
    if !date_pattern().is_match(trimmed) {
        return Err(AnalyzerError::InvalidDateRange(format!(
            "'{}' is not a date in dd-mm-yyyy format",
            input
        )));
    }

    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|e| {
        AnalyzerError::InvalidDateRange(format!("'{}' is not a valid date: {}", input, e))
    })
}

/// 両端を含む日付の期間
///
/// # フィールド
///
/// - `start`: 期間の開始日
/// - `end`: 期間の終了日（`start`以降であることが保証される）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// 開始日が終了日より後の場合はエラーを返します
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, AnalyzerError> {
        if start > end {
            return Err(AnalyzerError::InvalidDateRange(format!(
                "start date {} is after end date {}",
                start.format(DATE_FORMAT),
                end.format(DATE_FORMAT)
            )));
        }
        Ok(Self { start, end })
    }

    /// 2つの`dd-mm-yyyy`文字列から期間を構築します
    pub fn parse(start: &str, end: &str) -> Result<Self, AnalyzerError> {
        Self::new(parse_date(start)?, parse_date(end)?)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// 期間に含まれる日数
    pub fn num_days(&self) -> usize {
        (self.end - self.start).num_days() as usize + 1
    }

    /// 期間内の各日を昇順に返します
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }
}
