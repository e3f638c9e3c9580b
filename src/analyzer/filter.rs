//! コミットの絞り込み条件を扱うモジュール

use super::date::DateRange;
use super::error::AnalyzerError;
use super::git::CommitRecord;

/// コミットの絞り込み条件
///
/// すべての条件は論理積として評価されます。
///
/// # フィールド
///
/// - `range`: 対象期間（日付のみで比較し、時刻は無視する）
/// - `author`: 作成者名に含まれるべき文字列（大文字小文字を区別しない）
/// - `branch`: 分析対象のブランチ（履歴の取得時に適用される）
#[derive(Debug, Clone)]
pub struct Filter {
    range: DateRange,
    author: Option<String>,
    author_needle: Option<String>,
    branch: Option<String>,
}

impl Filter {
    pub fn new(range: DateRange, author: Option<String>, branch: Option<String>) -> Self {
        let author_needle = author.as_ref().map(|a| a.to_lowercase());
        Self {
            range,
            author,
            author_needle,
            branch,
        }
    }

    /// コマンドラインの`dd-mm-yyyy`文字列から条件を構築します
    ///
    /// # エラー
    ///
    /// 日付が解析できない場合、または開始日が終了日より後の場合は
    /// `AnalyzerError::InvalidDateRange`を返します
    pub fn parse(
        start_date: &str,
        end_date: &str,
        author: Option<String>,
        branch: Option<String>,
    ) -> Result<Self, AnalyzerError> {
        Ok(Self::new(DateRange::parse(start_date, end_date)?, author, branch))
    }

    pub fn range(&self) -> &DateRange {
        &self.range
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn branch(&self) -> Option<&str> {
        self.branch.as_deref()
    }

    pub fn matches(&self, record: &CommitRecord) -> bool {
        if !self.range.contains(record.date()) {
            return false;
        }

        match &self.author_needle {
            Some(needle) => record.author.to_lowercase().contains(needle.as_str()),
            None => true,
        }
    }

    /// 条件を満たすコミットのみを元の順序のまま返します
    pub fn apply(&self, records: Vec<CommitRecord>) -> Vec<CommitRecord> {
        records.into_iter().filter(|r| self.matches(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, FixedOffset};

    fn record(author: &str, timestamp: &str) -> CommitRecord {
        CommitRecord {
            hash: format!("{}-{}", author, timestamp),
            author: author.to_string(),
            timestamp: DateTime::<FixedOffset>::parse_from_rfc3339(timestamp).unwrap(),
            branch: "main".to_string(),
        }
    }

    fn april_filter(author: Option<&str>) -> Filter {
        Filter::parse(
            "01-04-2025",
            "03-04-2025",
            author.map(str::to_string),
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_date_bounds_are_inclusive_and_ignore_time_of_day() {
        let filter = april_filter(None);

        assert!(filter.matches(&record("Alice", "2025-04-01T00:00:00+00:00")));
        assert!(filter.matches(&record("Alice", "2025-04-03T23:59:59+00:00")));
        assert!(!filter.matches(&record("Alice", "2025-03-31T23:59:59+00:00")));
        assert!(!filter.matches(&record("Alice", "2025-04-04T00:00:00+00:00")));
    }

    #[test]
    fn test_author_is_case_insensitive_substring() {
        let filter = april_filter(Some("ali"));

        assert!(filter.matches(&record("Alice Smith", "2025-04-02T10:00:00+00:00")));
        assert!(filter.matches(&record("MALIK", "2025-04-02T10:00:00+00:00")));
        assert!(!filter.matches(&record("Bob", "2025-04-02T10:00:00+00:00")));
    }

    #[test]
    fn test_predicates_are_combined() {
        let filter = april_filter(Some("alice"));

        // 作成者は一致するが期間外
        assert!(!filter.matches(&record("Alice", "2025-05-01T10:00:00+00:00")));
    }

    #[test]
    fn test_apply_keeps_order_and_allows_empty_result() {
        let filter = april_filter(None);
        let records = vec![
            record("Bob", "2025-04-03T10:00:00+00:00"),
            record("Alice", "2025-03-01T10:00:00+00:00"),
            record("Alice", "2025-04-01T10:00:00+00:00"),
        ];

        let filtered = filter.apply(records);
        let authors: Vec<_> = filtered.iter().map(|r| r.author.as_str()).collect();
        assert_eq!(authors, vec!["Bob", "Alice"]);

        let nobody = april_filter(Some("carol"));
        assert!(nobody.apply(filtered).is_empty());
    }

    #[test]
    fn test_parse_rejects_reversed_range() {
        let result = Filter::parse("03-04-2025", "01-04-2025", None, None);
        assert!(matches!(result, Err(AnalyzerError::InvalidDateRange(_))));
    }
}
