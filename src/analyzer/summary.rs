//! 作成者ごとのコミット数の集計

use super::git::CommitRecord;
use serde::Serialize;
use std::collections::HashMap;

/// 作成者ごとのコミット数
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorSummary {
    pub author: String,
    pub count: usize,
}

impl AuthorSummary {
    pub fn new(author: impl Into<String>, count: usize) -> Self {
        Self {
            author: author.into(),
            count,
        }
    }
}

/// コミットを作成者名の完全一致でグループ化し、件数の多い順に並べます
///
/// 件数が同じ場合は作成者名の昇順になります。
pub fn summarize_authors(records: &[CommitRecord]) -> Vec<AuthorSummary> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in records {
        *counts.entry(record.author.as_str()).or_insert(0) += 1;
    }

    let mut summaries: Vec<AuthorSummary> = counts
        .into_iter()
        .map(|(author, count)| AuthorSummary::new(author, count))
        .collect();
    summaries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.author.cmp(&b.author)));
    summaries
}
