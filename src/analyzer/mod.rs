//! コミット履歴分析の中核となるモジュール
//!
//! 分析は以下の流れで行われる一方向のパイプラインです：
//!
//! 1. 絞り込み条件の検証（`Filter`）
//! 2. ブランチの存在確認とコミット履歴の取得（`CommitSource`）
//! 3. 期間と作成者による絞り込み
//! 4. 作成者ごとの集計と日ごとのバケット作成
//! 5. `Report`の組み立て
//!
//! 途中でエラーが発生した場合はその時点で終了し、部分的な結果は返しません。
//!
//! # 主要なコンポーネント
//!
//! - `CommitAnalyzer`: パイプライン全体を制御する構造体
//! - `GitRepository`: libgit2による`CommitSource`の実装
//! - `Report`: 分析結果

mod date;
mod error;
mod filter;
mod git;
mod graph;
mod report;
mod summary;

pub use date::{parse_date, DateRange, DATE_FORMAT};
pub use error::AnalyzerError;
pub use filter::Filter;
pub use git::{CommitRecord, CommitSource, GitRepository};
pub use graph::{daily_buckets, render_graph, DailyBucket};
pub use report::Report;
pub use summary::{summarize_authors, AuthorSummary};

use tracing::{debug, info};

/// コミット履歴の分析を実行するメインの構造体
///
/// # フィールド
///
/// - `source`: コミット履歴の取得元
pub struct CommitAnalyzer<S> {
    source: S,
}

impl CommitAnalyzer<GitRepository> {
    /// 指定されたパスを含むGitリポジトリを分析対象とします
    ///
    /// # エラー
    ///
    /// Gitリポジトリが見つからない場合は`AnalyzerError::RepositoryAccess`を返します
    pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self, AnalyzerError> {
        Ok(Self::new(GitRepository::discover(path)?))
    }
}

impl<S: CommitSource> CommitAnalyzer<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// 絞り込み条件に従ってコミット履歴を分析します
    ///
    /// # エラー
    ///
    /// 以下の場合にエラーを返します：
    /// - 指定されたブランチが存在しない（履歴の取得前に確認される）
    /// - コミット履歴の取得に失敗
    pub fn analyze(&self, filter: &Filter) -> Result<Report, AnalyzerError> {
        let branch = match filter.branch() {
            Some(name) => {
                if !self.source.has_branch(name)? {
                    return Err(AnalyzerError::BranchNotFound {
                        branch: name.to_string(),
                        available: self.source.branch_names()?,
                    });
                }
                name.to_string()
            }
            None => self.source.current_branch()?,
        };

        let commits = self.source.commits(filter.branch())?;
        debug!(branch = %branch, commits = commits.len(), "extracted commit history");

        let filtered = filter.apply(commits);
        debug!(matched = filtered.len(), "applied commit filter");

        let authors = summarize_authors(&filtered);
        let daily = daily_buckets(&filtered, filter.range());
        let total = filtered.len();

        debug_assert_eq!(authors.iter().map(|a| a.count).sum::<usize>(), total);

        info!(
            branch = %branch,
            total,
            authors = authors.len(),
            "commit overview generated"
        );

        Ok(Report {
            branch,
            range: *filter.range(),
            author_filter: filter.author().map(str::to_string),
            authors,
            daily,
            total,
        })
    }
}
