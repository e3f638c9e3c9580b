//! Gitリポジトリとの対話を担当するモジュール
//!
//! このモジュールは、libgit2を使用してGitリポジトリからコミット履歴を取得します。
//! 履歴の取得元は`CommitSource`トレイトとして抽象化されており、
//! 分析パイプラインはlibgit2に直接依存しません。

use super::error::AnalyzerError;
use chrono::{DateTime, FixedOffset, NaiveDate};
use git2::{BranchType, ErrorCode, Oid, Repository};
use std::path::Path;

/// 1つのコミットのメタデータ
///
/// # フィールド
///
/// - `hash`: コミットの完全なオブジェクトID
/// - `author`: コミット作成者の名前
/// - `timestamp`: 作成者のタイムゾーンでの作成日時
/// - `branch`: 履歴を取得したブランチ名
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    pub hash: String,
    pub author: String,
    pub timestamp: DateTime<FixedOffset>,
    pub branch: String,
}

impl CommitRecord {
    /// 作成者のタイムゾーンにおけるコミット日
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }
}

/// コミット履歴の取得元
///
/// ブランチの存在確認は`commits`の呼び出し前に行えるよう、別の操作として定義されています。
pub trait CommitSource {
    /// 現在チェックアウトされているブランチの短縮名（detached HEADの場合は`HEAD`）
    fn current_branch(&self) -> Result<String, AnalyzerError>;

    /// ローカルブランチ名の一覧（昇順）
    fn branch_names(&self) -> Result<Vec<String>, AnalyzerError>;

    fn has_branch(&self, name: &str) -> Result<bool, AnalyzerError>;

    /// 指定されたブランチ（`None`の場合はHEAD）から到達可能な全コミットを返します
    fn commits(&self, branch: Option<&str>) -> Result<Vec<CommitRecord>, AnalyzerError>;
}

/// Gitリポジトリへのアクセスを管理する構造体
pub struct GitRepository {
    repo: Repository,
}

impl GitRepository {
    /// 指定されたパス、またはその親ディレクトリにあるGitリポジトリをオープンします
    ///
    /// # エラー
    ///
    /// リポジトリが見つからない場合は`AnalyzerError::RepositoryAccess`を返します
    pub fn discover(path: impl AsRef<Path>) -> Result<Self, AnalyzerError> {
        let repo = Repository::discover(path)?;
        Ok(Self { repo })
    }

    fn resolve_branch(&self, name: &str) -> Result<Option<Oid>, AnalyzerError> {
        for branch_type in [BranchType::Local, BranchType::Remote] {
            match self.repo.find_branch(name, branch_type) {
                Ok(branch) => {
                    let commit = branch.get().peel_to_commit()?;
                    return Ok(Some(commit.id()));
                }
                // ブランチ名として使えない名前も「存在しない」として扱う
                Err(e) if matches!(e.code(), ErrorCode::NotFound | ErrorCode::InvalidSpec) => {
                    continue
                }
                Err(e) => return Err(e.into()),
            }
        }
        Ok(None)
    }

    /// HEADが指すコミットを返します。コミットが1つもない場合は`None`
    fn head_commit(&self) -> Result<Option<Oid>, AnalyzerError> {
        match self.repo.head() {
            Ok(head) => Ok(Some(head.peel_to_commit()?.id())),
            Err(e) if matches!(e.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) => {
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn to_record(&self, oid: Oid, branch: &str) -> Result<CommitRecord, AnalyzerError> {
        let commit = self.repo.find_commit(oid)?;
        let signature = commit.author();
        let when = signature.when();

        let offset = FixedOffset::east_opt(when.offset_minutes() * 60).ok_or_else(|| {
            AnalyzerError::AnalysisError(format!("Invalid timezone offset in commit {}", oid))
        })?;
        let timestamp = DateTime::from_timestamp(when.seconds(), 0)
            .ok_or_else(|| {
                AnalyzerError::AnalysisError(format!("Invalid commit timestamp in commit {}", oid))
            })?
            .with_timezone(&offset);

        Ok(CommitRecord {
            hash: oid.to_string(),
            author: signature.name().unwrap_or("unknown").to_string(),
            timestamp,
            branch: branch.to_string(),
        })
    }
}

impl CommitSource for GitRepository {
    fn current_branch(&self) -> Result<String, AnalyzerError> {
        match self.repo.head() {
            Ok(head) if head.is_branch() => Ok(head.shorthand().unwrap_or("HEAD").to_string()),
            Ok(_) => Ok("HEAD".to_string()),
            // コミットのないリポジトリでもHEADはブランチを指している
            Err(e) if e.code() == ErrorCode::UnbornBranch => {
                let head = self.repo.find_reference("HEAD")?;
                Ok(head
                    .symbolic_target()
                    .and_then(|target| target.strip_prefix("refs/heads/"))
                    .unwrap_or("HEAD")
                    .to_string())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn branch_names(&self) -> Result<Vec<String>, AnalyzerError> {
        let mut names = Vec::new();
        for branch in self.repo.branches(Some(BranchType::Local))? {
            let (branch, _) = branch?;
            if let Some(name) = branch.name()? {
                names.push(name.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    fn has_branch(&self, name: &str) -> Result<bool, AnalyzerError> {
        Ok(self.resolve_branch(name)?.is_some())
    }

    fn commits(&self, branch: Option<&str>) -> Result<Vec<CommitRecord>, AnalyzerError> {
        let (tip, branch_name) = match branch {
            Some(name) => match self.resolve_branch(name)? {
                Some(tip) => (Some(tip), name.to_string()),
                None => {
                    return Err(AnalyzerError::BranchNotFound {
                        branch: name.to_string(),
                        available: self.branch_names()?,
                    })
                }
            },
            None => (self.head_commit()?, self.current_branch()?),
        };

        let Some(tip) = tip else {
            return Ok(Vec::new());
        };

        let mut revwalk = self.repo.revwalk()?;
        revwalk.push(tip)?;
        revwalk.set_sorting(git2::Sort::TIME)?;

        let mut commits = Vec::new();
        for oid in revwalk {
            commits.push(self.to_record(oid?, &branch_name)?);
        }

        Ok(commits)
    }
}
