use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("Invalid date range: {0}")]
    InvalidDateRange(String),

    #[error("Branch '{branch}' does not exist{}", available_hint(.available))]
    BranchNotFound {
        branch: String,
        available: Vec<String>,
    },

    #[error("Cannot access git repository: {0}")]
    RepositoryAccess(#[from] git2::Error),

    #[error("Analysis error: {0}")]
    AnalysisError(String),
}

fn available_hint(available: &[String]) -> String {
    if available.is_empty() {
        String::new()
    } else {
        format!(" (available branches: {})", available.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branch_not_found_lists_available_branches() {
        let err = AnalyzerError::BranchNotFound {
            branch: "nonexistent".to_string(),
            available: vec!["develop".to_string(), "main".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Branch 'nonexistent' does not exist (available branches: develop, main)"
        );

        let err = AnalyzerError::BranchNotFound {
            branch: "nonexistent".to_string(),
            available: Vec::new(),
        };
        assert_eq!(err.to_string(), "Branch 'nonexistent' does not exist");
    }
}
