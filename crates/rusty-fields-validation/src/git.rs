//! Git SSH remote validation

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::status::ValidationResult;

static GIT_SSH_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^git@([^:]+):([^/]+)/(.+?)\.git$").unwrap());

/// Parts of a `git@host:user/repo.git` remote
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GitSshRemote {
    pub repo_name: String,
    pub user: String,
    /// Host without its last label: `github` for `github.com`
    pub vendor: String,
    pub vendor_domain: String,
}

impl GitSshRemote {
    /// Split an SSH remote into its parts, `None` when the shape is wrong
    ///
    /// ```
    /// use rusty_fields_validation::GitSshRemote;
    /// let remote = GitSshRemote::parse("git@github.com:rust-lang/regex.git").unwrap();
    /// assert_eq!(remote.user, "rust-lang");
    /// assert_eq!(remote.repo_name, "regex");
    /// assert_eq!(remote.vendor, "github");
    /// ```
    pub fn parse(remote: &str) -> Option<Self> {
        let captures = GIT_SSH_REGEX.captures(remote)?;
        let vendor_domain = captures[1].to_string();
        let vendor = vendor_domain
            .rsplit_once('.')
            .map(|(head, _)| head.to_string())
            .unwrap_or_default();

        Some(Self {
            repo_name: captures[3].to_string(),
            user: captures[2].to_string(),
            vendor,
            vendor_domain,
        })
    }
}

/// Validate a Git SSH remote
///
/// A passing result has an empty message.
pub fn validate_git_ssh(value: &str, title: &str) -> ValidationResult {
    match GitSshRemote::parse(value) {
        Some(_) => ValidationResult::passed(""),
        None => ValidationResult::failure(format!("{} is not a valid git repo", title)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_remote() {
        let remote = GitSshRemote::parse("git@gitlab.example.co:team-a/service.api.git").unwrap();
        assert_eq!(
            remote,
            GitSshRemote {
                repo_name: "service.api".to_string(),
                user: "team-a".to_string(),
                vendor: "gitlab.example".to_string(),
                vendor_domain: "gitlab.example.co".to_string(),
            }
        );
    }

    #[test]
    fn test_vendor_without_dot() {
        let remote = GitSshRemote::parse("git@localhost:me/dotfiles.git").unwrap();
        assert_eq!(remote.vendor, "");
        assert_eq!(remote.vendor_domain, "localhost");
    }

    #[test]
    fn test_validate_git_ssh() {
        let ok = validate_git_ssh("git@github.com:bikirandev/validation.git", "Repository");
        assert!(ok.is_ok());
        assert_eq!(ok.message, "");

        for bad in [
            "https://github.com/rust-lang/regex.git",
            "git@github.com:rust-lang/regex",
            "git@github.com/rust-lang/regex.git",
            "deploy@github.com:rust-lang/regex.git",
        ] {
            assert_eq!(
                validate_git_ssh(bad, "Repository").message,
                "Repository is not a valid git repo",
                "{} should fail",
                bad
            );
        }
    }
}
