//! Identity wrappers and API route construction for repositories and issues.

use url::Url;

use crate::error::BotError;

/// Repository owner wrapper to avoid stringly typed parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
struct RepositoryOwner(String);

impl RepositoryOwner {
    fn new(value: &str, full_name: &str) -> Result<Self, BotError> {
        if value.trim().is_empty() {
            return Err(BotError::InvalidRepository {
                full_name: full_name.to_owned(),
            });
        }
        Ok(Self(value.to_owned()))
    }

    const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Repository name wrapper to prevent parameter mix-ups.
#[derive(Debug, Clone, PartialEq, Eq)]
struct RepositoryName(String);

impl RepositoryName {
    fn new(value: &str, full_name: &str) -> Result<Self, BotError> {
        if value.trim().is_empty() {
            return Err(BotError::InvalidRepository {
                full_name: full_name.to_owned(),
            });
        }
        Ok(Self(value.to_owned()))
    }

    const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Repository identified by owner and name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositorySlug {
    owner: RepositoryOwner,
    name: RepositoryName,
}

impl RepositorySlug {
    /// Parses an `owner/name` full name as found in webhook payloads.
    ///
    /// # Errors
    ///
    /// Returns [`BotError::InvalidRepository`] when the value does not have
    /// exactly two non-empty segments.
    pub fn parse(full_name: &str) -> Result<Self, BotError> {
        let invalid = || BotError::InvalidRepository {
            full_name: full_name.to_owned(),
        };
        let (owner, name) = full_name.split_once('/').ok_or_else(invalid)?;
        if name.contains('/') {
            return Err(invalid());
        }

        Ok(Self {
            owner: RepositoryOwner::new(owner, full_name)?,
            name: RepositoryName::new(name, full_name)?,
        })
    }

    /// `owner/name` form.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner.as_str(), self.name.as_str())
    }

    /// Builds `/repos/<owner>/<name>/<segments...>` with every segment
    /// percent-encoded on its own, so values containing `/` or spaces stay a
    /// single path segment.
    pub(crate) fn route(&self, segments: &[&str]) -> String {
        // The base only anchors the path builder; the host never leaves here.
        let Ok(mut url) = Url::parse("https://api.invalid") else {
            return String::new();
        };
        if let Ok(mut path) = url.path_segments_mut() {
            path.clear()
                .push("repos")
                .push(self.owner.as_str())
                .push(self.name.as_str())
                .extend(segments);
        }
        url.path().to_owned()
    }

    pub(crate) fn labels_path(&self) -> String {
        self.route(&["labels"])
    }

    pub(crate) fn comment_reactions_path(&self, comment_id: u64) -> String {
        let id = comment_id.to_string();
        self.route(&["issues", "comments", id.as_str(), "reactions"])
    }

    pub(crate) fn check_runs_path(&self, head_sha: &str) -> String {
        self.route(&["commits", head_sha, "check-runs"])
    }

    pub(crate) fn rerun_job_path(&self, job_id: u64) -> String {
        let id = job_id.to_string();
        self.route(&["actions", "jobs", id.as_str(), "rerun"])
    }
}

/// Issue (or pull request) number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IssueNumber(u64);

impl IssueNumber {
    /// Validates that the number is positive.
    ///
    /// # Errors
    ///
    /// Returns [`BotError::InvalidIssueNumber`] for zero.
    pub const fn new(value: u64) -> Result<Self, BotError> {
        if value == 0 {
            return Err(BotError::InvalidIssueNumber);
        }
        Ok(Self(value))
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// An issue within a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueLocator {
    repository: RepositorySlug,
    number: IssueNumber,
}

impl IssueLocator {
    /// Creates a locator from an already validated repository and number.
    #[must_use]
    pub const fn new(repository: RepositorySlug, number: IssueNumber) -> Self {
        Self { repository, number }
    }

    /// Parses the repository full name and validates the issue number.
    ///
    /// # Errors
    ///
    /// Returns [`BotError::InvalidRepository`] or
    /// [`BotError::InvalidIssueNumber`] when either part is malformed.
    pub fn from_parts(full_name: &str, number: u64) -> Result<Self, BotError> {
        Ok(Self::new(
            RepositorySlug::parse(full_name)?,
            IssueNumber::new(number)?,
        ))
    }

    /// Repository the issue lives in.
    #[must_use]
    pub const fn repository(&self) -> &RepositorySlug {
        &self.repository
    }

    /// Issue number.
    #[must_use]
    pub const fn number(&self) -> IssueNumber {
        self.number
    }

    fn issue_route(&self, segments: &[&str]) -> String {
        let number = self.number.get().to_string();
        let mut all = vec!["issues", number.as_str()];
        all.extend_from_slice(segments);
        self.repository.route(&all)
    }

    pub(crate) fn assignees_path(&self) -> String {
        self.issue_route(&["assignees"])
    }

    pub(crate) fn labels_path(&self) -> String {
        self.issue_route(&["labels"])
    }

    pub(crate) fn label_path(&self, label: &str) -> String {
        self.issue_route(&["labels", label])
    }

    pub(crate) fn comments_path(&self) -> String {
        self.issue_route(&["comments"])
    }

    pub(crate) fn pull_request_path(&self) -> String {
        let number = self.number.get().to_string();
        self.repository.route(&["pulls", number.as_str()])
    }
}

/// Personal access token wrapper enforcing presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalAccessToken(String);

impl PersonalAccessToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns `BotError::MissingToken` when the supplied string is blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, BotError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(BotError::MissingToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PersonalAccessToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}
