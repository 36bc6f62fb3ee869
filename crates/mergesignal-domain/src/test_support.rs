use crate::pull::{PullContext, PullError};

pub fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

/// In-memory pull request with builder-style setters.
#[derive(Clone, Debug, Default)]
pub struct FakePull {
    pub body: String,
    pub comments: Vec<String>,
    pub labels: Vec<String>,
    pub base: String,
    pub head: String,
    pub creator: String,
}

impl FakePull {
    pub fn new() -> Self {
        Self {
            base: "main".to_string(),
            head: "feature".to_string(),
            creator: "octocat".to_string(),
            ..Self::default()
        }
    }

    pub fn with_body(mut self, body: &str) -> Self {
        self.body = body.to_string();
        self
    }

    pub fn with_comments(mut self, comments: &[&str]) -> Self {
        self.comments = strings(comments);
        self
    }

    pub fn with_labels(mut self, labels: &[&str]) -> Self {
        self.labels = strings(labels);
        self
    }

    pub fn with_base(mut self, base: &str) -> Self {
        self.base = base.to_string();
        self
    }

    pub fn with_creator(mut self, creator: &str) -> Self {
        self.creator = creator.to_string();
        self
    }
}

impl PullContext for FakePull {
    fn body(&self) -> &str {
        &self.body
    }

    fn comments(&self) -> Result<Vec<String>, PullError> {
        Ok(self.comments.clone())
    }

    fn labels(&self) -> Result<Vec<String>, PullError> {
        Ok(self.labels.clone())
    }

    fn branches(&self) -> (&str, &str) {
        (&self.base, &self.head)
    }

    fn creator(&self) -> &str {
        &self.creator
    }
}

/// Wraps a [`FakePull`] and fails label or comment listing.
#[derive(Clone, Debug, Default)]
pub struct FailingPull {
    pub inner: FakePull,
    pub labels_error: Option<String>,
    pub comments_error: Option<String>,
}

impl FailingPull {
    pub fn labels(message: &str) -> Self {
        Self {
            inner: FakePull::new(),
            labels_error: Some(message.to_string()),
            comments_error: None,
        }
    }

    pub fn comments(message: &str) -> Self {
        Self {
            inner: FakePull::new(),
            labels_error: None,
            comments_error: Some(message.to_string()),
        }
    }
}

impl PullContext for FailingPull {
    fn body(&self) -> &str {
        self.inner.body()
    }

    fn comments(&self) -> Result<Vec<String>, PullError> {
        match &self.comments_error {
            Some(message) => Err(PullError::new(message.clone())),
            None => self.inner.comments(),
        }
    }

    fn labels(&self) -> Result<Vec<String>, PullError> {
        match &self.labels_error {
            Some(message) => Err(PullError::new(message.clone())),
            None => self.inner.labels(),
        }
    }

    fn branches(&self) -> (&str, &str) {
        self.inner.branches()
    }

    fn creator(&self) -> &str {
        self.inner.creator()
    }
}
