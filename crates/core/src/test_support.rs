//! In-memory bug stub shared by the unit tests in this crate.

use crate::bug::BugFields;

#[derive(Debug, Clone)]
pub struct StubBug {
    pub title: String,
    pub description: Option<String>,
    pub priority: String,
    pub status: String,
    pub tags: Vec<String>,
}

impl StubBug {
    pub fn new(title: &str, priority: &str, status: &str) -> Self {
        Self {
            title: title.to_string(),
            description: None,
            priority: priority.to_string(),
            status: status.to_string(),
            tags: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }
}

impl BugFields for StubBug {
    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn priority(&self) -> &str {
        &self.priority
    }

    fn status(&self) -> &str {
        &self.status
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}
