use std::collections::HashSet;

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub github_url: String,
    pub live_url: String,
}

impl Project {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Selected project filter. Lives for one page session and is never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum TagFilter {
    #[default]
    All,
    Tag(String),
}

impl TagFilter {
    pub fn label(&self) -> &str {
        match self {
            Self::All => "All",
            Self::Tag(t) => t,
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Tag(t) => project.has_tag(t),
        }
    }
}

/// Projects visible under `filter`, in the order they were given.
pub fn filter_projects<'a>(projects: &'a [Project], filter: &TagFilter) -> Vec<&'a Project> {
    projects.iter().filter(|p| filter.matches(p)).collect()
}

/// Every distinct tag in first-seen order.
pub fn all_tags(projects: &[Project]) -> Vec<String> {
    let mut seen = HashSet::new();
    projects
        .iter()
        .flat_map(|p| p.tags.iter())
        .filter(|t| seen.insert(t.as_str()))
        .cloned()
        .collect()
}
