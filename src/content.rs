use rust_embed::Embed;
use serde::Deserialize;
use std::sync::LazyLock;
use thiserror::Error;

use crate::projects::Project;

const PORTFOLIO_FILE: &str = "portfolio.json";

static PORTFOLIO: LazyLock<Portfolio> =
    LazyLock::new(|| load_portfolio().expect("embedded portfolio content should parse"));

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("content file not found: {0}")]
    NotFound(String),
    #[error("couldn't parse content: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Contact {
    pub location: String,
    pub phone: String,
    pub email: String,
    pub portfolio: String,
    pub github: String,
    pub linkedin: String,
}

impl Contact {
    pub fn github_url(&self) -> String {
        format!("https://{}", self.github)
    }

    pub fn linkedin_url(&self) -> String {
        format!("https://{}", self.linkedin)
    }

    pub fn portfolio_url(&self) -> String {
        format!("https://{}", self.portfolio)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub period: String,
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Language {
    pub name: String,
    pub proficiency: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CoreSkills {
    pub languages: Vec<String>,
    pub frameworks: Vec<String>,
    pub infrastructure: Vec<String>,
    pub specialties: Vec<String>,
}

impl CoreSkills {
    /// Skill groups with their display headings.
    pub fn groups(&self) -> [(&'static str, &[String]); 4] {
        [
            ("Languages", self.languages.as_slice()),
            ("Frameworks & Data", self.frameworks.as_slice()),
            ("Infrastructure", self.infrastructure.as_slice()),
            ("Specialties", self.specialties.as_slice()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub period: String,
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Certification {
    pub name: String,
    pub institution: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub name: String,
    pub handle: String,
    pub headline: String,
    pub roles: Vec<String>,
    pub bio: Vec<String>,
    pub contact: Contact,
    pub education: Vec<Education>,
    pub languages: Vec<Language>,
    pub core_skills: CoreSkills,
    pub professional_experience: Vec<Experience>,
    #[serde(rename = "selectedProjects")]
    pub projects: Vec<Project>,
    pub certifications: Vec<Certification>,
}

pub fn load_portfolio() -> Result<Portfolio, ContentError> {
    let file = Assets::get(PORTFOLIO_FILE)
        .ok_or_else(|| ContentError::NotFound(PORTFOLIO_FILE.to_string()))?;
    Ok(serde_json::from_slice(&file.data)?)
}

/// Site content, parsed once from the embedded asset.
pub fn portfolio() -> &'static Portfolio {
    &PORTFOLIO
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projects::all_tags;

    #[test]
    fn test_embedded_content_parses() {
        let portfolio = load_portfolio().expect("content should parse");
        assert_eq!(portfolio.name, "Asaad F. Rasul");
        assert!(!portfolio.roles.is_empty());
        assert_eq!(portfolio.projects.len(), 5);
        assert_eq!(portfolio.professional_experience.len(), 3);
        assert_eq!(portfolio.education.len(), 2);
        assert_eq!(portfolio.certifications.len(), 2);
    }

    #[test]
    fn test_project_tags_in_first_seen_order() {
        let tags = all_tags(&portfolio().projects);
        assert_eq!(&tags[..3], &["Java", "Spring Boot", "Backend"]);
        assert!(tags.contains(&"Bots".to_string()));
        assert!(tags.contains(&"Python".to_string()));
    }

    #[test]
    fn test_contact_urls() {
        let contact = &portfolio().contact;
        assert_eq!(contact.github_url(), "https://github.com/sn0wqt");
        assert!(contact.linkedin_url().starts_with("https://linkedin.com/"));
    }

    #[test]
    fn test_skill_groups() {
        let groups = portfolio().core_skills.groups();
        assert_eq!(groups[0].0, "Languages");
        assert!(groups.iter().all(|(_, skills)| !skills.is_empty()));
    }
}
