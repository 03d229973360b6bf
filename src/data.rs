//! The portfolio data record
//!
//! Loaded once from the static JSON asset and never mutated afterwards.
//! Profile fields sit at the top level of the document, next to the
//! `skills`, `projects` and `contact` collections.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{Collection, LoadError};

/// Education entry shown in the about section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub school: String,
    pub degree: String,
    pub years: String,
}

/// Who the page is about
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    /// Ordered paragraphs; the first one is the hero blurb
    pub about: Vec<String>,
    pub education: Education,
}

impl Profile {
    /// Paragraph shown under the name in the hero
    pub fn lead(&self) -> Option<&str> {
        self.about.first().map(String::as_str)
    }

    /// Paragraphs shown in the about section (everything after the lead)
    pub fn rest(&self) -> &[String] {
        self.about.get(1..).unwrap_or(&[])
    }
}

/// A titled group of skills, rendered as one card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub skills: Vec<String>,
}

/// A project card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    /// Technology tags, in display order
    pub tech: Vec<String>,
    pub description: String,
    /// Extended text revealed by the disclosure toggle
    pub details: String,
    pub link: String,
}

/// Outbound contact links
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub github: String,
    pub linkedin: String,
    pub email: String,
}

/// The whole static record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioData {
    #[serde(flatten)]
    pub profile: Profile,
    pub skills: Vec<SkillCategory>,
    pub projects: Vec<Project>,
    pub contact: Contact,
}

impl PortfolioData {
    /// Parse and validate a record from the JSON asset body
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let data: PortfolioData = serde_json::from_str(json)?;
        data.validate()?;
        Ok(data)
    }

    /// Check that keyed collections have unique titles
    ///
    /// Cards are keyed by title, so a duplicate would make two entries
    /// indistinguishable to the page.
    pub fn validate(&self) -> Result<(), LoadError> {
        ensure_unique(
            Collection::SkillCategories,
            self.skills.iter().map(|c| c.title.as_str()),
        )?;
        for category in &self.skills {
            ensure_unique(Collection::Skills, category.skills.iter().map(String::as_str))?;
        }
        ensure_unique(
            Collection::Projects,
            self.projects.iter().map(|p| p.title.as_str()),
        )
    }
}

fn ensure_unique<'a>(
    collection: Collection,
    titles: impl Iterator<Item = &'a str>,
) -> Result<(), LoadError> {
    let mut seen = HashSet::new();
    for title in titles {
        if !seen.insert(title) {
            return Err(LoadError::DuplicateTitle {
                collection,
                title: title.to_string(),
            });
        }
    }
    Ok(())
}
