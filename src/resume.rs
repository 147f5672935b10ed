//! Resume data consumed by the HTML generator
//!
//! Field names follow the camelCase JSON shape the surrounding application
//! already produces (`primaryName`, `workExperiences`, ...). The generator only
//! ever borrows this structure.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Skill level used for bar rendering when none is given
pub const DEFAULT_SKILL_LEVEL: u8 = 75;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeData {
    pub primary_name: String,
    /// Professional headline, shown when the header enables titles
    pub title: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    /// Avatar image URL
    pub avatar: Option<String>,
    pub summary: Option<String>,
    pub skills: Vec<Skill>,
    pub work_experiences: Vec<WorkExperience>,
    pub educations: Vec<Education>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skill {
    pub name: String,
    /// Proficiency from 0 to 100
    pub level: Option<u8>,
}

impl Skill {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: None,
        }
    }

    pub fn with_level(mut self, level: u8) -> Self {
        self.level = Some(level);
        self
    }

    /// Level clamped to 100, defaulting to [`DEFAULT_SKILL_LEVEL`]
    pub fn effective_level(&self) -> u8 {
        self.level.unwrap_or(DEFAULT_SKILL_LEVEL).min(100)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkExperience {
    pub title: String,
    pub company: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub location: Option<String>,
    pub responsibilities: Vec<String>,
}

impl WorkExperience {
    /// `start – end`, with an open end shown as "Present"
    pub fn duration(&self) -> Option<String> {
        let start = self.start_date.as_deref().filter(|s| !s.trim().is_empty())?;
        let end = self
            .end_date
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or("Present");
        Some(format!("{} – {}", start, end))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub year: Option<String>,
}

impl ResumeData {
    pub fn new(primary_name: impl Into<String>) -> Self {
        Self {
            primary_name: primary_name.into(),
            ..Self::default()
        }
    }

    /// Non-empty contact fields in display order
    pub fn contact_items(&self) -> Vec<&str> {
        [&self.email, &self.phone, &self.location, &self.website]
            .into_iter()
            .filter_map(|v| v.as_deref())
            .filter(|v| !v.trim().is_empty())
            .collect()
    }

    /// Up to two uppercase initials from the name
    pub fn initials(&self) -> String {
        self.primary_name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }

    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load from a `.json` or `.toml` file, chosen by extension
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::from_toml_str(&content),
            _ => Self::from_json_str(&content),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_camel_case_json() {
        let json = r#"{
            "primaryName": "Ada Lovelace",
            "skills": [{"name": "Math"}],
            "workExperiences": [],
            "educations": []
        }"#;
        let data = ResumeData::from_json_str(json).expect("Should parse");
        assert_eq!(data.primary_name, "Ada Lovelace");
        assert_eq!(data.skills, vec![Skill::new("Math")]);
        assert!(data.work_experiences.is_empty());
    }

    #[test]
    fn test_missing_lists_default_to_empty() {
        let data = ResumeData::from_json_str(r#"{"primaryName": "X"}"#).unwrap();
        assert!(data.skills.is_empty());
        assert!(data.educations.is_empty());
    }

    #[test]
    fn test_duration_variants() {
        let mut job = WorkExperience {
            start_date: Some("2019".into()),
            end_date: Some("2022".into()),
            ..Default::default()
        };
        assert_eq!(job.duration().as_deref(), Some("2019 – 2022"));
        job.end_date = None;
        assert_eq!(job.duration().as_deref(), Some("2019 – Present"));
        job.start_date = None;
        assert_eq!(job.duration(), None);
    }

    #[test]
    fn test_effective_level() {
        assert_eq!(Skill::new("a").effective_level(), DEFAULT_SKILL_LEVEL);
        assert_eq!(Skill::new("a").with_level(140).effective_level(), 100);
        assert_eq!(Skill::new("a").with_level(40).effective_level(), 40);
    }

    #[test]
    fn test_initials() {
        assert_eq!(ResumeData::new("ada king lovelace").initials(), "AK");
        assert_eq!(ResumeData::new("").initials(), "");
    }

    #[test]
    fn test_contact_items_skip_blank() {
        let data = ResumeData {
            email: Some("ada@example.com".into()),
            phone: Some("  ".into()),
            website: Some("ada.dev".into()),
            ..ResumeData::new("Ada")
        };
        assert_eq!(data.contact_items(), vec!["ada@example.com", "ada.dev"]);
    }
}
