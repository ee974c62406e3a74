//! Resume record model produced by the pipeline.
//!
//! Field names serialize exactly as the public record schema expects
//! (`techStack`, `resumeUrl`). Deserialization is strict: every field must be
//! present, so a model payload that drops a key is rejected rather than
//! silently defaulted. Icons are the exception; enrichment assigns them.

use serde::{Deserialize, Serialize};

/// A structured profile extracted from one resume document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeRecord {
    /// URL-safe identifier derived from `name`.
    pub slug: String,

    pub name: String,

    /// Headline / current role.
    pub title: String,

    pub location: String,

    /// Short profile summary.
    pub description: String,

    pub contact: Contact,

    /// Skills grouped into named categories.
    pub skills: Vec<SkillCategory>,

    pub experience: Vec<Experience>,

    pub projects: Vec<Project>,

    pub education: Vec<Education>,

    pub resume: ResumeLink,
}

/// Contact channels. Unknown values are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    pub telegram: String,
    pub linkedin: String,
    pub github: String,
}

/// A named group of skills, e.g. "Databases".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub list: Vec<Skill>,
}

/// A single skill with its icon asset (empty when unmapped).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    #[serde(default)]
    pub icon: String,
}

impl Skill {
    /// Skill without an icon.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: String::new(),
        }
    }
}

/// One employment entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub location: String,
    pub role: String,
    pub period: String,
    pub description: String,
    pub achievements: Vec<String>,
}

/// A project entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    #[serde(rename = "techStack")]
    pub tech_stack: Vec<String>,
    pub url: String,
}

/// An education entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    #[serde(default)]
    pub icon: String,
    pub name: String,
    pub degree: String,
    pub field: String,
    pub years: String,
}

/// Location of the stored source document.
///
/// Left empty by the pipeline; the storing caller fills it in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeLink {
    #[serde(rename = "resumeUrl")]
    pub resume_url: String,
}

impl ResumeRecord {
    /// Create an all-default record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the storage location of the source document.
    pub fn with_resume_url(mut self, url: impl Into<String>) -> Self {
        self.resume.resume_url = url.into();
        self
    }

    /// Names of the list-valued sections that hold no entries.
    pub fn empty_sections(&self) -> Vec<&'static str> {
        let mut empty = Vec::new();
        if self.skills.is_empty() {
            empty.push("skills");
        }
        if self.experience.is_empty() {
            empty.push("experience");
        }
        if self.projects.is_empty() {
            empty.push("projects");
        }
        if self.education.is_empty() {
            empty.push("education");
        }
        empty
    }

    /// Total number of individual skills across all categories.
    pub fn skill_count(&self) -> usize {
        self.skills.iter().map(|c| c.list.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_default_record_serializes_every_key() {
        let value = serde_json::to_value(ResumeRecord::new()).unwrap();
        let object = value.as_object().unwrap();

        for key in [
            "slug",
            "name",
            "title",
            "location",
            "description",
            "contact",
            "skills",
            "experience",
            "projects",
            "education",
            "resume",
        ] {
            assert!(object.contains_key(key), "missing {}", key);
        }
        assert_eq!(value["contact"], json!({"email": "", "telegram": "", "linkedin": "", "github": ""}));
        assert_eq!(value["resume"], json!({"resumeUrl": ""}));
    }

    #[test]
    fn test_camel_case_field_names() {
        let project = Project {
            name: "vitae".to_string(),
            tech_stack: vec!["Rust".to_string()],
            ..Project::default()
        };
        let value = serde_json::to_value(project).unwrap();
        assert_eq!(value["techStack"], json!(["Rust"]));
        assert!(value.get("tech_stack").is_none());
    }

    #[test]
    fn test_deserialize_rejects_missing_key() {
        let payload = json!({
            "name": "Jane Doe",
            "description": "",
            "location": "",
            "title": "",
            "contact": {"email": "", "telegram": "", "linkedin": "", "github": ""},
            "skills": [],
            "experience": [],
            "projects": [],
            "education": [],
            "resume": {"resumeUrl": ""}
        });
        let err = serde_json::from_value::<ResumeRecord>(payload).unwrap_err();
        assert!(err.to_string().contains("slug"));
    }

    #[test]
    fn test_missing_icons_default_to_empty() {
        let skill: Skill = serde_json::from_value(json!({"name": "Python"})).unwrap();
        assert_eq!(skill, Skill::named("Python"));

        let education: Education = serde_json::from_value(json!({
            "name": "MIREA", "degree": "BSc", "field": "CS", "years": "2014 - 2018"
        }))
        .unwrap();
        assert_eq!(education.icon, "");

        assert!(serde_json::from_value::<Skill>(json!({"icon": "x.svg"})).is_err());
    }

    #[test]
    fn test_empty_sections() {
        let mut record = ResumeRecord::new();
        assert_eq!(
            record.empty_sections(),
            vec!["skills", "experience", "projects", "education"]
        );

        record.skills.push(SkillCategory {
            title: "Languages".to_string(),
            list: vec![Skill::named("Rust"), Skill::named("Go")],
        });
        assert_eq!(record.empty_sections(), vec!["experience", "projects", "education"]);
        assert_eq!(record.skill_count(), 2);
    }

    #[test]
    fn test_with_resume_url() {
        let record = ResumeRecord::new().with_resume_url("/uploads/42.pdf");
        assert_eq!(record.resume.resume_url, "/uploads/42.pdf");
    }
}
