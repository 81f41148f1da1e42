//! Profile record types.
//!
//! Top-level sections are `Option`s so the record remembers which keys it
//! carries: `help` and the welcome banner list exactly the present keys.
//! Readers that only care about content treat an absent section as empty.

use serde::{Deserialize, Serialize};

use termfolio_types::error::Result;

use crate::shape::{flat_list, null_as_empty};

/// Section keys in canonical record order.
pub const SECTION_KEYS: [&str; 8] = [
    "name",
    "about",
    "contact",
    "education",
    "experience",
    "projects",
    "skills",
    "export",
];

/// The profile record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "flat_list")]
    pub education: Option<Vec<Education>>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "flat_list")]
    pub experience: Option<Vec<Experience>>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "flat_list")]
    pub projects: Option<Vec<Project>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Skills>,
    /// Marker key advertising the `export` command. The live store always
    /// sets it; exported snapshots never carry it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export: Option<String>,
}

/// Contact details. `linkedIn` is also accepted as `linkedin`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(
        rename = "linkedIn",
        alias = "linkedin",
        skip_serializing_if = "Option::is_none"
    )]
    pub linked_in: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

/// One education entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    #[serde(deserialize_with = "null_as_empty")]
    pub degree: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub college: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub year: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
}

/// One work experience entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    #[serde(deserialize_with = "null_as_empty")]
    pub role: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub company: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub duration: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// One project entry. `tools` is a comma-joined list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    #[serde(deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// A skill group; each field is a comma-joined list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillGroup {
    #[serde(deserialize_with = "null_as_empty")]
    pub languages: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub frameworks: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub tools: String,
}

impl SkillGroup {
    /// Whether every field is blank.
    pub fn is_empty(&self) -> bool {
        self.languages.trim().is_empty()
            && self.frameworks.trim().is_empty()
            && self.tools.trim().is_empty()
    }
}

/// Every accepted shape of the `skills` section.
///
/// Variant order matters for untagged deserialization: strings, then string
/// lists, then group lists, then the legacy `{ "skills": … }` wrapper, and
/// finally a bare group object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Skills {
    /// Free text, rendered verbatim.
    Text(String),
    /// Pre-rendered lines; `|` separates parts within one line.
    Lines(Vec<String>),
    /// Several skill groups.
    Groups(Vec<SkillGroup>),
    /// Legacy wrapper around another skills value.
    Nested { skills: Box<Skills> },
    /// A single skill group.
    Group(SkillGroup),
}

impl Skills {
    /// Unwrap legacy `{ "skills": … }` wrappers.
    pub fn normalized(self) -> Self {
        match self {
            Skills::Nested { skills } => skills.normalized(),
            other => other,
        }
    }
}

/// Return the value when it is present and not blank.
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

impl Profile {
    /// Parse a record from JSON and normalize it.
    pub fn from_json(text: &str) -> Result<Self> {
        let profile: Self = serde_json::from_str(text)?;
        Ok(profile.normalized())
    }

    /// Parse a record from TOML and normalize it.
    pub fn from_toml(text: &str) -> Result<Self> {
        let profile: Self = toml::from_str(text)?;
        Ok(profile.normalized())
    }

    /// Compact JSON for persistence.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Bring the record into canonical shape. List sections are already flat
    /// after deserialization; this unwraps nested skills. Idempotent.
    pub fn normalized(mut self) -> Self {
        self.skills = self.skills.map(Skills::normalized);
        self
    }

    /// A frozen copy for embedding in an exported bundle: every content
    /// section present (defaulted when absent), no `export` marker.
    pub fn snapshot(&self) -> Self {
        let p = self.clone().normalized();
        Self {
            name: Some(p.name.unwrap_or_default()),
            about: Some(p.about.unwrap_or_default()),
            contact: Some(p.contact.unwrap_or_default()),
            education: Some(p.education.unwrap_or_default()),
            experience: Some(p.experience.unwrap_or_default()),
            projects: Some(p.projects.unwrap_or_default()),
            skills: Some(p.skills.unwrap_or(Skills::Lines(Vec::new()))),
            export: None,
        }
    }

    /// Keys present in this record, in canonical order.
    pub fn keys(&self) -> Vec<&'static str> {
        let flags = [
            self.name.is_some(),
            self.about.is_some(),
            self.contact.is_some(),
            self.education.is_some(),
            self.experience.is_some(),
            self.projects.is_some(),
            self.skills.is_some(),
            self.export.is_some(),
        ];
        SECTION_KEYS
            .iter()
            .zip(flags)
            .filter_map(|(key, set)| set.then_some(*key))
            .collect()
    }

    /// Name text, empty when absent.
    pub fn name_text(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// About text, empty when absent.
    pub fn about_text(&self) -> &str {
        self.about.as_deref().unwrap_or("")
    }

    /// Education entries, empty when absent.
    pub fn education_entries(&self) -> &[Education] {
        self.education.as_deref().unwrap_or(&[])
    }

    /// Experience entries, empty when absent.
    pub fn experience_entries(&self) -> &[Experience] {
        self.experience.as_deref().unwrap_or(&[])
    }

    /// Project entries, empty when absent.
    pub fn project_entries(&self) -> &[Project] {
        self.projects.as_deref().unwrap_or(&[])
    }
}
