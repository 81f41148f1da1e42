//! Tag lists backing comma-joined fields (skills, project tools).

use std::fmt;

use crate::model::{Profile, SkillGroup, Skills};

/// Ordered list of unique, trimmed tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagList {
    tags: Vec<String>,
}

impl TagList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Split a comma-joined field into tags, dropping blanks and duplicates.
    pub fn parse(joined: &str) -> Self {
        let mut list = Self::new();
        for part in joined.split(',') {
            list.add(part);
        }
        list
    }

    /// Add a tag. The value is trimmed and a trailing comma stripped; blank
    /// and already-present values are ignored. Returns whether it was added.
    pub fn add(&mut self, raw: &str) -> bool {
        let trimmed = raw.trim();
        let value = trimmed.strip_suffix(',').unwrap_or(trimmed).trim();
        if value.is_empty() || self.tags.iter().any(|t| t == value) {
            return false;
        }
        self.tags.push(value.to_string());
        true
    }

    /// Remove the tag at `index`, if any.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        (index < self.tags.len()).then(|| self.tags.remove(index))
    }

    /// The tags in insertion order.
    pub fn as_slice(&self) -> &[String] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// The `", "`-joined form stored in the profile.
    pub fn joined(&self) -> String {
        self.tags.join(", ")
    }
}

impl fmt::Display for TagList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.joined())
    }
}

fn tidy(field: &mut String) {
    *field = TagList::parse(field).joined();
}

fn tidy_group(group: &mut SkillGroup) {
    tidy(&mut group.languages);
    tidy(&mut group.frameworks);
    tidy(&mut group.tools);
}

/// Rewrite every comma-joined field (project tools, skill group entries) in
/// canonical tag form: trimmed, de-duplicated, `", "`-joined.
pub fn tidy_tag_fields(profile: &mut Profile) {
    for project in profile.projects.iter_mut().flatten() {
        if let Some(tools) = project.tools.as_mut() {
            tidy(tools);
        }
    }
    match profile.skills.as_mut() {
        Some(Skills::Group(group)) => tidy_group(group),
        Some(Skills::Groups(groups)) => groups.iter_mut().for_each(tidy_group),
        _ => {},
    }
}
