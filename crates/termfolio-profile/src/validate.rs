//! Submission validation.
//!
//! A profile is only stored when every required field is filled in; a
//! failed check stores nothing and reports all offending fields at once.

use termfolio_types::error::{Result, TermfolioError};

use crate::model::Profile;

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn check(missing: &mut Vec<String>, value: &str, field: impl FnOnce() -> String) {
    if blank(value) {
        missing.push(field());
    }
}

/// Paths of every required field that is empty or malformed.
pub fn missing_fields(profile: &Profile) -> Vec<String> {
    let mut missing = Vec::new();
    check(&mut missing, profile.name_text(), || "name".into());
    check(&mut missing, profile.about_text(), || "about".into());

    let contact = profile.contact.clone().unwrap_or_default();
    let email = contact.email.as_deref().unwrap_or("");
    if blank(email) {
        missing.push("contact.email".into());
    } else if !email.contains('@') {
        missing.push("contact.email (invalid address)".into());
    }
    check(&mut missing, contact.phone.as_deref().unwrap_or(""), || {
        "contact.phone".into()
    });

    for (i, e) in profile.education_entries().iter().enumerate() {
        check(&mut missing, &e.degree, || format!("education[{i}].degree"));
        check(&mut missing, &e.college, || format!("education[{i}].college"));
        check(&mut missing, &e.year, || format!("education[{i}].year"));
    }
    for (i, e) in profile.experience_entries().iter().enumerate() {
        check(&mut missing, &e.role, || format!("experience[{i}].role"));
        check(&mut missing, &e.company, || format!("experience[{i}].company"));
        check(&mut missing, &e.duration, || format!("experience[{i}].duration"));
    }
    for (i, p) in profile.project_entries().iter().enumerate() {
        check(&mut missing, &p.title, || format!("projects[{i}].title"));
    }
    missing
}

/// Fail with `TermfolioError::Validation` listing every missing field.
pub fn validate(profile: &Profile) -> Result<()> {
    let missing = missing_fields(profile);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(TermfolioError::Validation(missing))
    }
}
