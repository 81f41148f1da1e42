//! The profile record and its persistence.
//!
//! A profile is the single source of truth for every terminal command. It is
//! read from loosely shaped JSON (legacy records nest list sections or store
//! a single object where a list is expected) and always normalized to flat
//! ordered sequences before anything else sees it.

pub mod model;
mod shape;
pub mod store;
pub mod tags;
pub mod validate;

/// Contact details (email, phone, LinkedIn, GitHub).
pub use model::Contact;
/// One education entry.
pub use model::Education;
/// One work experience entry.
pub use model::Experience;
/// The normalized profile record.
pub use model::Profile;
/// One project entry.
pub use model::Project;
/// A languages/frameworks/tools skill group.
pub use model::SkillGroup;
/// Every accepted shape of the `skills` section.
pub use model::Skills;
/// Persisted, write-through profile store.
pub use store::{ProfileStore, STORAGE_KEY};
/// Ordered de-duplicated tags backing comma-joined fields.
pub use tags::{TagList, tidy_tag_fields};
/// Required-field check run before a submission is stored.
pub use validate::{missing_fields, validate};
