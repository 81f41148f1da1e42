//! Command formatter.
//!
//! Pure functions from (command, profile) to plain multi-line text. Missing
//! data never fails; it renders as empty text or a fallback line.

use termfolio_profile::model::present;
use termfolio_profile::{Education, Experience, Profile, Project, SkillGroup, Skills};

use crate::command::Command;

/// Prefix of the unknown-command error line.
pub const NOT_FOUND_PREFIX: &str = "Command not found";

/// Output of the `export` command.
pub const EXPORT_NOTICE: &str = "Exporting your terminal portfolio...";

const NO_SKILLS: &str = "No skills info.";

/// Render `command` against `profile`.
pub fn format(command: &str, profile: &Profile) -> String {
    let Some(cmd) = Command::parse(command) else {
        return format!("{NOT_FOUND_PREFIX}: {command}");
    };
    match cmd {
        Command::Name => profile.name_text().to_string(),
        Command::About => profile.about_text().to_string(),
        Command::Skills => format_skills(profile.skills.as_ref()),
        Command::Projects => join_blocks(profile.project_entries().iter().map(format_project)),
        Command::Education => profile
            .education_entries()
            .iter()
            .map(format_education)
            .collect::<Vec<_>>()
            .join("\n"),
        Command::Experience => {
            join_blocks(profile.experience_entries().iter().map(format_experience))
        },
        Command::Contact => format_contact(profile),
        Command::Help => format!("Available commands: {}", command_list(profile)),
        Command::Clear => String::new(),
        Command::Export => EXPORT_NOTICE.to_string(),
    }
}

/// Keys of `profile` that are also commands, in record order.
pub fn available_commands(profile: &Profile) -> Vec<Command> {
    profile.keys().into_iter().filter_map(Command::parse).collect()
}

/// Banner listing the commands the profile advertises.
pub fn welcome_banner(profile: &Profile) -> String {
    format!(
        "Welcome to your Terminal Portfolio! Type a command ({}) or \"help\".",
        command_list(profile)
    )
}

/// Whether `output` is an unknown-command error.
pub fn is_error_output(output: &str) -> bool {
    output.starts_with(NOT_FOUND_PREFIX)
}

fn command_list(profile: &Profile) -> String {
    available_commands(profile)
        .iter()
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_blocks(blocks: impl Iterator<Item = String>) -> String {
    blocks.collect::<Vec<_>>().join("\n\n")
}

fn format_skills(skills: Option<&Skills>) -> String {
    let rendered = match skills {
        None => String::new(),
        Some(Skills::Text(text)) => text.clone(),
        Some(Skills::Lines(lines)) => lines
            .iter()
            .map(|line| {
                line.split('|')
                    .map(str::trim)
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .collect::<Vec<_>>()
            .join("\n"),
        Some(Skills::Groups(groups)) => join_blocks(
            groups
                .iter()
                .filter(|g| !g.is_empty())
                .map(format_skill_group),
        ),
        Some(Skills::Nested { skills }) => return format_skills(Some(skills.as_ref())),
        Some(Skills::Group(group)) => format_skill_group(group),
    };
    if rendered.trim().is_empty() {
        NO_SKILLS.to_string()
    } else {
        rendered
    }
}

fn format_skill_group(group: &SkillGroup) -> String {
    let fields = [
        ("Languages", &group.languages),
        ("Frameworks", &group.frameworks),
        ("Tools", &group.tools),
    ];
    fields
        .iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .map(|(label, value)| format!("{label}: {value}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_project(project: &Project) -> String {
    let mut lines = Vec::new();
    if !project.title.trim().is_empty() {
        lines.push(format!(" {}", project.title));
    }
    if let Some(description) = present(&project.description) {
        lines.push(format!("- {description}"));
    }
    if let Some(tools) = present(&project.tools) {
        lines.push(format!("Tools: {tools}"));
    }
    if let Some(link) = present(&project.link) {
        lines.push(format!("Link: {link}"));
    }
    lines.join("\n").trim().to_string()
}

fn format_education(entry: &Education) -> String {
    let mut line = format!("- {} — {} ({})", entry.degree, entry.college, entry.year);
    if let Some(gpa) = present(&entry.gpa) {
        line.push_str(&format!(" — GPA: {gpa}"));
    }
    line
}

fn format_experience(entry: &Experience) -> String {
    let mut block = format!("- {} at {} ({})", entry.role, entry.company, entry.duration);
    if let Some(details) = present(&entry.details) {
        block.push_str(&format!("\n  {details}"));
    }
    block
}

fn format_contact(profile: &Profile) -> String {
    let Some(contact) = profile.contact.as_ref() else {
        return String::new();
    };
    let fields = [
        ("Email", &contact.email),
        ("GitHub", &contact.github),
        ("LinkedIn", &contact.linked_in),
        ("Phone", &contact.phone),
    ];
    fields
        .iter()
        .filter_map(|(label, value)| present(value).map(|v| format!("{label}: {v}")))
        .collect::<Vec<_>>()
        .join("\n")
}
