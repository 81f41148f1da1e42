//! The fixed portfolio command set.

use std::fmt;

/// A portfolio command. The set is closed and commands take no arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Name,
    About,
    Skills,
    Projects,
    Education,
    Experience,
    Contact,
    Help,
    Clear,
    Export,
}

impl Command {
    /// Every command, in completion order.
    pub const ALL: [Command; 10] = [
        Command::Name,
        Command::About,
        Command::Skills,
        Command::Projects,
        Command::Education,
        Command::Experience,
        Command::Contact,
        Command::Help,
        Command::Clear,
        Command::Export,
    ];

    /// The token the user types.
    pub fn as_str(self) -> &'static str {
        match self {
            Command::Name => "name",
            Command::About => "about",
            Command::Skills => "skills",
            Command::Projects => "projects",
            Command::Education => "education",
            Command::Experience => "experience",
            Command::Contact => "contact",
            Command::Help => "help",
            Command::Clear => "clear",
            Command::Export => "export",
        }
    }

    /// Resolve a token, ignoring ASCII case.
    pub fn parse(token: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(token))
    }

    /// Commands whose token starts with `prefix`, in completion order.
    pub fn completions(prefix: &str) -> Vec<Command> {
        Self::ALL
            .into_iter()
            .filter(|c| c.as_str().starts_with(prefix))
            .collect()
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Command::parse("help"), Some(Command::Help));
        assert_eq!(Command::parse("HELP"), Some(Command::Help));
        assert_eq!(Command::parse("Skills"), Some(Command::Skills));
    }

    #[test]
    fn parse_rejects_unknown_and_arguments() {
        assert_eq!(Command::parse("ls"), None);
        assert_eq!(Command::parse("help me"), None);
        assert_eq!(Command::parse(""), None);
    }

    #[test]
    fn every_token_roundtrips() {
        for cmd in Command::ALL {
            assert_eq!(Command::parse(cmd.as_str()), Some(cmd));
            assert_eq!(cmd.to_string(), cmd.as_str());
        }
    }

    #[test]
    fn completions_prefix() {
        assert_eq!(
            Command::completions("e"),
            vec![Command::Education, Command::Experience, Command::Export]
        );
        assert_eq!(Command::completions("c"), vec![Command::Contact, Command::Clear]);
    }

    #[test]
    fn completions_empty_prefix_lists_all() {
        assert_eq!(Command::completions(""), Command::ALL.to_vec());
    }

    #[test]
    fn completions_no_match() {
        assert!(Command::completions("xyz").is_empty());
        assert!(Command::completions("E").is_empty());
    }
}
