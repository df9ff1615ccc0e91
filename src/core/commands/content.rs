//! Compiled-in text pages served by single-word verbs.

use crate::models::OutputLine;

/// A static content table, selected by its verb.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentTable {
    Help,
    About,
    Projects,
    Skills,
    Contact,
    Experience,
    Syntx,
    Music,
    Whoami,
    Uptime,
}

impl ContentTable {
    pub const ALL: [Self; 10] = [
        Self::Help,
        Self::About,
        Self::Projects,
        Self::Skills,
        Self::Contact,
        Self::Experience,
        Self::Syntx,
        Self::Music,
        Self::Whoami,
        Self::Uptime,
    ];

    /// Look up a table by its (already lowercased) verb.
    pub fn from_verb(verb: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|table| table.verb() == verb)
    }

    pub fn verb(self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::About => "about",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Contact => "contact",
            Self::Experience => "experience",
            Self::Syntx => "syntx",
            Self::Music => "music",
            Self::Whoami => "whoami",
            Self::Uptime => "uptime",
        }
    }

    fn source(self) -> &'static str {
        match self {
            Self::Help => include_str!("../../../assets/text/help.txt"),
            Self::About => include_str!("../../../assets/text/about.txt"),
            Self::Projects => include_str!("../../../assets/text/projects.txt"),
            Self::Skills => include_str!("../../../assets/text/skills.txt"),
            Self::Contact => include_str!("../../../assets/text/contact.txt"),
            Self::Experience => include_str!("../../../assets/text/experience.txt"),
            Self::Syntx => include_str!("../../../assets/text/syntx.txt"),
            Self::Music => include_str!("../../../assets/text/music.txt"),
            Self::Whoami => include_str!("../../../assets/text/whoami.txt"),
            Self::Uptime => include_str!("../../../assets/text/uptime.txt"),
        }
    }

    /// Rendered lines, one per source line.
    pub fn lines(self) -> Vec<OutputLine> {
        OutputLine::text_block(self.source())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_table_round_trips_its_verb() {
        for table in ContentTable::ALL {
            assert_eq!(ContentTable::from_verb(table.verb()), Some(table));
        }
        assert_eq!(ContentTable::from_verb("sudo"), None);
    }

    #[test]
    fn test_every_table_has_content() {
        for table in ContentTable::ALL {
            assert!(!table.lines().is_empty(), "{:?}", table);
        }
    }

    #[test]
    fn test_help_lists_filesystem_verbs() {
        let help: Vec<String> = ContentTable::Help
            .lines()
            .iter()
            .map(|l| l.plain_text().to_string())
            .collect();
        assert!(help.iter().any(|l| l.contains("mkdir")));
        assert!(help.iter().any(|l| l.contains("curl")));
    }
}
