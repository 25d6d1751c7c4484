use std::fmt;
use std::str::FromStr;

use crate::error::PageError;

/// Top-level regions of the page. The string id doubles as the DOM `id`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    Hero,
    Origin,
    Mission,
    Build,
    Different,
    Gatherings,
    Gain,
    Join,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::Hero,
        Section::Origin,
        Section::Mission,
        Section::Build,
        Section::Different,
        Section::Gatherings,
        Section::Gain,
        Section::Join,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::Origin => "origin",
            Section::Mission => "mission",
            Section::Build => "build",
            Section::Different => "different",
            Section::Gatherings => "gatherings",
            Section::Gain => "gain",
            Section::Join => "join",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = PageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| PageError::UnknownSection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_parse_back() {
        for section in Section::ALL {
            assert_eq!(section.id().parse::<Section>(), Ok(section));
        }
    }

    #[test]
    fn unknown_id_is_rejected() {
        assert_eq!(
            "footer".parse::<Section>(),
            Err(PageError::UnknownSection("footer".to_string()))
        );
        assert!("".parse::<Section>().is_err());
        assert!("Hero".parse::<Section>().is_err());
    }
}
