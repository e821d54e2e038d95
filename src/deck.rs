use crate::i18n::LANGUAGE_LOADER;
use i18n_embed_fl::fl;
use material_icons::{icon_to_char, Icon};

/// The campus services the deck links to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Section {
    Books,
    Courses,
    LostFound,
    StudyGroups,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Books,
        Section::Courses,
        Section::LostFound,
        Section::StudyGroups,
    ];

    pub fn description(self) -> String {
        match self {
            Self::Books => fl!(LANGUAGE_LOADER, "card-books-description"),
            Self::Courses => fl!(LANGUAGE_LOADER, "card-courses-description"),
            Self::LostFound => fl!(LANGUAGE_LOADER, "card-lost-found-description"),
            Self::StudyGroups => fl!(LANGUAGE_LOADER, "card-study-groups-description"),
        }
    }

    pub fn icon(self) -> char {
        icon_to_char(match self {
            Self::Books => Icon::Book,
            Self::Courses => Icon::School,
            Self::LostFound => Icon::Search,
            Self::StudyGroups => Icon::Group,
        })
    }

    pub fn title(self) -> String {
        match self {
            Self::Books => fl!(LANGUAGE_LOADER, "card-books-title"),
            Self::Courses => fl!(LANGUAGE_LOADER, "card-courses-title"),
            Self::LostFound => fl!(LANGUAGE_LOADER, "card-lost-found-title"),
            Self::StudyGroups => fl!(LANGUAGE_LOADER, "card-study-groups-title"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_section_is_in_the_deck() {
        assert_eq!(Section::ALL.len(), 4);
    }

    #[test]
    fn sections_have_distinct_icons() {
        for section in Section::ALL {
            for other in Section::ALL {
                if section != other {
                    assert_ne!(section.icon(), other.icon());
                }
            }
        }
    }

    #[test]
    fn titles_and_descriptions_are_filled_in() {
        for section in Section::ALL {
            assert!(!section.title().is_empty());
            assert!(!section.description().is_empty());
        }
    }
}
