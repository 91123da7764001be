use serde::{Deserialize, Serialize};

use crate::views::settings::LocalizableName;

#[derive(
    strum::EnumCount,
    strum::EnumIter,
    strum::Display,
    PartialEq,
    Clone,
    Copy,
    Default,
    Debug,
    Serialize,
    Deserialize,
)]
pub enum LibraryFilter {
    #[default]
    All,
    Albums,
    Artists,
    Playlists,
}
impl LocalizableName for LibraryFilter {
    fn loc_key(&self) -> &'static str {
        use LibraryFilter::*;
        match self {
            All => "library-filter-all",
            Albums => "library-filter-albums",
            Artists => "library-filter-artists",
            Playlists => "library-filter-playlists",
        }
    }
}

#[derive(
    strum::EnumCount,
    strum::EnumIter,
    strum::Display,
    PartialEq,
    Clone,
    Copy,
    Default,
    Debug,
    Serialize,
    Deserialize,
)]
pub enum StreamQuality {
    Low,
    #[default]
    Normal,
    High,
    Lossless,
}
impl LocalizableName for StreamQuality {
    fn loc_key(&self) -> &'static str {
        use StreamQuality::*;
        match self {
            Low => "quality-low",
            Normal => "quality-normal",
            High => "quality-high",
            Lossless => "quality-lossless",
        }
    }
}

/// UI language selection. `System` defers to the OS locale.
#[derive(
    strum::EnumCount, strum::EnumIter, PartialEq, Clone, Copy, Default, Debug, Serialize, Deserialize,
)]
pub enum LangChoice {
    #[default]
    System,
    English,
    Russian,
}

impl LangChoice {
    /// Language code understood by the localization layer, None = auto.
    pub fn code(&self) -> Option<&'static str> {
        match self {
            LangChoice::System => None,
            LangChoice::English => Some("en"),
            LangChoice::Russian => Some("ru"),
        }
    }
}
impl LocalizableName for LangChoice {
    fn loc_key(&self) -> &'static str {
        use LangChoice::*;
        match self {
            System => "lang-system",
            English => "lang-english",
            Russian => "lang-russian",
        }
    }
}
