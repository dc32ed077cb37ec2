//! Platform locales. Every handler name/description and every localized bundle is keyed by [`Locale`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// A locale the chat platform knows about. Serialized as its platform tag (e.g. `"en-US"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum Locale {
    Indonesian,
    Danish,
    German,
    EnglishUk,
    EnglishUs,
    Spanish,
    SpanishLatam,
    French,
    Croatian,
    Italian,
    Lithuanian,
    Hungarian,
    Dutch,
    Norwegian,
    Polish,
    PortugueseBrazilian,
    Romanian,
    Finnish,
    Swedish,
    Vietnamese,
    Turkish,
    Czech,
    Greek,
    Bulgarian,
    Russian,
    Ukrainian,
    Hindi,
    Thai,
    ChineseChina,
    Japanese,
    ChineseTaiwan,
    Korean,
    Unknown,
}

impl Locale {
    /// The always-present locale of handler names, descriptions and fallback bundle lookups.
    pub const DEFAULT: Locale = Locale::EnglishUs;

    /// Every known platform locale. Never contains [`Locale::Unknown`].
    pub const ALL: [Locale; 32] = [
        Locale::Indonesian,
        Locale::Danish,
        Locale::German,
        Locale::EnglishUk,
        Locale::EnglishUs,
        Locale::Spanish,
        Locale::SpanishLatam,
        Locale::French,
        Locale::Croatian,
        Locale::Italian,
        Locale::Lithuanian,
        Locale::Hungarian,
        Locale::Dutch,
        Locale::Norwegian,
        Locale::Polish,
        Locale::PortugueseBrazilian,
        Locale::Romanian,
        Locale::Finnish,
        Locale::Swedish,
        Locale::Vietnamese,
        Locale::Turkish,
        Locale::Czech,
        Locale::Greek,
        Locale::Bulgarian,
        Locale::Russian,
        Locale::Ukrainian,
        Locale::Hindi,
        Locale::Thai,
        Locale::ChineseChina,
        Locale::Japanese,
        Locale::ChineseTaiwan,
        Locale::Korean,
    ];

    /// Platform tag, e.g. `"pt-BR"`. [`Locale::Unknown`] is `"unknown"`.
    pub fn tag(self) -> &'static str {
        match self {
            Locale::Indonesian => "id",
            Locale::Danish => "da",
            Locale::German => "de",
            Locale::EnglishUk => "en-GB",
            Locale::EnglishUs => "en-US",
            Locale::Spanish => "es-ES",
            Locale::SpanishLatam => "es-419",
            Locale::French => "fr",
            Locale::Croatian => "hr",
            Locale::Italian => "it",
            Locale::Lithuanian => "lt",
            Locale::Hungarian => "hu",
            Locale::Dutch => "nl",
            Locale::Norwegian => "no",
            Locale::Polish => "pl",
            Locale::PortugueseBrazilian => "pt-BR",
            Locale::Romanian => "ro",
            Locale::Finnish => "fi",
            Locale::Swedish => "sv-SE",
            Locale::Vietnamese => "vi",
            Locale::Turkish => "tr",
            Locale::Czech => "cs",
            Locale::Greek => "el",
            Locale::Bulgarian => "bg",
            Locale::Russian => "ru",
            Locale::Ukrainian => "uk",
            Locale::Hindi => "hi",
            Locale::Thai => "th",
            Locale::ChineseChina => "zh-CN",
            Locale::Japanese => "ja",
            Locale::ChineseTaiwan => "zh-TW",
            Locale::Korean => "ko",
            Locale::Unknown => "unknown",
        }
    }

    /// Parses a platform tag (case-insensitive, `_` accepted for `-`). Unrecognized tags map to [`Locale::Unknown`].
    pub fn from_tag(tag: &str) -> Locale {
        let normalized = tag.trim().replace('_', "-");
        Locale::ALL
            .into_iter()
            .find(|locale| locale.tag().eq_ignore_ascii_case(&normalized))
            .unwrap_or(Locale::Unknown)
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::DEFAULT
    }
}

impl From<Locale> for &'static str {
    fn from(locale: Locale) -> Self {
        locale.tag()
    }
}

impl From<String> for Locale {
    fn from(tag: String) -> Self {
        Locale::from_tag(&tag)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
