//! Language tags as defined by RFC 5646 (BCP 47).
//!
//! A tag is a sequence of subtags separated by hyphens:
//!
//! ```text
//! language[-extlang]*[-script][-region][-variant]*[-extension]*[-x-privateuse]
//! ```
//!
//! Parsing checks the tag is well-formed and normalises its casing
//! (`EN-gb` becomes `en-GB`, `zh-hant-tw` becomes `zh-Hant-TW`). Subtags are
//! not checked against the IANA registry.
//!
//! Examples:
//!   * en
//!   * en-GB
//!   * fr-CH
//!   * de-CH
//!   * de-DE

use std::borrow::Cow;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use std::sync::LazyLock;

use flatkey::DecodeText;
use regex::{Captures, Regex};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub mod accept;
pub mod error;
pub mod matcher;

pub use accept::parse_accept_language;
pub use error::{Error, Result};
pub use matcher::Matcher;

const UNDETERMINED: &str = "und";

static TAG_PATTERN: LazyLock<std::result::Result<Regex, regex::Error>> = LazyLock::new(|| {
    Regex::new(
        r"(?xi)^(?:
            (?P<language>[a-z]{2,3}(?:-[a-z]{3}){0,3}|[a-z]{4,8})
            (?:-(?P<script>[a-z]{4}))?
            (?:-(?P<region>[a-z]{2}|[0-9]{3}))?
            (?P<variants>(?:-(?:[a-z0-9]{5,8}|[0-9][a-z0-9]{3}))*)
            (?P<extensions>(?:-[0-9a-wyz](?:-[a-z0-9]{2,8})+)*)
            (?:-(?P<private>x(?:-[a-z0-9]{1,8})+))?
          |
            (?P<private_only>x(?:-[a-z0-9]{1,8})+)
        )$",
    )
});

pub const UND: Tag = Tag::known(UNDETERMINED, None);
pub const MUL: Tag = Tag::known("mul", None);
pub const ENGLISH: Tag = Tag::known("en", None);
pub const FRENCH: Tag = Tag::known("fr", None);
pub const GERMAN: Tag = Tag::known("de", None);
pub const ITALIAN: Tag = Tag::known("it", None);
pub const BRITISH_ENGLISH: Tag = Tag::known("en", Some("GB"));
pub const AMERICAN_ENGLISH: Tag = Tag::known("en", Some("US"));
pub const SPANISH: Tag = Tag::known("es", None);
pub const SPAIN_SPANISH: Tag = Tag::known("es", Some("ES"));
pub const SWISS_FRENCH: Tag = Tag::known("fr", Some("CH"));
pub const SWISS_GERMAN: Tag = Tag::known("de", Some("CH"));

/// A well-formed language tag in canonical casing.
///
/// The default tag is `und` (undetermined).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag {
    language: Cow<'static, str>,
    script: Option<Cow<'static, str>>,
    region: Option<Cow<'static, str>>,
    // variants, extensions and private use, in order
    rest: Vec<String>,
}

impl Tag {
    const fn known(language: &'static str, region: Option<&'static str>) -> Self {
        let region = match region {
            Some(region) => Some(Cow::Borrowed(region)),
            None => None,
        };
        Tag {
            language: Cow::Borrowed(language),
            script: None,
            region,
            rest: Vec::new(),
        }
    }

    /// Parses a language tag. `_` is accepted as a separator.
    pub fn parse(s: &str) -> Result<Self> {
        let pattern = TAG_PATTERN
            .as_ref()
            .map_err(|e| Error::Pattern(e.to_string()))?;
        let normalized = s.trim().replace('_', "-");
        let captures = pattern
            .captures(&normalized)
            .ok_or_else(|| Error::InvalidTag(s.to_string()))?;

        if let Some(private) = captures.name("private_only") {
            return Ok(Tag {
                language: Cow::Borrowed(UNDETERMINED),
                script: None,
                region: None,
                rest: lower_subtags(private.as_str()),
            });
        }

        let group = |name: &str| captures.name(name).map(|m| m.as_str());
        let language = group("language")
            .map(str::to_ascii_lowercase)
            .ok_or_else(|| Error::InvalidTag(s.to_string()))?;
        let script = group("script").map(title_case);
        let region = group("region").map(str::to_ascii_uppercase);

        Ok(Tag {
            language: Cow::Owned(language),
            script: script.map(Cow::Owned),
            region: region.map(Cow::Owned),
            rest: rest_subtags(&captures),
        })
    }

    /// The primary language subtag, e.g. `en` for `en-GB`.
    pub fn base(&self) -> &str {
        self.language
            .split('-')
            .next()
            .unwrap_or(UNDETERMINED)
    }

    /// The language subtag including any extended language subtags.
    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn script(&self) -> Option<&str> {
        self.script.as_deref()
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Variant, extension and private use subtags.
    pub fn extra_subtags(&self) -> &[String] {
        &self.rest
    }

    pub fn is_undetermined(&self) -> bool {
        self.language == UNDETERMINED && self.script.is_none() && self.region.is_none() && self.rest.is_empty()
    }
}

fn title_case(s: &str) -> String {
    let lower = s.to_ascii_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => lower,
    }
}

fn lower_subtags(s: &str) -> Vec<String> {
    s.split('-')
        .filter(|subtag| !subtag.is_empty())
        .map(str::to_ascii_lowercase)
        .collect()
}

fn rest_subtags(captures: &Captures<'_>) -> Vec<String> {
    ["variants", "extensions", "private"]
        .iter()
        .filter_map(|name| captures.name(name))
        .flat_map(|m| lower_subtags(m.as_str()))
        .collect()
}

impl Default for Tag {
    fn default() -> Self {
        UND
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.language)?;
        if let Some(script) = &self.script {
            write!(f, "-{}", script)?;
        }
        if let Some(region) = &self.region {
            write!(f, "-{}", region)?;
        }
        for subtag in &self.rest {
            write!(f, "-{}", subtag)?;
        }
        Ok(())
    }
}

impl FromStr for Tag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Tag::parse(s)
    }
}

impl DecodeText for Tag {
    type Error = Error;

    fn decode_text(&mut self, text: &str) -> Result<()> {
        *self = Tag::parse(text)?;
        Ok(())
    }
}

impl Serialize for Tag {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Cow::<'de, str>::deserialize(deserializer)?;
        Tag::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl PartialEq<str> for Tag {
    fn eq(&self, other: &str) -> bool {
        self.to_string() == other
    }
}

impl PartialEq<&str> for Tag {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

#[cfg(test)]
mod tests {
    use flatkey::DecodeText;
    use rstest::rstest;

    use super::{BRITISH_ENGLISH, Error, SWISS_GERMAN, Tag, UND};

    #[rstest(
        input,
        expected,
        case("en", "en"),
        case("EN", "en"),
        case("en-gb", "en-GB"),
        case("en_GB", "en-GB"),
        case("de-CH", "de-CH"),
        case("zh-hant-tw", "zh-Hant-TW"),
        case("sr-Latn", "sr-Latn"),
        case("es-419", "es-419"),
        case("zh-yue-HK", "zh-yue-HK"),
        case("de-CH-1996", "de-CH-1996"),
        case("sl-rozaj-biske", "sl-rozaj-biske"),
        case("en-US-u-ca-gregory", "en-US-u-ca-gregory"),
        case("en-US-x-Twain", "en-US-x-twain"),
        case("x-whatever", "und-x-whatever"),
        case("mul", "mul"),
        case(" fr-ch ", "fr-CH")
    )]
    fn test_parse_tag(input: &str, expected: &str) {
        let tag = Tag::parse(input).unwrap();
        assert_eq!(expected, tag.to_string());
    }

    #[rstest(
        input,
        case(""),
        case("e"),
        case("en-"),
        case("en--GB"),
        case("en-GB-"),
        case("12"),
        case("en-a"),
        case("en-x"),
        case("en-GB-abcdefghi"),
        case("20")
    )]
    fn test_parse_tag_invalid(input: &str) {
        assert_eq!(Err(Error::InvalidTag(input.to_string())), Tag::parse(input));
    }

    #[test]
    fn test_tag_components() {
        let tag = Tag::parse("zh-Hant-TW").unwrap();
        assert_eq!("zh", tag.base());
        assert_eq!(Some("Hant"), tag.script());
        assert_eq!(Some("TW"), tag.region());

        let tag = Tag::parse("zh-yue").unwrap();
        assert_eq!("zh", tag.base());
        assert_eq!("zh-yue", tag.language());
        assert_eq!(None, tag.region());
    }

    #[test]
    fn test_known_tags_equal_parsed_tags() {
        assert_eq!(BRITISH_ENGLISH, Tag::parse("en-gb").unwrap());
        assert_eq!(SWISS_GERMAN, Tag::parse("de_CH").unwrap());
        assert_eq!(UND, Tag::default());
        assert!(Tag::default().is_undetermined());
        assert_eq!(BRITISH_ENGLISH, "en-GB");
    }

    #[test]
    fn test_decode_text() {
        let mut tag = Tag::default();
        tag.decode_text("fr-ch").unwrap();
        assert_eq!("fr-CH", tag.to_string());
        assert!(tag.decode_text("not a tag").is_err());
        assert_eq!("fr-CH", tag.to_string());
    }

    #[rstest(input, expected_json, case(BRITISH_ENGLISH, r#""en-GB""#), case(UND, r#""und""#))]
    fn test_tag_serialize(input: Tag, expected_json: &str) {
        assert_eq!(expected_json, serde_json::to_string(&input).unwrap());
    }

    #[test]
    fn test_tag_deserialize() {
        let tag: Tag = serde_json::from_str(r#""fr_ch""#).unwrap();
        assert_eq!("fr-CH", tag.to_string());
        assert!(serde_json::from_str::<Tag>(r#""--""#).is_err());
        assert!(serde_json::from_str::<Tag>("12").is_err());
    }
}
