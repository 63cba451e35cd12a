use crate::Tag;

/// Picks the best supported tag for a list of preferred tags.
#[derive(Debug, Clone)]
pub struct Matcher {
    supported: Vec<Tag>,
}

impl Matcher {
    /// The first supported tag is the default returned when nothing matches.
    pub fn new(supported: Vec<Tag>) -> Self {
        Matcher { supported }
    }

    pub fn supported(&self) -> &[Tag] {
        &self.supported
    }

    /// Finds the best supported tag for `preferred`, which is ordered from
    /// most to least preferred.
    ///
    /// An exact match on any preferred tag wins, then a supported tag sharing
    /// the base language of a preferred tag, then the default. With no
    /// supported tags the result is `und`.
    pub fn best<'a, I>(&self, preferred: I) -> Tag
    where
        I: IntoIterator<Item = &'a Tag>,
    {
        let preferred: Vec<&Tag> = preferred.into_iter().collect();

        let exact = preferred
            .iter()
            .find_map(|p| self.supported.iter().find(|s| s == p));
        let same_base = || {
            preferred
                .iter()
                .find_map(|p| self.supported.iter().find(|s| s.base() == p.base()))
        };

        exact
            .or_else(same_base)
            .or_else(|| self.supported.first())
            .cloned()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::Matcher;
    use crate::{BRITISH_ENGLISH, ENGLISH, FRENCH, GERMAN, SWISS_FRENCH, SWISS_GERMAN, Tag, UND};

    fn tags(list: &[&str]) -> Vec<Tag> {
        list.iter().map(|s| Tag::parse(s).unwrap()).collect()
    }

    #[rstest(
        preferred,
        expected,
        case(&["fr-CH"], SWISS_FRENCH),
        case(&["fr-FR"], FRENCH),
        case(&["it", "de-AT"], SWISS_GERMAN),
        case(&["en-AU"], ENGLISH),
        case(&["en-GB", "en-AU"], BRITISH_ENGLISH),
        case(&["ja"], ENGLISH),
        case(&[], ENGLISH),
        case(&["ja", "fr"], FRENCH)
    )]
    fn test_matcher_best(preferred: &[&str], expected: Tag) {
        let matcher = Matcher::new(vec![ENGLISH, BRITISH_ENGLISH, FRENCH, SWISS_FRENCH, SWISS_GERMAN, GERMAN]);
        let preferred = tags(preferred);
        assert_eq!(expected, matcher.best(&preferred));
    }

    #[test]
    fn test_matcher_best_exact_beats_base() {
        let matcher = Matcher::new(vec![FRENCH, SWISS_FRENCH]);
        let preferred = tags(&["fr-CH"]);
        assert_eq!(SWISS_FRENCH, matcher.best(&preferred));
    }

    #[test]
    fn test_matcher_without_supported_tags() {
        let matcher = Matcher::new(Vec::new());
        assert_eq!(UND, matcher.best(&tags(&["en"])));
    }
}
