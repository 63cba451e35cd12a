//! Locale-aware date and time formatting.
//!
//! Month and day names come from the locale tables shipped with `chrono`
//! (`unstable-locales`); the field order of each supported locale is listed
//! below. Unsupported tags fall back to their base language, then to English.

use chrono::Locale;
use lang::Tag;

use crate::Utc;

struct Patterns {
    locale: Locale,
    date_long: &'static str,
    date_short: &'static str,
    time_short: &'static str,
}

const EN: Patterns = Patterns {
    locale: Locale::en_US,
    date_long: "%B %-d, %Y",
    date_short: "%-m/%-d/%y",
    time_short: "%-I:%M %p",
};

const EN_GB: Patterns = Patterns {
    locale: Locale::en_GB,
    date_long: "%-d %B %Y",
    date_short: "%d/%m/%Y",
    time_short: "%H:%M",
};

const FR: Patterns = Patterns {
    locale: Locale::fr_FR,
    date_long: "%-d %B %Y",
    date_short: "%d/%m/%Y",
    time_short: "%H:%M",
};

const FR_CH: Patterns = Patterns {
    locale: Locale::fr_CH,
    date_long: "%-d %B %Y",
    date_short: "%d.%m.%y",
    time_short: "%H:%M",
};

const DE: Patterns = Patterns {
    locale: Locale::de_DE,
    date_long: "%-d. %B %Y",
    date_short: "%d.%m.%y",
    time_short: "%H:%M",
};

const DE_CH: Patterns = Patterns {
    locale: Locale::de_CH,
    ..DE
};

const IT: Patterns = Patterns {
    locale: Locale::it_IT,
    date_long: "%-d %B %Y",
    date_short: "%d/%m/%y",
    time_short: "%H:%M",
};

const IT_CH: Patterns = Patterns {
    locale: Locale::it_CH,
    date_short: "%d.%m.%y",
    ..IT
};

fn patterns(tag: &Tag) -> &'static Patterns {
    match (tag.base(), tag.region()) {
        ("en", Some("GB")) => &EN_GB,
        ("fr", Some("CH")) => &FR_CH,
        ("de", Some("CH")) => &DE_CH,
        ("it", Some("CH")) => &IT_CH,
        ("fr", _) => &FR,
        ("de", _) => &DE,
        ("it", _) => &IT,
        _ => &EN,
    }
}

fn format(u: Utc, tag: &Tag, pick: fn(&Patterns) -> &'static str) -> String {
    let patterns = patterns(tag);
    u.to_datetime()
        .format_localized(pick(patterns), patterns.locale)
        .to_string()
}

/// Long date, e.g. `January 2, 2006`, `2 janvier 2006`, `2. Januar 2006`.
pub fn format_date_long(u: Utc, tag: &Tag) -> String {
    format(u, tag, |p| p.date_long)
}

/// Short numeric date, e.g. `1/2/06`, `02/01/2006`, `02.01.06`.
pub fn format_date_short(u: Utc, tag: &Tag) -> String {
    format(u, tag, |p| p.date_short)
}

/// Short time, e.g. `3:30 PM` or `15:30`.
pub fn format_time_short(u: Utc, tag: &Tag) -> String {
    format(u, tag, |p| p.time_short)
}
