//! Parsers for the free-text conventions found in MARC subfields.
//!
//! These functions know nothing about records; they turn a single subfield
//! value into structured data:
//!
//! - [`trim_non_word_characters`] strips ISBD punctuation such as the
//!   `"(1965 :"` in `$d(1965 :`
//! - [`parse_related_parts`] reads the human-oriented "related parts" text of
//!   76X-78X `$g`, e.g. `"Vol. 49, no. 2 (October 1998), p. 553-581"`
//! - [`parse_enumeration_and_first_page`] reads the compact SICI-style 773 `$q`,
//!   e.g. `"49:2<553"`
//!
//! See <https://www.loc.gov/marc/bibliographic/bd76x78x.html>.

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use serde::Serialize;

lazy_static! {
    /// A year or range of years, e.g. `1972-1974`.
    static ref BARE_NUMBER: Regex = Regex::new(r"^\d+(?:-\d+)?$").expect("valid regex");
    static ref VOLUME: Regex =
        Regex::new(r"(?i)\b(?:volume|vol)(?:[\s.]+([\w-]+)|(\d[\w-]*))").expect("valid regex");
    static ref PART: Regex =
        Regex::new(r"(?i)\b(?:part|pt)(?:[\s.]+([\w-]+)|(\d[\w-]*))").expect("valid regex");
    static ref NUMBER: Regex =
        Regex::new(r"(?i)\b(?:number|no)(?:[\s.]+([\w-]+)|(\d[\w-]*))").expect("valid regex");
    /// Digits and roman numerals, keeping range and list separators.
    static ref PAGES: Regex = Regex::new(concat!(
        r"(?i)\b(?:pages|page|pp|p)",
        r"(?:[\s.]+([\divxlcdm][\divxlcdm, -]*)|(\d[\divxlcdm, -]*))\b",
    ))
    .expect("valid regex");
    static ref PARENTHESIZED_DATE: Regex = Regex::new(r"\(([\w. ]+)\)").expect("valid regex");
}

/// Parts of a host item found in a free-text "related parts" subfield.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RelatedParts {
    /// Issue date, e.g. `"October 1998"`, or a bare year range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Volume designation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,
    /// Part designation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part: Option<String>,
    /// Issue number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    /// Page range or list, e.g. `"23-24, 27"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<String>,
}

/// Parts of a host item found in a structured "enumeration and first page"
/// subfield.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Enumeration {
    /// Volume designation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,
    /// Part designation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part: Option<String>,
    /// Issue number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    /// First page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}

/// Trim any non-word characters from the start and end of a string.
///
/// Returns the span from the first to the last word character (letter, digit
/// or underscore), or `""` when the string has none.
///
/// # Examples
///
/// ```
/// use marc_csl::text::trim_non_word_characters;
///
/// assert_eq!(trim_non_word_characters("(1965 :"), "1965");
/// assert_eq!(trim_non_word_characters("Royal Society)"), "Royal Society");
/// assert_eq!(trim_non_word_characters(" : "), "");
/// ```
#[must_use]
pub fn trim_non_word_characters(s: &str) -> &str {
    s.trim_matches(|c: char| !is_word_char(c))
}

/// The token following a keyword, from whichever alternative matched.
fn keyword_token(re: &Regex, s: &str) -> Option<String> {
    re.captures(s)
        .and_then(|caps: Captures<'_>| caps.get(1).or_else(|| caps.get(2)))
        .and_then(|m| non_empty(m.as_str()))
}

/// Parse a "related parts" subfield (`$g` of fields 760-787).
///
/// A value that is just a number or a number range is taken to be a date.
/// Otherwise volume, part, number, pages and a parenthesized date are each
/// looked for independently; only what is found is set.
///
/// # Examples
///
/// ```
/// use marc_csl::text::parse_related_parts;
///
/// let parts = parse_related_parts("Vol. 49, no. 2 (October 1998), p. 553-581");
/// assert_eq!(parts.volume.as_deref(), Some("49"));
/// assert_eq!(parts.number.as_deref(), Some("2"));
/// assert_eq!(parts.date.as_deref(), Some("October 1998"));
/// assert_eq!(parts.pages.as_deref(), Some("553-581"));
/// assert_eq!(parts.part, None);
///
/// assert_eq!(parse_related_parts("1972-1974").date.as_deref(), Some("1972-1974"));
/// ```
#[must_use]
pub fn parse_related_parts(s: &str) -> RelatedParts {
    if BARE_NUMBER.is_match(s) {
        return RelatedParts {
            date: Some(s.to_string()),
            ..RelatedParts::default()
        };
    }

    RelatedParts {
        volume: keyword_token(&VOLUME, s),
        part: keyword_token(&PART, s),
        number: keyword_token(&NUMBER, s),
        pages: keyword_token(&PAGES, s)
            .and_then(|pages| non_empty(pages.trim_end_matches([',', ' ']))),
        date: PARENTHESIZED_DATE
            .captures(s)
            .and_then(|caps| caps.get(1))
            .and_then(|m| non_empty(m.as_str())),
    }
}

/// Parse an "enumeration and first page" subfield (773 `$q`).
///
/// The format is `volume[:part]:number<page`; anything after the first `<` is
/// the first page.
///
/// # Examples
///
/// ```
/// use marc_csl::text::parse_enumeration_and_first_page;
///
/// let q = parse_enumeration_and_first_page("24:C:9<235");
/// assert_eq!(q.volume.as_deref(), Some("24"));
/// assert_eq!(q.part.as_deref(), Some("C"));
/// assert_eq!(q.number.as_deref(), Some("9"));
/// assert_eq!(q.page.as_deref(), Some("235"));
/// ```
#[must_use]
pub fn parse_enumeration_and_first_page(s: &str) -> Enumeration {
    let (enumeration, page) = match s.split_once('<') {
        Some((enumeration, page)) => (enumeration, non_empty(page)),
        None => (s, None),
    };

    let parts: Vec<&str> = enumeration.split(':').collect();
    let (volume, part, number) = match parts.as_slice() {
        [volume, part, number] => (non_empty(volume), non_empty(part), non_empty(number)),
        [volume, number] => (non_empty(volume), None, non_empty(number)),
        [volume] => (non_empty(volume), None, None),
        _ => (None, None, None),
    };

    Enumeration {
        volume,
        part,
        number,
        page,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn related(
        date: Option<&str>,
        volume: Option<&str>,
        part: Option<&str>,
        number: Option<&str>,
        pages: Option<&str>,
    ) -> RelatedParts {
        RelatedParts {
            date: date.map(String::from),
            volume: volume.map(String::from),
            part: part.map(String::from),
            number: number.map(String::from),
            pages: pages.map(String::from),
        }
    }

    fn enumeration(
        volume: Option<&str>,
        part: Option<&str>,
        number: Option<&str>,
        page: Option<&str>,
    ) -> Enumeration {
        Enumeration {
            volume: volume.map(String::from),
            part: part.map(String::from),
            number: number.map(String::from),
            page: page.map(String::from),
        }
    }

    #[test]
    fn test_trim_non_word_characters() {
        assert_eq!(
            trim_non_word_characters("Congress on Machinability"),
            "Congress on Machinability"
        );
        assert_eq!(trim_non_word_characters("(1965 :"), "1965");
        assert_eq!(
            trim_non_word_characters("Royal Commonwealth Society)"),
            "Royal Commonwealth Society"
        );
        assert_eq!(trim_non_word_characters(""), "");
        assert_eq!(trim_non_word_characters("c2009."), "c2009");
        assert_eq!(trim_non_word_characters("(Oak Ridge, Tenn. :"), "Oak Ridge, Tenn");
    }

    #[test]
    fn test_trim_keeps_single_word_character_and_unicode() {
        assert_eq!(trim_non_word_characters("[s"), "s");
        assert_eq!(trim_non_word_characters("Riaño, Juan Facundo,"), "Riaño, Juan Facundo");
        assert_eq!(trim_non_word_characters("_x_"), "_x_");
    }

    #[test]
    fn test_parse_related_parts_year_range() {
        assert_eq!(
            parse_related_parts("1972-1974"),
            related(Some("1972-1974"), None, None, None, None)
        );
        assert_eq!(parse_related_parts("1998"), related(Some("1998"), None, None, None, None));
    }

    #[test]
    fn test_parse_related_parts_journal_citation() {
        assert_eq!(
            parse_related_parts("Vol. 17, no. 98 (Feb. 1948), p. 78-159"),
            related(Some("Feb. 1948"), Some("17"), None, Some("98"), Some("78-159"))
        );
    }

    #[test]
    fn test_parse_related_parts_with_part() {
        assert_eq!(
            parse_related_parts("Vol. 24, pt. B no. 9 (Sept. 1993), p. 235-48"),
            related(Some("Sept. 1993"), Some("24"), Some("B"), Some("9"), Some("235-48"))
        );
    }

    #[test]
    fn test_parse_related_parts_keeps_page_lists() {
        assert_eq!(
            parse_related_parts("Vol. 96, no. 4 (May 2000), p. 23-24, 27"),
            related(Some("May 2000"), Some("96"), None, Some("4"), Some("23-24, 27"))
        );
    }

    #[test]
    fn test_parse_related_parts_long_keywords() {
        assert_eq!(
            parse_related_parts("Volume 3, Number 12, pages xi-xiv"),
            related(None, Some("3"), None, Some("12"), Some("xi-xiv"))
        );
        assert_eq!(
            parse_related_parts("vol3 no7 pp12-15"),
            related(None, Some("3"), None, Some("7"), Some("12-15"))
        );
    }

    #[test]
    fn test_parse_related_parts_ignores_keywords_inside_words() {
        // "Nov" and "Suppl" must not be read as a number or a page marker.
        assert_eq!(
            parse_related_parts("Suppl. (Nov. 1998)"),
            related(Some("Nov. 1998"), None, None, None, None)
        );
        assert_eq!(parse_related_parts("pilot issue"), RelatedParts::default());
    }

    #[test]
    fn test_parse_related_parts_nothing_found() {
        assert_eq!(parse_related_parts(""), RelatedParts::default());
        assert_eq!(parse_related_parts("Special issue"), RelatedParts::default());
    }

    #[test]
    fn test_parse_enumeration_and_first_page() {
        assert_eq!(
            parse_enumeration_and_first_page("123"),
            enumeration(Some("123"), None, None, None)
        );
        assert_eq!(
            parse_enumeration_and_first_page("279<GM5"),
            enumeration(Some("279"), None, None, Some("GM5"))
        );
        assert_eq!(
            parse_enumeration_and_first_page("90:23"),
            enumeration(Some("90"), None, Some("23"), None)
        );
        assert_eq!(
            parse_enumeration_and_first_page("96:4<23"),
            enumeration(Some("96"), None, Some("4"), Some("23"))
        );
        assert_eq!(
            parse_enumeration_and_first_page("24:B:9<235"),
            enumeration(Some("24"), Some("B"), Some("9"), Some("235"))
        );
        assert_eq!(
            parse_enumeration_and_first_page("24:C:10"),
            enumeration(Some("24"), Some("C"), Some("10"), None)
        );
        assert_eq!(parse_enumeration_and_first_page(""), Enumeration::default());
    }

    #[test]
    fn test_parse_enumeration_never_stores_empty_parts() {
        assert_eq!(
            parse_enumeration_and_first_page("<553"),
            enumeration(None, None, None, Some("553"))
        );
        assert_eq!(
            parse_enumeration_and_first_page(":2<"),
            enumeration(None, None, Some("2"), None)
        );
    }

    #[test]
    fn test_parse_enumeration_splits_on_first_angle_bracket() {
        assert_eq!(
            parse_enumeration_and_first_page("1:2<3<4").page.as_deref(),
            Some("3<4")
        );
    }

    #[test]
    fn test_parse_enumeration_too_many_levels() {
        assert_eq!(
            parse_enumeration_and_first_page("1:2:3:4<5"),
            enumeration(None, None, None, Some("5"))
        );
    }
}
