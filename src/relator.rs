//! MARC relator codes and terms.
//!
//! Names in X00/X10/X11 fields carry their relationship to the work either as
//! a textual relator term in `$e` ("editor.") or as a coded value in `$4`
//! ("edt"). The extractors only deal in codes, so textual terms are mapped to
//! codes here before they reach them.
//!
//! See <https://www.loc.gov/marc/relators/relaterm.html>.

use crate::text::trim_non_word_characters;

/// LOC relators vocabulary namespace, sometimes found verbatim in `$4`.
pub const RELATORS: &str = "http://id.loc.gov/vocabulary/relators/";

/// Addressee
pub const ADDRESSEE: &str = "rcp";
/// Art director
pub const ART_DIRECTOR: &str = "adi";
/// Artistic director
pub const ARTISTIC_DIRECTOR: &str = "ard";
/// Author
pub const AUTHOR: &str = "aut";
/// Author in quotations or text abstracts
pub const AUTHOR_IN_QUOTATIONS_OR_TEXT_ABSTRACTS: &str = "aqt";
/// Author of afterword, colophon, etc.
pub const AUTHOR_OF_AFTERWORD_COLOPHON_ETC: &str = "aft";
/// Author of dialog
pub const AUTHOR_OF_DIALOG: &str = "aud";
/// Author of introduction, etc.
pub const AUTHOR_OF_INTRODUCTION_ETC: &str = "aui";
/// Composer
pub const COMPOSER: &str = "cmp";
/// Director
pub const DIRECTOR: &str = "drt";
/// Dubious author
pub const DUBIOUS_AUTHOR: &str = "dub";
/// Editor
pub const EDITOR: &str = "edt";
/// Editor of compilation
pub const EDITOR_OF_COMPILATION: &str = "edc";
/// Editor of moving image work
pub const EDITOR_OF_MOVING_IMAGE_WORK: &str = "edm";
/// Field director
pub const FIELD_DIRECTOR: &str = "fld";
/// Film director
pub const FILM_DIRECTOR: &str = "fmd";
/// Film editor
pub const FILM_EDITOR: &str = "flm";
/// Illustrator
pub const ILLUSTRATOR: &str = "ill";
/// Interviewer
pub const INTERVIEWER: &str = "ivr";
/// Laboratory director
pub const LABORATORY_DIRECTOR: &str = "ldr";
/// Markup editor
pub const MARKUP_EDITOR: &str = "mrk";
/// Musical director
pub const MUSICAL_DIRECTOR: &str = "msd";
/// Project director
pub const PROJECT_DIRECTOR: &str = "pdr";
/// Publishing director
pub const PUBLISHING_DIRECTOR: &str = "pbd";
/// Radio director
pub const RADIO_DIRECTOR: &str = "rdd";
/// Stage director
pub const STAGE_DIRECTOR: &str = "sgd";
/// Technical director
pub const TECHNICAL_DIRECTOR: &str = "tcd";
/// Television director
pub const TELEVISION_DIRECTOR: &str = "tld";
/// Translator
pub const TRANSLATOR: &str = "trl";

/// Relator terms (lower case) and their codes.
///
/// Covers every code the name-role views consult plus the terms that show up
/// most often in `$e` in practice.
const TERMS: &[(&str, &str)] = &[
    ("addressee", ADDRESSEE),
    ("annotator", "ann"),
    ("arranger", "arr"),
    ("arranger of music", "arr"),
    ("art director", ART_DIRECTOR),
    ("artist", "art"),
    ("artistic director", ARTISTIC_DIRECTOR),
    ("author", AUTHOR),
    ("author in quotations or text abstracts", AUTHOR_IN_QUOTATIONS_OR_TEXT_ABSTRACTS),
    ("author of afterword, colophon, etc", AUTHOR_OF_AFTERWORD_COLOPHON_ETC),
    ("author of dialog", AUTHOR_OF_DIALOG),
    ("author of introduction, etc", AUTHOR_OF_INTRODUCTION_ETC),
    ("commentator for written text", "cwt"),
    ("compiler", "com"),
    ("composer", COMPOSER),
    ("conductor", "cnd"),
    ("contributor", "ctb"),
    ("creator", "cre"),
    ("degree granting institution", "dgg"),
    ("director", DIRECTOR),
    ("dubious author", DUBIOUS_AUTHOR),
    ("editor", EDITOR),
    ("editor of compilation", EDITOR_OF_COMPILATION),
    ("editor of moving image work", EDITOR_OF_MOVING_IMAGE_WORK),
    ("field director", FIELD_DIRECTOR),
    ("film director", FILM_DIRECTOR),
    ("film editor", FILM_EDITOR),
    ("former owner", "fmo"),
    ("host", "hst"),
    ("illustrator", ILLUSTRATOR),
    ("interviewee", "ive"),
    ("interviewer", INTERVIEWER),
    ("issuing body", "isb"),
    ("laboratory director", LABORATORY_DIRECTOR),
    ("lyricist", "lyr"),
    ("markup editor", MARKUP_EDITOR),
    ("musical director", MUSICAL_DIRECTOR),
    ("narrator", "nrt"),
    ("organizer", "orm"),
    ("performer", "prf"),
    ("photographer", "pht"),
    ("producer", "pro"),
    ("programmer", "prg"),
    ("project director", PROJECT_DIRECTOR),
    ("publisher", "pbl"),
    ("publishing director", PUBLISHING_DIRECTOR),
    ("radio director", RADIO_DIRECTOR),
    ("recipient", ADDRESSEE),
    ("researcher", "res"),
    ("reviewer", "rev"),
    ("sponsor", "spn"),
    ("stage director", STAGE_DIRECTOR),
    ("technical director", TECHNICAL_DIRECTOR),
    ("television director", TELEVISION_DIRECTOR),
    ("thesis advisor", "ths"),
    ("translator", TRANSLATOR),
    ("writer of accompanying material", "wam"),
    ("writer of introduction", "win"),
    ("writer of preface", "wpr"),
];

/// Look up the code for a relator term, ignoring case and surrounding
/// punctuation (`"Editor."` and `"editor"` both give `Some("edt")`).
#[must_use]
pub fn code_for_term(term: &str) -> Option<&'static str> {
    let key = trim_non_word_characters(term).to_lowercase();
    TERMS
        .iter()
        .find(|(known, _)| *known == key)
        .map(|(_, code)| *code)
}

/// Normalize a textual `$e` relator term to a relator code.
///
/// Unknown terms are kept as their trimmed text so that no role is lost.
/// Returns `None` when nothing but punctuation remains.
#[must_use]
pub fn normalize_term(term: &str) -> Option<String> {
    if let Some(code) = code_for_term(term) {
        return Some(code.to_string());
    }
    let trimmed = trim_non_word_characters(term);
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Normalize a coded `$4` value.
///
/// Codes are lower-cased and a leading relators namespace URI is removed.
#[must_use]
pub fn normalize_code(code: &str) -> Option<String> {
    let code = code.trim();
    let code = code.strip_prefix(RELATORS).unwrap_or(code);
    let code = trim_non_word_characters(code).to_lowercase();
    (!code.is_empty()).then_some(code)
}
