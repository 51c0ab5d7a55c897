use crate::error::{TextError, TextResult};
use regex::{Captures, Regex};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use tracing::debug;

// Unicode White_Space plus U+FEFF, minus NEL (U+0085). Word characters are
// ASCII only.
const SPACE_CLASS: &str = r"[[\s\x{FEFF}]--\x{85}]";

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("{}+", SPACE_CLASS)).expect("whitespace pattern is valid")
});

// word starts, capitals and whitespace runs
static CAMEL_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?:^[0-9A-Za-z_]|[A-Z]|(?-u:\b)[0-9A-Za-z_]|{}+)",
        SPACE_CLASS
    ))
    .expect("camel case pattern is valid")
});

static PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"[^A-Za-z0-9_{}]", SPACE_CLASS)).expect("punctuation pattern is valid")
});

fn is_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// A whole-input string transform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    Upper,
    Lower,
    Trim,
    Reverse,
    WordCount,
    LetterCount,
    Quote,
    SpacesToNewlines,
    CamelCase,
    Palindrome,
    RemovePunctuation,
    CsvToQuoted,
    LinesToQuoted,
}

impl Transform {
    pub const ALL: [Transform; 13] = [
        Transform::Upper,
        Transform::Lower,
        Transform::Trim,
        Transform::Reverse,
        Transform::WordCount,
        Transform::LetterCount,
        Transform::Quote,
        Transform::SpacesToNewlines,
        Transform::CamelCase,
        Transform::Palindrome,
        Transform::RemovePunctuation,
        Transform::CsvToQuoted,
        Transform::LinesToQuoted,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Transform::Upper => "upper",
            Transform::Lower => "lower",
            Transform::Trim => "trim",
            Transform::Reverse => "reverse",
            Transform::WordCount => "word-count",
            Transform::LetterCount => "letter-count",
            Transform::Quote => "quote",
            Transform::SpacesToNewlines => "spaces-to-newlines",
            Transform::CamelCase => "camel-case",
            Transform::Palindrome => "palindrome",
            Transform::RemovePunctuation => "remove-punctuation",
            Transform::CsvToQuoted => "csv-to-quoted",
            Transform::LinesToQuoted => "lines-to-quoted",
        }
    }

    pub fn apply(&self, input: &str) -> String {
        match self {
            Transform::Upper => input.to_uppercase(),
            Transform::Lower => input.to_lowercase(),
            Transform::Trim => input.trim_matches(is_space).to_string(),
            Transform::Reverse => input.chars().rev().collect(),
            Transform::WordCount => WHITESPACE_RUN
                .split(input)
                .filter(|word| !word.is_empty())
                .count()
                .to_string(),
            Transform::LetterCount => input
                .chars()
                .filter(char::is_ascii_alphabetic)
                .count()
                .to_string(),
            Transform::Quote => format!("\"{}\"", input),
            Transform::SpacesToNewlines => WHITESPACE_RUN.replace_all(input, "\n").into_owned(),
            Transform::CamelCase => camel_case(input),
            Transform::Palindrome => {
                if is_palindrome(input) {
                    "Palindrome".to_string()
                } else {
                    "Not a palindrome".to_string()
                }
            }
            Transform::RemovePunctuation => PUNCTUATION.replace_all(input, "").into_owned(),
            Transform::CsvToQuoted => quote_list(input.split(',')),
            Transform::LinesToQuoted => quote_list(input.split('\n')),
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Transform {
    type Err = TextError;

    fn from_str(s: &str) -> TextResult<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Transform::ALL
            .into_iter()
            .find(|t| t.name() == wanted)
            .ok_or_else(|| {
                let names: Vec<&str> = Transform::ALL.iter().map(Transform::name).collect();
                TextError::UnknownTransform(s.to_string(), names.join(", "))
            })
    }
}

/// Replace every match of `pattern` (a regular expression) with `replacement`.
///
/// `$1`-style group references in the replacement are expanded.
pub fn replace_all(input: &str, pattern: &str, replacement: &str) -> TextResult<String> {
    let re = Regex::new(pattern)?;
    debug!(pattern, matches = re.find_iter(input).count(), "replacing");
    Ok(re.replace_all(input, replacement).into_owned())
}

fn camel_case(input: &str) -> String {
    let cased = CAMEL_BOUNDARY.replace_all(input, |caps: &Captures| {
        let m = caps.get(0).map(|m| (m.start(), m.as_str())).unwrap_or((0, ""));
        if m.0 == 0 {
            m.1.to_lowercase()
        } else {
            m.1.to_uppercase()
        }
    });
    WHITESPACE_RUN.replace_all(&cased, "").into_owned()
}

fn is_palindrome(input: &str) -> bool {
    let cleaned: Vec<char> = input
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    cleaned.iter().eq(cleaned.iter().rev())
}

fn quote_list<'a>(values: impl Iterator<Item = &'a str>) -> String {
    values
        .map(|value| format!("'{}'", value.trim_matches(is_space)))
        .collect::<Vec<_>>()
        .join(", ")
}
