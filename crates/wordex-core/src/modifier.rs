//! Modifier codes applied to a replacement after lookup.
//!
//! A code is `<letter>` or `<letter>|<arg1>|<arg2>`; missing arguments are
//! empty strings and parts past the second argument are ignored.
//!
//! | Code | Effect |
//! |------|--------|
//! | `L`  | lowercase |
//! | `U`  | uppercase |
//! | `P`  | prepend `arg1` |
//! | `S`  | append `arg1` |
//! | `R`  | replace the first `arg1` with `arg2` |
//! | `T`  | title case, collapsing whitespace runs |

use std::fmt;

/// A parsed modifier code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modifier {
    Lower,
    Upper,
    Prefix(String),
    Suffix(String),
    Replace { from: String, to: String },
    Title,
    /// Unrecognised letter, kept verbatim for the warning.
    Unknown(String),
}

impl Modifier {
    /// Parse a modifier code. Never fails: unrecognised letters become `Unknown`.
    pub fn parse(code: &str) -> Self {
        let mut parts = code.split('|');
        let key = parts.next().unwrap_or("");
        let arg1 = parts.next().unwrap_or("");
        let arg2 = parts.next().unwrap_or("");

        match key {
            "L" => Self::Lower,
            "U" => Self::Upper,
            "P" => Self::Prefix(arg1.to_string()),
            "S" => Self::Suffix(arg1.to_string()),
            "R" => Self::Replace {
                from: arg1.to_string(),
                to: arg2.to_string(),
            },
            "T" => Self::Title,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// The letter this modifier was parsed from.
    pub fn code(&self) -> &str {
        match self {
            Self::Lower => "L",
            Self::Upper => "U",
            Self::Prefix(_) => "P",
            Self::Suffix(_) => "S",
            Self::Replace { .. } => "R",
            Self::Title => "T",
            Self::Unknown(key) => key.as_str(),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }

    /// Apply this modifier to `text`. `Unknown` leaves the text unchanged.
    pub fn apply(&self, text: String) -> String {
        match self {
            Self::Lower => text.to_lowercase(),
            Self::Upper => text.to_uppercase(),
            Self::Prefix(prefix) => format!("{prefix}{text}"),
            Self::Suffix(suffix) => text + suffix,
            Self::Replace { from, to } => text.replacen(from.as_str(), to, 1),
            Self::Title => title_case(&text),
            Self::Unknown(_) => text,
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prefix(arg) | Self::Suffix(arg) => write!(f, "{}|{arg}", self.code()),
            Self::Replace { from, to } => write!(f, "R|{from}|{to}"),
            _ => f.write_str(self.code()),
        }
    }
}

/// Lowercase, then uppercase the first character of every whitespace-separated
/// token. Each whitespace run becomes a single space, including leading and
/// trailing runs.
fn title_case(text: &str) -> String {
    let lower = text.to_lowercase();
    let mut out = String::with_capacity(lower.len());
    let mut in_gap = false;
    let mut token_start = true;

    for ch in lower.chars() {
        // U+FEFF is not Unicode whitespace but counts as a separator here.
        if ch.is_whitespace() || ch == '\u{feff}' {
            if !in_gap {
                out.push(' ');
                in_gap = true;
            }
            token_start = true;
        } else {
            in_gap = false;
            if token_start {
                out.extend(ch.to_uppercase());
                token_start = false;
            } else {
                out.push(ch);
            }
        }
    }
    out
}
