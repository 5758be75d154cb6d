//! # Name Parser
//!
//! Splits a single free-text name into first and last name.
//!
//! ## Rules (first match wins)
//! ```text
//! ┌────┬──────────────────────────────┬──────────────────────┬────────────────┐
//! │ #  │ Matches when                 │ Example              │ first / last   │
//! ├────┼──────────────────────────────┼──────────────────────┼────────────────┤
//! │ 1  │ contains ','                 │ "Meyer, Eric"        │ Eric / Meyer   │
//! │ 2  │ contains ';'                 │ "Meyer; Eric"        │ Eric / Meyer   │
//! │ 3  │ more than two tokens         │ "Eric T. Meyer"      │ Eric T./ Meyer │
//! │ 4  │ exactly two tokens           │ "Eric Meyer"         │ Eric / Meyer   │
//! │ 5  │ anything else                │ "Meyer"              │ "" / Meyer     │
//! └────┴──────────────────────────────┴──────────────────────┴────────────────┘
//! ```
//!
//! Tokens are separated by the space character only. Surrounding whitespace
//! of the input and of each part is dropped.

/// First and last name parts produced by [`parse_name`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameParts {
    pub first: String,
    pub last: String,
}

impl NameParts {
    fn new(first: &str, last: &str) -> Self {
        NameParts {
            first: first.trim().to_string(),
            last: last.trim().to_string(),
        }
    }
}

/// One split convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitRule {
    /// `"Last<sep> First"`, split once at the first separator.
    LastFirst(char),
    /// `"First Middle... Last"`, split at the final space.
    FirstMiddleLast,
    /// `"First Last"`.
    FirstLast,
    /// No recognized separator, the whole text is the last name.
    LastOnly,
}

/// Split conventions in priority order.
pub const NAME_RULES: &[SplitRule] = &[
    SplitRule::LastFirst(','),
    SplitRule::LastFirst(';'),
    SplitRule::FirstMiddleLast,
    SplitRule::FirstLast,
    SplitRule::LastOnly,
];

impl SplitRule {
    /// Whether this rule applies to a (trimmed) name.
    pub fn matches(&self, name: &str) -> bool {
        match self {
            SplitRule::LastFirst(sep) => name.contains(*sep),
            SplitRule::FirstMiddleLast => space_tokens(name) > 2,
            SplitRule::FirstLast => space_tokens(name) == 2,
            SplitRule::LastOnly => true,
        }
    }

    /// Splits a name this rule [`matches`](Self::matches).
    pub fn split(&self, name: &str) -> NameParts {
        match self {
            SplitRule::LastFirst(sep) => match name.split_once(*sep) {
                Some((last, first)) => NameParts::new(first, last),
                None => NameParts::new("", name),
            },
            SplitRule::FirstMiddleLast | SplitRule::FirstLast => {
                match name.rsplit_once(' ') {
                    Some((first, last)) => NameParts::new(first, last),
                    None => NameParts::new("", name),
                }
            }
            SplitRule::LastOnly => NameParts::new("", name),
        }
    }
}

/// Number of non-empty parts between spaces. Tabs and line breaks are not
/// separators.
fn space_tokens(name: &str) -> usize {
    name.split(' ').filter(|t| !t.is_empty()).count()
}

/// Parses a free-text name using [`NAME_RULES`].
///
/// ## Example
/// ```rust
/// use bestell_core::name::parse_name;
///
/// let parts = parse_name("Eric T. Meyer");
/// assert_eq!(parts.first, "Eric T.");
/// assert_eq!(parts.last, "Meyer");
/// ```
pub fn parse_name(name: &str) -> NameParts {
    let name = name.trim();
    NAME_RULES
        .iter()
        .find(|rule| rule.matches(name))
        .map(|rule| rule.split(name))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(name: &str) -> (String, String) {
        let p = parse_name(name);
        (p.first, p.last)
    }

    fn pair(first: &str, last: &str) -> (String, String) {
        (first.to_string(), last.to_string())
    }

    #[test]
    fn test_comma_convention() {
        assert_eq!(parts("Meyer, Eric"), pair("Eric", "Meyer"));
        assert_eq!(parts("Schulz-Mueller, Tim"), pair("Tim", "Schulz-Mueller"));
        assert_eq!(parts("Meyer,Eric"), pair("Eric", "Meyer"));
    }

    #[test]
    fn test_comma_splits_only_once() {
        assert_eq!(parts("Meyer, Eric, Jr."), pair("Eric, Jr.", "Meyer"));
    }

    #[test]
    fn test_comma_beats_semicolon_and_spaces() {
        assert_eq!(parts("Blumenfeld; Nadine, Ulla"), pair("Ulla", "Blumenfeld; Nadine"));
        assert_eq!(
            parts("Abdelalim, Khaled Saad Mohamed"),
            pair("Khaled Saad Mohamed", "Abdelalim")
        );
    }

    #[test]
    fn test_semicolon_convention() {
        assert_eq!(parts("Meyer; Eric"), pair("Eric", "Meyer"));
        assert_eq!(parts("Meyer;Eric"), pair("Eric", "Meyer"));
    }

    #[test]
    fn test_first_middle_last() {
        assert_eq!(parts("Eric T. Meyer"), pair("Eric T.", "Meyer"));
        assert_eq!(
            parts("Khaled Saad Mohamed Abdelalim"),
            pair("Khaled Saad Mohamed", "Abdelalim")
        );
    }

    #[test]
    fn test_first_last() {
        assert_eq!(parts("Eric Meyer"), pair("Eric", "Meyer"));
        assert_eq!(parts("  Anne   Bayer "), pair("Anne", "Bayer"));
    }

    #[test]
    fn test_no_separator() {
        assert_eq!(parts("Meyer"), pair("", "Meyer"));
        assert_eq!(parts(""), pair("", ""));
    }

    #[test]
    fn test_only_spaces_separate_tokens() {
        assert_eq!(parts("Eric\tMeyer"), pair("", "Eric\tMeyer"));
        assert_eq!(parts("Eric\nMeyer"), pair("", "Eric\nMeyer"));
        assert_eq!(parts("Eric\u{00A0}Meyer"), pair("", "Eric\u{00A0}Meyer"));
        assert_eq!(parts("Eric T.\tMeyer"), pair("Eric", "T.\tMeyer"));
        assert!(!SplitRule::FirstLast.matches("a\tb"));
    }

    #[test]
    fn test_rule_matching_is_independent() {
        assert!(SplitRule::LastFirst(',').matches("a, b"));
        assert!(!SplitRule::LastFirst(',').matches("a b"));
        assert!(SplitRule::FirstMiddleLast.matches("a b c"));
        assert!(!SplitRule::FirstMiddleLast.matches("a b"));
        assert!(SplitRule::FirstLast.matches("a b"));
        assert!(!SplitRule::FirstLast.matches("a"));
        assert!(SplitRule::LastOnly.matches(""));
    }
}
