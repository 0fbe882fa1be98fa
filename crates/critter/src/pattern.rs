//! Module: pattern
//! Responsibility: SQL LIKE pattern construction, escaping, and matching.
//! Boundary: `%` matches any run of characters, `_` exactly one.

/// Escape character used by the `*_escaped` specification builders.
pub const DEFAULT_ESCAPE: char = '\\';

///
/// PatternKind
///
/// Where the raw value sits inside the generated LIKE pattern.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PatternKind {
    Contains,
    StartsWith,
    EndsWith,
}

impl PatternKind {
    /// Wrap `value` in wildcards. Wildcards already inside `value` are kept
    /// as wildcards; escape them first to match them literally.
    #[must_use]
    pub fn apply(self, value: &str) -> String {
        match self {
            Self::Contains => format!("%{value}%"),
            Self::StartsWith => format!("{value}%"),
            Self::EndsWith => format!("%{value}"),
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Contains => "like",
            Self::StartsWith => "starts_with",
            Self::EndsWith => "ends_with",
        }
    }
}

/// Escape `%`, `_`, and `escape` itself so `raw` matches literally.
#[must_use]
pub fn escape_like(raw: &str, escape: char) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if c == '%' || c == '_' || c == escape {
            out.push(escape);
        }
        out.push(c);
    }

    out
}

///
/// Token
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Token {
    Any,
    One,
    Lit(char),
}

fn tokenize(pattern: &str, escape: Option<char>) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(pattern.len());
    let mut chars = pattern.chars();

    while let Some(c) = chars.next() {
        let token = if Some(c) == escape {
            // trailing escape matches itself
            Token::Lit(chars.next().unwrap_or(c))
        } else {
            match c {
                '%' => Token::Any,
                '_' => Token::One,
                _ => Token::Lit(c),
            }
        };
        tokens.push(token);
    }

    tokens
}

/// Test `text` against a LIKE `pattern`. Comparison is case-sensitive;
/// callers fold case on both sides for case-insensitive matching.
#[must_use]
pub fn like_matches(text: &str, pattern: &str, escape: Option<char>) -> bool {
    let tokens = tokenize(pattern, escape);
    let text: Vec<char> = text.chars().collect();

    let (mut t, mut p) = (0, 0);
    // (token index after the last `%`, text index it is currently absorbing up to)
    let mut backtrack: Option<(usize, usize)> = None;

    while t < text.len() {
        match tokens.get(p) {
            Some(Token::One) => {
                t += 1;
                p += 1;
            }
            Some(Token::Lit(c)) if *c == text[t] => {
                t += 1;
                p += 1;
            }
            Some(Token::Any) => {
                backtrack = Some((p + 1, t));
                p += 1;
            }
            _ => match backtrack {
                Some((resume, absorbed)) => {
                    p = resume;
                    t = absorbed + 1;
                    backtrack = Some((resume, absorbed + 1));
                }
                None => return false,
            },
        }
    }

    tokens[p..].iter().all(|token| *token == Token::Any)
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_place_wildcards() {
        assert_eq!(PatternKind::Contains.apply("ice"), "%ice%");
        assert_eq!(PatternKind::StartsWith.apply("ice"), "ice%");
        assert_eq!(PatternKind::EndsWith.apply("ice"), "%ice");
    }

    #[test]
    fn raw_wildcards_are_not_escaped() {
        assert_eq!(PatternKind::Contains.apply("5%"), "%5%%");
        assert!(like_matches("5 apples", &PatternKind::Contains.apply("5%"), None));
    }

    #[test]
    fn escape_like_escapes_wildcards_and_escape() {
        assert_eq!(escape_like("a%b_c\\d", '\\'), "a\\%b\\_c\\\\d");
    }

    #[test]
    fn percent_matches_any_run() {
        assert!(like_matches("icicle", "%cic%", None));
        assert!(like_matches("", "%", None));
        assert!(like_matches("abc", "a%c", None));
        assert!(!like_matches("abd", "a%c", None));
    }

    #[test]
    fn underscore_matches_one_char() {
        assert!(like_matches("cat", "c_t", None));
        assert!(!like_matches("cart", "c_t", None));
        assert!(like_matches("ñu", "_u", None));
    }

    #[test]
    fn escaped_wildcards_match_literally() {
        let pattern = format!("{}%", escape_like("50%", '\\'));

        assert!(like_matches("50% off", &pattern, Some('\\')));
        assert!(!like_matches("500 off", &pattern, Some('\\')));
    }

    #[test]
    fn backtracking_handles_repeated_prefixes() {
        assert!(like_matches("aaab", "%aab", None));
        assert!(like_matches("mississippi", "%iss%ppi", None));
        assert!(!like_matches("mississippi", "%iss%ppx", None));
    }

    #[test]
    fn without_wildcards_match_is_exact() {
        assert!(like_matches("ice", "ice", None));
        assert!(!like_matches("ice", "Ice", None));
        assert!(!like_matches("ices", "ice", None));
    }
}
