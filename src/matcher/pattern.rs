//! Wildcard pattern compilation and matching.

use thiserror::Error;

/// Errors raised while compiling pattern text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("pattern cannot be empty")]
    Empty,
    #[error("pattern {0:?} contains only wildcards and can never match an address")]
    Degenerate(String),
    #[error("pattern contains non-ASCII character {0:?}")]
    NonAscii(char),
}

/// One fixed-width position inside a pattern segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    /// Matches exactly this (lowercased) byte.
    Literal(u8),
    /// `#` - matches any ASCII decimal digit.
    Digit,
    /// `@` - matches any of the six hex letters a-f.
    HexLetter,
}

impl Token {
    #[inline]
    fn matches(self, b: u8) -> bool {
        match self {
            Token::Literal(c) => b == c,
            Token::Digit => b.is_ascii_digit(),
            Token::HexLetter => (b'a'..=b'f').contains(&b),
        }
    }
}

/// A fixed-width run of tokens between two `*` markers.
type Segment = Vec<Token>;

#[inline]
fn segment_matches(candidate: &[u8], segment: &Segment) -> bool {
    candidate.len() == segment.len()
        && segment.iter().zip(candidate).all(|(t, &b)| t.matches(b))
}

/// Scans for the first token-wise occurrence of `segment` at or after `pos`.
/// Returns the index one past the occurrence.
fn find_segment(candidate: &[u8], pos: usize, segment: &Segment) -> Option<usize> {
    if candidate.len() < segment.len() {
        return None;
    }
    (pos..=candidate.len() - segment.len())
        .find(|&j| segment_matches(&candidate[j..j + segment.len()], segment))
        .map(|j| j + segment.len())
}

/// A compiled wildcard pattern.
///
/// The pattern text is split on `*` into an ordered list of segments. With a
/// single segment the whole candidate must match it exactly; with two or more,
/// a non-empty first segment is anchored as a prefix, a non-empty last segment
/// as a suffix, and middle segments must occur in order between them.
#[derive(Debug, Clone)]
pub struct Pattern {
    text: String,
    segments: Vec<Segment>,
}

impl Pattern {
    /// Compiles pattern text into a matchable form.
    ///
    /// `#` matches any digit, `@` any hex letter (a-f), `*` any run of
    /// characters (including none). Every other ASCII character is taken as a
    /// case-insensitive literal, so a literal outside `0-9a-f` compiles fine
    /// but never matches a hex address.
    pub fn compile(text: &str) -> Result<Self, PatternError> {
        if text.is_empty() {
            return Err(PatternError::Empty);
        }
        if let Some(c) = text.chars().find(|c| !c.is_ascii()) {
            return Err(PatternError::NonAscii(c));
        }

        let lowered = text.to_ascii_lowercase();
        let segments: Vec<Segment> = lowered
            .split('*')
            .map(|part| {
                part.bytes()
                    .map(|b| match b {
                        b'#' => Token::Digit,
                        b'@' => Token::HexLetter,
                        c => Token::Literal(c),
                    })
                    .collect()
            })
            .collect();

        // "*", "**", ... reduce to an exact match against the empty string,
        // which no fixed-length address can ever satisfy.
        if segments.iter().all(Vec::is_empty) {
            return Err(PatternError::Degenerate(text.to_string()));
        }

        Ok(Self {
            text: text.to_string(),
            segments,
        })
    }

    /// Returns the original pattern text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Tests a candidate string against this pattern, case-insensitively.
    pub fn matches(&self, candidate: &str) -> bool {
        let lowered = candidate.to_ascii_lowercase();
        let candidate = lowered.as_bytes();

        // No '*' in the pattern: exact whole-string comparison.
        if self.segments.len() == 1 {
            return segment_matches(candidate, &self.segments[0]);
        }

        let last = self.segments.len() - 1;
        let mut pos = 0;

        for (i, segment) in self.segments.iter().enumerate() {
            if segment.is_empty() {
                continue;
            }

            if i == 0 {
                // Anchored prefix.
                if candidate.len() < segment.len()
                    || !segment_matches(&candidate[..segment.len()], segment)
                {
                    return false;
                }
                pos = segment.len();
            } else if i == last {
                // Anchored suffix of the remaining tail; decides the result.
                let tail = &candidate[pos..];
                return tail.len() >= segment.len()
                    && segment_matches(&tail[tail.len() - segment.len()..], segment);
            } else {
                // Middle segment: first occurrence at or after the cursor.
                match find_segment(candidate, pos, segment) {
                    Some(end) => pos = end,
                    None => return false,
                }
            }
        }

        true
    }
}

/// A list of alternative patterns, matched with OR semantics.
#[derive(Debug, Clone)]
pub struct PatternSet {
    patterns: Vec<Pattern>,
}

impl PatternSet {
    /// Compiles comma-separated pattern text into a set.
    ///
    /// Entries are trimmed of surrounding whitespace; an empty entry (or an
    /// entirely empty list) is rejected rather than silently never matching.
    pub fn compile(text: &str) -> Result<Self, PatternError> {
        let patterns = text
            .split(',')
            .map(|entry| Pattern::compile(entry.trim()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { patterns })
    }

    /// Returns true if the candidate satisfies any pattern in the set.
    ///
    /// Stops at the first matching pattern.
    pub fn matches_any(&self, candidate: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(candidate))
    }

    /// Returns the compiled patterns.
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pat(text: &str) -> Pattern {
        Pattern::compile(text).unwrap()
    }

    #[test]
    fn exact_match_requires_equal_length() {
        assert!(pat("dead").matches("dead"));
        assert!(!pat("dead").matches("deadbeef"));
        assert!(!pat("deadbeef").matches("dead"));
    }

    #[test]
    fn exact_match_is_case_insensitive() {
        assert!(pat("dead").matches("DEAD"));
        assert!(pat("DeAd").matches("dEaD"));
    }

    #[test]
    fn prefix_rule() {
        assert!(pat("123*").matches("123abc"));
        assert!(!pat("123*").matches("124abc"));
    }

    #[test]
    fn suffix_rule() {
        assert!(pat("*123").matches("abc123"));
        assert!(!pat("*123").matches("abc124"));
    }

    #[test]
    fn prefix_and_suffix() {
        assert!(pat("123*321").matches("123xx321"));
        assert!(!pat("123*321").matches("123xx322"));
        assert!(!pat("124*321").matches("123xx321"));
    }

    #[test]
    fn middle_segments_must_appear_in_order() {
        assert!(pat("*123*456*").matches("xx123yy456zz"));
        assert!(!pat("*123*456*").matches("xx456yy123zz"));
    }

    #[test]
    fn contains() {
        assert!(pat("*cafe*").matches("00cafe00"));
        assert!(pat("*cafe*").matches("cafe0000"));
        assert!(!pat("*cafe*").matches("00caf000"));
    }

    #[test]
    fn digit_token() {
        assert!(pat("###*").matches("123abc"));
        assert!(!pat("###*").matches("12aabc"));
    }

    #[test]
    fn hex_letter_token() {
        assert!(pat("@@@*").matches("abcdef"));
        assert!(!pat("@@@*").matches("ab1def"));
        // '@' is restricted to a-f, not the full alphabet.
        assert!(!pat("@*").matches("g0"));
    }

    #[test]
    fn mixed_token_classes() {
        assert!(pat("###@").matches("123a"));
        assert!(!pat("###@").matches("1a2b"));
        assert!(!pat("###@").matches("1234"));
    }

    #[test]
    fn tokens_inside_wildcard_segments() {
        assert!(pat("*#@#*").matches("xx1a2xx"));
        assert!(!pat("*#@#*").matches("xxabcxx"));
    }

    #[test]
    fn segment_longer_than_tail_fails() {
        assert!(!pat("*123456").matches("123"));
        assert!(!pat("abc*123456").matches("abc45"));
    }

    #[test]
    fn consecutive_stars_are_skipped() {
        assert!(pat("1**2").matches("1xx2"));
        assert!(pat("1**2").matches("12"));
    }

    #[test]
    fn compile_preserves_original_text() {
        assert_eq!(pat("*123*456*").text(), "*123*456*");
        assert_eq!(pat("DeAd*").text(), "DeAd*");
    }

    #[test]
    fn compile_rejects_empty() {
        assert_eq!(Pattern::compile("").unwrap_err(), PatternError::Empty);
    }

    #[test]
    fn compile_rejects_degenerate() {
        assert!(matches!(
            Pattern::compile("*"),
            Err(PatternError::Degenerate(_))
        ));
        assert!(matches!(
            Pattern::compile("**"),
            Err(PatternError::Degenerate(_))
        ));
    }

    #[test]
    fn compile_rejects_non_ascii() {
        assert!(matches!(
            Pattern::compile("café*"),
            Err(PatternError::NonAscii('é'))
        ));
    }

    #[test]
    fn set_alternation() {
        let set = PatternSet::compile("123*, *456, *789*").unwrap();
        assert!(set.matches_any("123000"));
        assert!(set.matches_any("000456"));
        assert!(set.matches_any("007890"));
        assert!(!set.matches_any("000000"));
    }

    #[test]
    fn set_trims_whitespace() {
        let set = PatternSet::compile("  dead* ,  *beef ").unwrap();
        assert_eq!(set.patterns().len(), 2);
        assert_eq!(set.patterns()[0].text(), "dead*");
        assert!(set.matches_any("deadxx"));
    }

    #[test]
    fn set_rejects_empty_entries() {
        assert!(PatternSet::compile("").is_err());
        assert!(PatternSet::compile("abc*,,def").is_err());
        assert!(PatternSet::compile(",").is_err());
    }
}
