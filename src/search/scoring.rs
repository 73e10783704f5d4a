//! Query-to-text relevance scoring.
//!
//! Scores fall into fixed integer bands so that field weights applied on top
//! produce a predictable ordering:
//! - 100: Exact match
//! - 80: Text starts with query
//! - 60: Text contains query
//! - 30: Query characters appear in order (subsequence)
//! - 0: No match
//!
//! Only the first matching tier counts; tiers never accumulate.

/// Case-fold and trim a string for comparison.
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// How a query matched a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchTier {
    Subsequence,
    Substring,
    Prefix,
    Exact,
}

impl MatchTier {
    pub const fn score(self) -> u32 {
        match self {
            Self::Exact => 100,
            Self::Prefix => 80,
            Self::Substring => 60,
            Self::Subsequence => 30,
        }
    }
}

/// Score `text` against `query`. Both sides are normalized first.
///
/// Missing or empty text always scores 0.
pub fn match_score(query: &str, text: Option<&str>) -> u32 {
    score_normalized(&normalize(query), text)
}

/// Classify the match between `query` and `text`, if there is one.
pub fn classify(query: &str, text: Option<&str>) -> Option<MatchTier> {
    classify_normalized(&normalize(query), text)
}

/// Like [`match_score`], for a query that is already normalized.
pub(crate) fn score_normalized(query: &str, text: Option<&str>) -> u32 {
    classify_normalized(query, text).map_or(0, MatchTier::score)
}

fn classify_normalized(query: &str, text: Option<&str>) -> Option<MatchTier> {
    let text = normalize(text?);
    if text.is_empty() {
        return None;
    }

    if text == query {
        Some(MatchTier::Exact)
    } else if text.starts_with(query) {
        Some(MatchTier::Prefix)
    } else if text.contains(query) {
        Some(MatchTier::Substring)
    } else if is_subsequence(query, &text) {
        Some(MatchTier::Subsequence)
    } else {
        None
    }
}

/// Whether every character of `query` appears in `text` in order.
///
/// Single linear scan: the query cursor advances whenever the current text
/// character equals it.
fn is_subsequence(query: &str, text: &str) -> bool {
    let mut needle = query.chars().peekable();
    for c in text.chars() {
        match needle.peek() {
            Some(&q) if q == c => {
                needle.next();
            }
            Some(_) => {}
            None => break,
        }
    }
    needle.peek().is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    #[rstest]
    #[case("blue note", "Blue Note", 100)]
    #[case("  BLUE NOTE ", "blue note", 100)]
    #[case("blue", "Blue Note Jam", 80)]
    #[case("note", "Blue Note Jam", 60)]
    #[case("bnj", "Blue Note Jam", 30)]
    #[case("nzz", "new jazz zone", 30)]
    #[case("zzz-no-match", "Blue Note Jam", 0)]
    #[case("jab", "Blue Note Jam", 0)]
    fn test_match_score_tiers(#[case] query: &str, #[case] text: &str, #[case] expected: u32) {
        check!(match_score(query, Some(text)) == expected);
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    fn test_missing_text_scores_zero(#[case] text: Option<&str>) {
        check!(match_score("jazz", text) == 0);
    }

    #[rstest]
    #[case("a", "   ")]
    #[case("", "   ")]
    #[case("", "")]
    #[case("  ", "\t")]
    fn test_blank_text_scores_zero(#[case] query: &str, #[case] text: &str) {
        check!(match_score(query, Some(text)) == 0);
        check!(classify(query, Some(text)) == None);
    }

    #[test]
    fn test_tier_priority_is_first_match() {
        // "sax" is both a prefix and a subsequence; only the prefix tier counts.
        check!(classify("sax", Some("saxophone")) == Some(MatchTier::Prefix));
        check!(classify("tpe", Some("tw-tpe")) == Some(MatchTier::Substring));
        check!(classify("xyz", Some("saxophone")) == None);
    }

    #[test]
    fn test_tier_ordering() {
        check!(MatchTier::Exact > MatchTier::Prefix);
        check!(MatchTier::Prefix > MatchTier::Substring);
        check!(MatchTier::Substring > MatchTier::Subsequence);
    }

    #[test]
    fn test_subsequence_handles_multibyte() {
        check!(is_subsequence("台北", "台灣台北市"));
        check!(!is_subsequence("北台", "台北"));
        check!(is_subsequence("", "anything"));
    }
}
