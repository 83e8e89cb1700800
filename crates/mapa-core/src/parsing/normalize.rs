use crate::vocab::Vocabulary;

/// Repair words that PDF extraction split with a stray space, then collapse
/// whitespace runs and trim.
///
/// "CENTRO CIRURGICO INTELIGE NTE" -> "CENTRO CIRURGICO INTELIGENTE"
pub fn repair_broken_words(text: &str, vocab: &Vocabulary) -> String {
    let mut s = text.to_string();
    for (pattern, replacement) in &vocab.broken_words {
        s = pattern
            .replace_all(&s, regex::NoExpand(replacement.as_str()))
            .into_owned();
    }
    collapse_whitespace(&s)
}

/// Canonicalize a file-derived unit token. First matching rule wins;
/// unmatched input passes through trimmed.
pub fn canonical_unit(raw: &str, vocab: &Vocabulary) -> String {
    let raw = raw.trim();
    vocab
        .unit_rules
        .iter()
        .find(|(pattern, _)| pattern.is_match(raw))
        .map(|(_, unit)| unit.clone())
        .unwrap_or_else(|| raw.to_string())
}

/// Strip configured garbage tokens from both ends of a field until stable.
pub fn strip_garbage(text: &str, vocab: &Vocabulary) -> String {
    let mut s = text.trim().to_string();
    loop {
        let before = s.clone();
        for token in &vocab.garbage_tokens {
            s = token.trailing.replace(&s, "").into_owned();
            s = token.leading.replace(&s, "").into_owned();
        }
        s = s.trim().to_string();
        if s == before {
            return s;
        }
    }
}

/// Whether a location denotes the robotic suite.
pub fn is_robotic_suite(location: &str, vocab: &Vocabulary) -> bool {
    vocab.robotic_pattern.is_match(location)
}

pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
