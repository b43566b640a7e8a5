//! Text normalization shared by every scorer.

use std::collections::BTreeSet;

/// Lowercases `text`, replaces every character that is not a word character,
/// whitespace, `-`, `+`, `#` or `.` with a space, and collapses whitespace.
///
/// `-`, `+`, `#` and `.` survive so skills like `c++`, `c#`, `node.js` and
/// `scikit-learn` keep their shape.
pub fn normalize(text: &str) -> String {
    let replaced: String = text
        .to_lowercase()
        .chars()
        .map(|c| if is_kept(c) { c } else { ' ' })
        .collect();

    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn is_kept(c: char) -> bool {
    c.is_alphanumeric() || c.is_whitespace() || matches!(c, '_' | '-' | '+' | '#' | '.')
}

/// Splits already-normalized text into unigrams plus every contiguous bigram
/// and trigram, so multi-word skills such as "machine learning" can be looked
/// up directly.
pub fn tokenize(text: &str) -> BTreeSet<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    let mut tokens: BTreeSet<String> = words.iter().map(|w| w.to_string()).collect();

    for pair in words.windows(2) {
        tokens.insert(pair.join(" "));
    }
    for triple in words.windows(3) {
        tokens.insert(triple.join(" "));
    }

    tokens
}

/// Python-style title casing: a letter is uppercased when the preceding
/// character is not a letter, lowercased otherwise. `"node.js"` becomes
/// `"Node.Js"`, `"ci/cd"` becomes `"Ci/Cd"`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_letter = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }

    out
}
