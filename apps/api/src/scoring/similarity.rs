//! Ratcliff/Obershelp string similarity.
//!
//! `ratio(a, b) = 2 * M / (|a| + |b|)` where `M` is the total size of the
//! matching blocks found by repeatedly taking the longest common substring
//! and recursing on the unmatched pieces to its left and right.

use std::collections::HashMap;

/// Similarity ratio in `[0.0, 1.0]`. Two empty strings are identical (1.0).
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    let matches = matching_chars(&a, &b, 0, a.len(), 0, b.len());
    2.0 * matches as f64 / total as f64
}

/// True when `ratio(a, b) > threshold`.
///
/// Checks the cheap length and character-multiset upper bounds first and only
/// runs the full block matcher when they cannot rule the pair out.
pub fn is_similar(a: &str, b: &str, threshold: f64) -> bool {
    if real_quick_ratio(a, b) <= threshold {
        return false;
    }
    if quick_ratio(a, b) <= threshold {
        return false;
    }
    ratio(a, b) > threshold
}

/// Upper bound on `ratio` using only the lengths.
fn real_quick_ratio(a: &str, b: &str) -> f64 {
    let la = a.chars().count();
    let lb = b.chars().count();
    if la + lb == 0 {
        return 1.0;
    }
    2.0 * la.min(lb) as f64 / (la + lb) as f64
}

/// Upper bound on `ratio` using the character multiset intersection.
fn quick_ratio(a: &str, b: &str) -> f64 {
    let mut counts: HashMap<char, usize> = HashMap::new();
    for c in b.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }

    let mut shared = 0usize;
    let mut la = 0usize;
    for c in a.chars() {
        la += 1;
        if let Some(n) = counts.get_mut(&c) {
            if *n > 0 {
                *n -= 1;
                shared += 1;
            }
        }
    }

    let total = la + b.chars().count();
    if total == 0 {
        return 1.0;
    }
    2.0 * shared as f64 / total as f64
}

fn matching_chars(a: &[char], b: &[char], alo: usize, ahi: usize, blo: usize, bhi: usize) -> usize {
    let (i, j, size) = longest_match(a, b, alo, ahi, blo, bhi);
    if size == 0 {
        return 0;
    }
    size + matching_chars(a, b, alo, i, blo, j) + matching_chars(a, b, i + size, ahi, j + size, bhi)
}

/// Longest common substring of `a[alo..ahi]` and `b[blo..bhi]`.
/// Ties resolve to the earliest start in `a`, then the earliest start in `b`.
fn longest_match(
    a: &[char],
    b: &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let width = bhi - blo;
    let mut prev = vec![0usize; width + 1];
    let mut cur = vec![0usize; width + 1];
    let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0usize);

    for i in alo..ahi {
        for j in blo..bhi {
            let col = j - blo + 1;
            if a[i] == b[j] {
                let k = prev[col - 1] + 1;
                cur[col] = k;
                if k > best_size {
                    best_i = i + 1 - k;
                    best_j = j + 1 - k;
                    best_size = k;
                }
            } else {
                cur[col] = 0;
            }
        }
        std::mem::swap(&mut prev, &mut cur);
    }

    (best_i, best_j, best_size)
}
