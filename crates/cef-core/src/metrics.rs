//! Single-text metrics: semantic density (SD), normalized Shannon entropy,
//! and lexical coherence. All surface-level; no embeddings.

use std::collections::{HashMap, HashSet};

use crate::constants::{DAMPING_SCALE, METRIC_PRECISION};
use crate::tokenizer::tokenize;

/// Round to `METRIC_PRECISION` decimals, half away from zero.
pub fn round4(x: f64) -> f64 {
    round_to(x, METRIC_PRECISION)
}

pub(crate) fn round_to(x: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (x * scale).round() / scale
}

/// Short-text damping: 1 - e^(-n/50). Five tokens give ~0.095, two hundred ~0.98.
fn damping(token_count: usize) -> f64 {
    1.0 - (-(token_count as f64) / DAMPING_SCALE).exp()
}

fn density_of(tokens: &[String]) -> f64 {
    if tokens.is_empty() {
        return 0.0;
    }
    let unique: HashSet<&str> = tokens.iter().map(String::as_str).collect();
    let ratio = unique.len() as f64 / tokens.len() as f64;
    round4((ratio * damping(tokens.len())).min(1.0))
}

fn entropy_of(tokens: &[String]) -> f64 {
    let n = tokens.len();
    if n <= 1 {
        return 0.0;
    }
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for t in tokens {
        *counts.entry(t.as_str()).or_default() += 1;
    }
    let total = n as f64;
    let h: f64 = counts
        .values()
        .map(|&c| {
            let p = c as f64 / total;
            -p * p.log2()
        })
        .sum();
    round4(h / total.log2())
}

/// Semantic density: unique-token ratio damped for short texts, in [0, 1].
/// Empty or token-less text yields 0.0.
pub fn density(text: &str) -> f64 {
    density_of(&tokenize(text))
}

/// Shannon entropy of the token distribution, normalized by log2(token count).
/// Zero for texts with one token or fewer.
pub fn entropy(text: &str) -> f64 {
    entropy_of(&tokenize(text))
}

/// Lexical coherence: (1 - entropy) * density.
pub fn coherence(text: &str) -> f64 {
    let tokens = tokenize(text);
    round4((1.0 - entropy_of(&tokens)) * density_of(&tokens))
}
