use std::collections::BTreeMap;

/// Bag-of-words cosine similarity between two raw text bodies.
///
/// Texts are lowercased and split on non-alphanumeric boundaries; no
/// stemming and no stop-word removal, favoring simplicity and determinism
/// over precision. Returns 0.0 when either side has no recognizable tokens,
/// which also guards the divide-by-zero on the norm product.
pub fn content_similarity(a: &str, b: &str) -> f64 {
    let freq_a = term_frequencies(a);
    let freq_b = term_frequencies(b);

    if freq_a.is_empty() || freq_b.is_empty() {
        return 0.0;
    }

    let dot: f64 = freq_a
        .iter()
        .filter_map(|(term, &count)| freq_b.get(term).map(|&other| count as f64 * other as f64))
        .sum();

    let norm_a = norm(&freq_a);
    let norm_b = norm(&freq_b);

    let score = (dot / (norm_a * norm_b)).clamp(0.0, 1.0);
    debug_assert!((0.0..=1.0).contains(&score), "similarity {score} out of range");
    score
}

/// Term-frequency map. BTreeMap keeps iteration (and therefore float
/// summation) order deterministic across runs.
fn term_frequencies(text: &str) -> BTreeMap<String, u32> {
    let mut freq = BTreeMap::new();
    for token in text
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
    {
        *freq.entry(token.to_string()).or_insert(0) += 1;
    }
    freq
}

fn norm(freq: &BTreeMap<String, u32>) -> f64 {
    freq.values()
        .map(|&count| (count as f64).powi(2))
        .sum::<f64>()
        .sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_scores_zero() {
        assert_eq!(content_similarity("", "anything at all"), 0.0);
        assert_eq!(content_similarity("anything at all", ""), 0.0);
        assert_eq!(content_similarity("", ""), 0.0);
    }

    #[test]
    fn punctuation_only_has_no_tokens() {
        assert_eq!(content_similarity("?!... --- ///", "real words here"), 0.0);
    }

    #[test]
    fn disjoint_vocabularies_score_zero() {
        assert_eq!(content_similarity("apple banana", "carrot daikon"), 0.0);
    }

    #[test]
    fn self_similarity_is_one() {
        let text = "Rust makes systems programming approachable and fast.";
        let sim = content_similarity(text, text);
        assert!((sim - 1.0).abs() < 1e-9, "self-similarity was {sim}");
    }

    #[test]
    fn similarity_is_symmetric() {
        let a = "greedy selection over ranked candidates";
        let b = "ranked candidates feed the greedy pass";
        assert_eq!(content_similarity(a, b), content_similarity(b, a));
    }

    #[test]
    fn case_and_punctuation_are_ignored() {
        let sim = content_similarity("Hello, World!", "hello world");
        assert!((sim - 1.0).abs() < 1e-9, "normalized texts should match, got {sim}");
    }
}
