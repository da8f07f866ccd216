use std::collections::BTreeSet;

use crate::article::Article;

const TAG_NOVELTY_WEIGHT: f64 = 0.7;
const CATEGORY_NOVELTY_WEIGHT: f64 = 0.3;

/// Greedy novelty-maximizing selection over an already-ranked pool.
///
/// The top-ranked item is always kept. Each following pick maximizes
/// `0.7 * unseen-tag count + 0.3 * unseen-category flag` against the tags
/// and categories accumulated so far; the earliest remaining item wins
/// ties. Pools no larger than `limit` come back unchanged, in order.
///
/// Single-pass and deliberately not globally optimal; the heuristic's
/// observable output is part of the contract.
pub fn diversify(pool: &[Article], limit: usize) -> Vec<&Article> {
    if pool.len() <= limit {
        return pool.iter().collect();
    }

    let mut used_tags: BTreeSet<String> = BTreeSet::new();
    let mut used_categories: BTreeSet<String> = BTreeSet::new();

    let seed = &pool[0];
    absorb(seed, &mut used_tags, &mut used_categories);

    let mut selected: Vec<&Article> = vec![seed];
    let mut remaining: Vec<&Article> = pool[1..].iter().collect();

    while selected.len() < limit && !remaining.is_empty() {
        let mut best_index = 0;
        let mut best_novelty = f64::MIN;

        for (index, article) in remaining.iter().enumerate() {
            let novelty = novelty_of(article, &used_tags, &used_categories);
            // Strict comparison: first-seen wins ties.
            if novelty > best_novelty {
                best_novelty = novelty;
                best_index = index;
            }
        }

        let picked = remaining.remove(best_index);
        absorb(picked, &mut used_tags, &mut used_categories);
        selected.push(picked);
    }

    selected
}

fn novelty_of(
    article: &Article,
    used_tags: &BTreeSet<String>,
    used_categories: &BTreeSet<String>,
) -> f64 {
    let new_tags = article
        .tags
        .iter()
        .filter(|tag| !used_tags.contains(&tag.to_lowercase()))
        .count();

    let new_category = match &article.category {
        Some(category) if !used_categories.contains(&category.to_lowercase()) => 1.0,
        _ => 0.0,
    };

    TAG_NOVELTY_WEIGHT * new_tags as f64 + CATEGORY_NOVELTY_WEIGHT * new_category
}

fn absorb(
    article: &Article,
    used_tags: &mut BTreeSet<String>,
    used_categories: &mut BTreeSet<String>,
) {
    for tag in &article.tags {
        used_tags.insert(tag.to_lowercase());
    }
    if let Some(category) = &article.category {
        used_categories.insert(category.to_lowercase());
    }
}
