use chrono::{DateTime, Duration, TimeZone, Utc};

use recommend_core::article::Article;
use recommend_core::ranking::Recommender;
use recommend_core::types::{ArticleId, Reason, RecommendOptions};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

#[test]
fn similarity_reason_appears_when_reading_a_close_match() {
    let current = Article::new(
        ArticleId::new("current"),
        "borrow checker lifetimes ownership aliasing rules",
        now() - Duration::days(2),
    );
    let close = Article::new(
        ArticleId::new("close"),
        "ownership aliasing rules and borrow checker lifetimes",
        now() - Duration::days(40),
    );
    let unrelated = Article::new(
        ArticleId::new("unrelated"),
        "ten quick weeknight pasta recipes",
        now() - Duration::days(40),
    );

    let catalog = vec![current, close, unrelated];
    let recommender = Recommender::new(
        RecommendOptions::default().with_current_article(ArticleId::new("current")),
    );

    let results = recommender.recommend(&catalog, now()).unwrap();
    let close_rec = results.iter().find(|r| r.id.as_str() == "close").unwrap();
    let unrelated_rec = results.iter().find(|r| r.id.as_str() == "unrelated").unwrap();

    assert!(close_rec.reasons.contains(&Reason::SimilarToCurrent));
    assert!(!unrelated_rec.reasons.contains(&Reason::SimilarToCurrent));
    assert!(close_rec.score > unrelated_rec.score);
}

#[test]
fn reasons_are_capped_and_ordered_by_contribution() {
    // An article strong on every signal would earn five reasons; only the
    // three largest contributions survive.
    let loaded = Article::new(
        ArticleId::new("loaded"),
        "everything about react hooks and state",
        now(),
    )
    .with_tags(["react", "hooks"])
    .with_engagement(200_000, 9_000, 1_500)
    .with_reading_time(8);

    let catalog = vec![loaded];
    let recommender = Recommender::new(
        RecommendOptions::default().with_user_tags(["react", "hooks"]),
    );

    let results = recommender.recommend(&catalog, now()).unwrap();
    let rec = &results[0];

    assert_eq!(rec.reasons.len(), 3);

    // Strongest first: popularity 0.4*~1.0 and relevance 0.4*1.0 dominate
    // the 0.2 shared-tag bonus and the 0.2 freshness contribution; the 0.1
    // length bonus is squeezed out.
    assert!(!rec.reasons.contains(&Reason::ComfortableLength));
    assert!(rec.reasons.contains(&Reason::Trending));
    assert!(rec.reasons.contains(&Reason::MatchesInterests));
}

#[test]
fn weak_signals_produce_no_reasons() {
    let plain = Article::new(
        ArticleId::new("plain"),
        "an old unremarkable post",
        now() - Duration::days(900),
    );

    let catalog = vec![plain];
    let recommender = Recommender::new(RecommendOptions::default());

    let results = recommender.recommend(&catalog, now()).unwrap();
    assert!(results[0].reasons.is_empty());
}
