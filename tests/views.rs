use chrono::{DateTime, Duration, TimeZone, Utc};

use recommend_core::article::Article;
use recommend_core::ranking::{latest_posts, personalized_recommendations, popular_posts, related_posts};
use recommend_core::types::{ArticleId, UserContext};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

fn make_article(id: &str, days_old: i64) -> Article {
    Article::new(
        ArticleId::new(id),
        format!("body of {id}"),
        now() - Duration::days(days_old),
    )
}

#[test]
fn popular_posts_sort_by_engagement_alone() {
    let catalog = vec![
        make_article("quiet", 1),
        make_article("loud", 300).with_engagement(50_000, 2_000, 400),
        make_article("modest", 5).with_engagement(200, 15, 2),
    ];

    let ranked = popular_posts(&catalog, 2);
    let ids: Vec<&str> = ranked.iter().map(|r| r.article.id.as_str()).collect();
    assert_eq!(ids, ["loud", "modest"]);
    assert!(ranked[0].score > ranked[1].score);
}

#[test]
fn latest_posts_sort_by_publish_date_alone() {
    let catalog = vec![
        make_article("middle", 10).with_engagement(90_000, 5_000, 800),
        make_article("oldest", 200),
        make_article("newest", 0),
    ];

    let ranked = latest_posts(&catalog, 3);
    let ids: Vec<&str> = ranked.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, ["newest", "middle", "oldest"]);
}

#[test]
fn related_posts_exclude_the_target_and_favor_overlap() {
    let target = Article::new(
        ArticleId::new("target"),
        "async runtimes schedule tasks onto worker threads",
        now() - Duration::days(3),
    )
    .with_tags(["rust", "async"]);

    let mut twin = make_article("twin", 30).with_tags(["rust", "async"]);
    twin.content = "worker threads and how async runtimes schedule tasks".to_string();

    let stranger = make_article("stranger", 1).with_tags(["gardening"]);
    let echo = make_article("target", 3).with_tags(["rust", "async"]);

    let candidates = vec![stranger, twin, echo];
    let ranked = related_posts(&target, &candidates, 5);

    assert!(ranked.iter().all(|r| r.article.id.as_str() != "target"));
    assert_eq!(ranked[0].article.id.as_str(), "twin");
    assert!(ranked[0].score > ranked[1].score);
}

#[test]
fn personalized_never_returns_viewed_articles() {
    let catalog = vec![
        make_article("x", 1).with_tags(["rust"]).with_category("systems"),
        make_article("y", 2).with_tags(["rust"]),
        make_article("z", 3).with_tags(["cooking"]),
    ];

    let context = UserContext {
        viewed: vec![ArticleId::new("x")],
        tag_affinities: vec!["rust".to_string()],
        preferred_reading_minutes: None,
        preferred_categories: vec!["systems".to_string()],
    };

    let ranked = personalized_recommendations(&catalog, &context, now(), 10);
    assert!(ranked.iter().all(|r| r.article.id.as_str() != "x"));
    assert_eq!(ranked.len(), 2);
}

#[test]
fn personalized_blend_weighs_demonstrated_preference() {
    let catalog = vec![
        make_article("on-topic", 60)
            .with_tags(["rust"])
            .with_reading_time(10)
            .with_category("systems"),
        make_article("fresh-but-off-topic", 0).with_tags(["gossip"]),
    ];

    let context = UserContext {
        viewed: Vec::new(),
        tag_affinities: vec!["rust".to_string()],
        preferred_reading_minutes: Some(10),
        preferred_categories: vec!["Systems".to_string()],
    };

    let ranked = personalized_recommendations(&catalog, &context, now(), 2);
    let ids: Vec<&str> = ranked.iter().map(|r| r.article.id.as_str()).collect();
    // 0.4 + 0.2 + 0.3 + small freshness beats freshness-only 0.1.
    assert_eq!(ids, ["on-topic", "fresh-but-off-topic"]);
}

#[test]
fn reading_time_preference_falls_off_linearly() {
    let near = make_article("near", 5).with_tags(["rust"]).with_reading_time(12);
    let far = make_article("far", 5).with_tags(["rust"]).with_reading_time(45);
    let catalog = vec![far, near];

    let context = UserContext {
        viewed: Vec::new(),
        tag_affinities: vec!["rust".to_string()],
        preferred_reading_minutes: Some(10),
        preferred_categories: Vec::new(),
    };

    let ranked = personalized_recommendations(&catalog, &context, now(), 2);
    assert_eq!(ranked[0].article.id.as_str(), "near");
    // 45 minutes is outside the 20-minute window entirely.
    assert!(ranked[0].score - ranked[1].score > 0.15);
}
