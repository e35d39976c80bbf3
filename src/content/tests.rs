use super::load::{BRIEF, PROFILE, PROJECTS};
use super::*;

fn store_with_posts(posts: &str) -> Result<ContentStore, ContentError> {
    ContentStore::from_sources(posts, PROJECTS, PROFILE, BRIEF)
}

const TWO_POSTS: &str = r#"
[[posts]]
slug = "older"
published_at = "2023-01-01T00:00:00Z"
title = { en = "Older", es = "Más antiguo" }
description = { en = "d", es = "d" }

[[posts]]
slug = "newer"
published_at = "2024-01-01T00:00:00Z"
tags = ["b", "a"]
title = { en = "Newer", es = "Más nuevo" }
description = { en = "d", es = "d" }

[[posts.blocks]]
type = "paragraph"
text = { en = "Hello", es = "Hola" }

[[posts.blocks]]
type = "video"
src = "clip.mp4"
"#;

#[test]
fn embedded_content_loads_and_validates() {
    let store = ContentStore::load_embedded().unwrap();
    assert!(store.post_count() > 0);
    assert!(!store.projects().is_empty());
    assert!(!store.profile().workflow.is_empty());
    assert!(store.proposal().total() > 0);
}

#[test]
fn get_post_returns_none_for_unknown_slug() {
    let store = store_with_posts(TWO_POSTS).unwrap();
    assert!(store.get_post("newer").is_some());
    assert!(store.get_post("does-not-exist").is_none());
}

#[test]
fn summaries_are_sorted_newest_first() {
    let store = store_with_posts(TWO_POSTS).unwrap();
    let slugs: Vec<&str> = store.list_summaries().iter().map(|s| s.slug).collect();
    assert_eq!(slugs, vec!["newer", "older"]);
}

#[test]
fn summaries_with_equal_dates_are_ordered_by_slug() {
    let posts = r#"
[[posts]]
slug = "b"
published_at = "2024-01-01T00:00:00Z"
title = { en = "B", es = "B" }
description = { en = "d", es = "d" }

[[posts]]
slug = "a"
published_at = "2024-01-01T00:00:00Z"
title = { en = "A", es = "A" }
description = { en = "d", es = "d" }
"#;
    let store = store_with_posts(posts).unwrap();
    let slugs: Vec<&str> = store.list_summaries().iter().map(|s| s.slug).collect();
    assert_eq!(slugs, vec!["a", "b"]);
}

#[test]
fn unknown_block_types_parse_as_unknown() {
    let store = store_with_posts(TWO_POSTS).unwrap();
    let post = store.get_post("newer").unwrap();
    assert_eq!(post.blocks.len(), 2);
    assert_eq!(post.blocks[1], ContentBlock::Unknown);
    assert!(post.tags.contains("a"));
}

#[test]
fn missing_translation_is_rejected_at_load() {
    let posts = r#"
[[posts]]
slug = "half"
published_at = "2024-01-01T00:00:00Z"
title = { en = "Only English" }
description = { en = "d", es = "d" }
"#;
    match store_with_posts(posts) {
        Err(ContentError::MissingTranslation { context, language }) => {
            assert_eq!(language, Language::Es);
            assert!(context.contains("half"));
        }
        other => panic!("expected MissingTranslation, got {other:?}"),
    }
}

#[test]
fn blank_translation_inside_a_block_is_rejected() {
    let posts = r#"
[[posts]]
slug = "blank"
published_at = "2024-01-01T00:00:00Z"
title = { en = "T", es = "T" }
description = { en = "d", es = "d" }

[[posts.blocks]]
type = "list"
items = [ { en = "one", es = "uno" }, { en = "two", es = "   " } ]
"#;
    let err = store_with_posts(posts).unwrap_err();
    assert!(err.to_string().contains("block 1 (list)"));
}

#[test]
fn duplicate_and_malformed_slugs_are_rejected() {
    let dup = r#"
[[posts]]
slug = "same"
published_at = "2024-01-01T00:00:00Z"
title = { en = "T", es = "T" }
description = { en = "d", es = "d" }

[[posts]]
slug = "same"
published_at = "2024-02-01T00:00:00Z"
title = { en = "T", es = "T" }
description = { en = "d", es = "d" }
"#;
    assert!(matches!(
        store_with_posts(dup),
        Err(ContentError::DuplicateSlug(s)) if s == "same"
    ));

    let bad = r#"
[[posts]]
slug = "Has Spaces"
published_at = "2024-01-01T00:00:00Z"
title = { en = "T", es = "T" }
description = { en = "d", es = "d" }
"#;
    assert!(matches!(
        store_with_posts(bad),
        Err(ContentError::InvalidSlug(_))
    ));
}

#[test]
fn heading_level_out_of_range_is_rejected() {
    let posts = r#"
[[posts]]
slug = "deep"
published_at = "2024-01-01T00:00:00Z"
title = { en = "T", es = "T" }
description = { en = "d", es = "d" }

[[posts.blocks]]
type = "heading"
level = 7
text = { en = "Deep", es = "Profundo" }
"#;
    assert!(matches!(
        store_with_posts(posts),
        Err(ContentError::InvalidHeadingLevel { level: 7, .. })
    ));
}

#[test]
fn parse_errors_name_the_file() {
    let err = store_with_posts("posts = 3").unwrap_err();
    assert!(err.to_string().starts_with("failed to parse posts.toml"));
}

#[test]
fn language_codes_are_a_closed_set() {
    assert_eq!(Language::from_code("es"), Some(Language::Es));
    assert_eq!(Language::from_code(" EN "), Some(Language::En));
    assert_eq!(Language::from_code("fr"), None);
    assert_eq!(Language::En.toggled(), Language::Es);
    assert_eq!(Language::default(), Language::En);
}

#[test]
fn localized_reports_missing_languages() {
    let full = Localized::new("a", "b");
    assert_eq!(full.missing().count(), 0);
    assert_eq!(full.get(Language::Es), "b");

    let empty = Localized::default();
    assert_eq!(empty.get(Language::En), "");
    assert_eq!(empty.missing().collect::<Vec<_>>(), Language::ALL.to_vec());
}
