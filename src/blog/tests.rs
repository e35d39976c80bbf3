use ratatui::text::Line;

use super::*;
use crate::content::{ContentBlock, Language, Localized};
use crate::storage::{LANGUAGE_KEY, MemoryStorage, Preferences};
use crate::theme::Palette;

fn plain(lines: &[Line<'_>]) -> Vec<String> {
    lines
        .iter()
        .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
        .collect()
}

fn sample_blocks() -> Vec<ContentBlock> {
    vec![
        ContentBlock::Heading {
            level: 2,
            text: Localized::new("Intro", "Introducción"),
        },
        ContentBlock::Unknown,
        ContentBlock::Paragraph {
            text: Localized::new("Hello", "Hola"),
        },
        ContentBlock::List {
            ordered: true,
            items: vec![Localized::new("one", "uno"), Localized::new("two", "dos")],
        },
        ContentBlock::Quote {
            text: Localized::new("Less is more", "Menos es más"),
            attribution: Some("Mies".into()),
        },
        ContentBlock::Code {
            code: "fn main() {}\n".into(),
            language: Some("rust".into()),
        },
        ContentBlock::Image {
            src: "images/a.png".into(),
            alt: Localized::new("A cat", "Un gato"),
            caption: Some(Localized::new("Our cat", "Nuestro gato")),
        },
    ]
}

#[test]
fn renders_every_block_type_in_source_order() {
    let lines = render_blocks(&sample_blocks(), Language::En, &Palette::dark());
    assert_eq!(
        plain(&lines),
        vec![
            "## Intro",
            "",
            "Hello",
            "",
            "  1. one",
            "  2. two",
            "",
            "│ Less is more",
            "│ — Mies",
            "",
            "  [rust]",
            "    fn main() {}",
            "",
            "[image: A cat] (images/a.png)",
            "Our cat",
        ]
    );
}

#[test]
fn rendering_uses_the_selected_language_only() {
    let lines = plain(&render_blocks(
        &sample_blocks(),
        Language::Es,
        &Palette::dark(),
    ));
    assert_eq!(lines[0], "## Introducción");
    assert!(lines.contains(&"  2. dos".to_string()));
    assert!(lines.contains(&"[image: Un gato] (images/a.png)".to_string()));
    assert!(!lines.iter().any(|l| l.contains("Hello")));
}

#[test]
fn rendering_is_pure_and_independent_of_neighbours() {
    let blocks = sample_blocks();
    let palette = Palette::light();

    let first = render_blocks(&blocks, Language::Es, &palette);
    let _ = render_blocks(&blocks, Language::En, &palette);
    let second = render_blocks(&blocks, Language::Es, &palette);
    assert_eq!(first, second);

    // Each block renders the same on its own as inside the sequence.
    for block in &blocks {
        let alone = render_block(block, Language::Es, &palette);
        let again = render_block(block, Language::Es, &palette);
        assert_eq!(alone, again);
    }
}

#[test]
fn unknown_blocks_render_nothing() {
    let palette = Palette::dark();
    assert!(render_block(&ContentBlock::Unknown, Language::En, &palette).is_empty());
    assert!(render_blocks(&[ContentBlock::Unknown], Language::En, &palette).is_empty());
}

#[test]
fn unordered_list_and_quote_without_attribution() {
    let blocks = vec![
        ContentBlock::List {
            ordered: false,
            items: vec![Localized::new("a", "a")],
        },
        ContentBlock::Quote {
            text: Localized::new("q", "q"),
            attribution: None,
        },
    ];
    assert_eq!(
        plain(&render_blocks(&blocks, Language::En, &Palette::dark())),
        vec!["  • a", "", "│ q"]
    );
}

#[test]
fn explicit_language_wins_over_stored_preference() {
    let prefs = Preferences::new(MemoryStorage::default().with(LANGUAGE_KEY, "es"));
    assert_eq!(resolve_language(None, &prefs), Language::Es);
    assert_eq!(resolve_language(Some(Language::En), &prefs), Language::En);
}

#[test]
fn invalid_or_missing_preference_falls_back_to_english() {
    let prefs = Preferences::new(MemoryStorage::default().with(LANGUAGE_KEY, "klingon"));
    assert_eq!(resolve_language(None, &prefs), Language::En);
    assert_eq!(resolve_language(None, &Preferences::session_only()), Language::En);
}

#[test]
fn selection_persists_initial_choice_and_toggles() {
    let mut prefs = Preferences::session_only();
    let mut selection = LanguageSelection::init(Some(Language::Es), &mut prefs);
    assert_eq!(selection.current(), Language::Es);
    assert_eq!(prefs.get(LANGUAGE_KEY).as_deref(), Some("es"));

    assert_eq!(selection.toggle(&mut prefs), Language::En);
    assert_eq!(prefs.get(LANGUAGE_KEY).as_deref(), Some("en"));
}
