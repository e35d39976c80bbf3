use super::*;

#[test]
fn parses_known_paths() {
    assert_eq!(Route::parse("/"), Route::Home);
    assert_eq!(Route::parse(""), Route::Home);
    assert_eq!(Route::parse("/brief"), Route::Brief);
    assert_eq!(
        Route::parse("/blog/"),
        Route::Blog {
            post: None,
            lang: None
        }
    );
}

#[test]
fn parses_post_and_language_query() {
    assert_eq!(
        Route::parse("/blog?post=hello-world&lang=es"),
        Route::Blog {
            post: Some("hello-world".into()),
            lang: Some(Language::Es),
        }
    );
}

#[test]
fn ignores_unknown_keys_and_unsupported_languages() {
    assert_eq!(
        Route::parse("/blog?utm_source=x&lang=fr&post="),
        Route::Blog {
            post: None,
            lang: None
        }
    );
}

#[test]
fn unknown_paths_fall_back_to_home() {
    assert_eq!(Route::parse("/nope?post=x"), Route::Home);
}

#[test]
fn path_without_leading_slash_is_accepted() {
    assert_eq!(Route::parse("brief"), Route::Brief);
}

#[test]
fn canonical_path_reparses_to_the_same_route() {
    let route = Route::Blog {
        post: Some("a-quiet-playlist-for-deep-work".into()),
        lang: Some(Language::En),
    };
    assert_eq!(
        route.to_path(),
        "/blog?post=a-quiet-playlist-for-deep-work&lang=en"
    );
    assert_eq!(Route::parse(&route.to_path()), route);
    assert_eq!(route.lang(), Some(Language::En));
    assert_eq!(Route::Home.to_string(), "/");
}
