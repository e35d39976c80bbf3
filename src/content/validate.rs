//! Load-time checks that keep half-translated or malformed content out of
//! the store.

use std::collections::BTreeSet;

use super::ContentError;
use super::model::{BlogPost, Localized, Profile, ProjectMeta};

fn require_all(context: impl Fn() -> String, value: &Localized) -> Result<(), ContentError> {
    match value.missing().next() {
        Some(language) => Err(ContentError::MissingTranslation {
            context: context(),
            language,
        }),
        None => Ok(()),
    }
}

fn is_url_safe(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

pub(super) fn validate_posts(posts: &[BlogPost]) -> Result<(), ContentError> {
    let mut seen = BTreeSet::new();
    for post in posts {
        let slug = post.slug.as_str();
        if !is_url_safe(slug) {
            return Err(ContentError::InvalidSlug(slug.to_string()));
        }
        if !seen.insert(slug) {
            return Err(ContentError::DuplicateSlug(slug.to_string()));
        }

        require_all(|| format!("post `{slug}` title"), &post.title)?;
        require_all(|| format!("post `{slug}` description"), &post.description)?;

        for (i, block) in post.blocks.iter().enumerate() {
            let context = || format!("post `{slug}` block {} ({})", i + 1, block.kind());
            if let super::ContentBlock::Heading { level, .. } = block {
                if !(1..=6).contains(level) {
                    return Err(ContentError::InvalidHeadingLevel {
                        context: context(),
                        level: *level,
                    });
                }
            }
            for field in block.localized_fields() {
                require_all(&context, field)?;
            }
        }
    }
    Ok(())
}

pub(super) fn validate_projects(projects: &[ProjectMeta]) -> Result<(), ContentError> {
    for project in projects {
        require_all(
            || format!("project `{}` description", project.title),
            &project.description,
        )?;
    }
    Ok(())
}

pub(super) fn validate_profile(profile: &Profile) -> Result<(), ContentError> {
    require_all(|| "profile headline".to_string(), &profile.headline)?;
    require_all(|| "profile tagline".to_string(), &profile.tagline)?;
    for (i, paragraph) in profile.about.iter().enumerate() {
        require_all(|| format!("about paragraph {}", i + 1), paragraph)?;
    }
    for (i, step) in profile.workflow.iter().enumerate() {
        require_all(|| format!("workflow step {} title", i + 1), &step.title)?;
        require_all(|| format!("workflow step {} detail", i + 1), &step.detail)?;
    }
    Ok(())
}
