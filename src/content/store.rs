use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use crate::brief::Proposal;

use super::ContentError;
use super::load;
use super::model::{BlogPost, Localized, Profile, ProjectMeta};
use super::validate;

/// Listing data for one post.
#[derive(Debug, Clone, PartialEq)]
pub struct PostSummary<'a> {
    pub slug: &'a str,
    pub title: &'a Localized,
    pub description: &'a Localized,
    pub published_at: DateTime<Utc>,
    pub tags: &'a BTreeSet<String>,
}

/// Read-only store of everything the pages render.
#[derive(Debug, Clone)]
pub struct ContentStore {
    posts: Vec<BlogPost>,
    projects: Vec<ProjectMeta>,
    profile: Profile,
    proposal: Proposal,
}

impl ContentStore {
    /// Build a store, rejecting incomplete or inconsistent content.
    pub fn new(
        posts: Vec<BlogPost>,
        projects: Vec<ProjectMeta>,
        profile: Profile,
        proposal: Proposal,
    ) -> Result<Self, ContentError> {
        validate::validate_posts(&posts)?;
        validate::validate_projects(&projects)?;
        validate::validate_profile(&profile)?;

        Ok(Self {
            posts,
            projects,
            profile,
            proposal,
        })
    }

    /// Parse content from TOML sources.
    pub fn from_sources(
        posts: &str,
        projects: &str,
        profile: &str,
        proposal: &str,
    ) -> Result<Self, ContentError> {
        Self::new(
            load::parse_posts(posts)?,
            load::parse_projects(projects)?,
            load::parse_profile(profile)?,
            load::parse_proposal(proposal)?,
        )
    }

    /// The content compiled into this binary.
    pub fn load_embedded() -> Result<Self, ContentError> {
        Self::from_sources(load::POSTS, load::PROJECTS, load::PROFILE, load::BRIEF)
    }

    /// Fetch one post by slug.
    pub fn get_post(&self, slug: &str) -> Option<&BlogPost> {
        self.posts.iter().find(|p| p.slug == slug)
    }

    /// All posts, newest first. Posts published at the same instant are
    /// ordered by slug so the listing is stable.
    pub fn list_summaries(&self) -> Vec<PostSummary<'_>> {
        let mut summaries: Vec<PostSummary<'_>> = self
            .posts
            .iter()
            .map(|p| PostSummary {
                slug: &p.slug,
                title: &p.title,
                description: &p.description,
                published_at: p.published_at,
                tags: &p.tags,
            })
            .collect();
        summaries.sort_by(|a, b| {
            b.published_at
                .cmp(&a.published_at)
                .then_with(|| a.slug.cmp(b.slug))
        });
        summaries
    }

    pub fn post_count(&self) -> usize {
        self.posts.len()
    }

    pub fn projects(&self) -> &[ProjectMeta] {
        &self.projects
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn proposal(&self) -> &Proposal {
        &self.proposal
    }
}
