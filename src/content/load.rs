//! Parsing of the embedded content files.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::brief::Proposal;

use super::ContentError;
use super::model::{BlogPost, Profile, ProjectMeta};

pub(super) const POSTS: &str = include_str!("../../content/posts.toml");
pub(super) const PROJECTS: &str = include_str!("../../content/projects.toml");
pub(super) const PROFILE: &str = include_str!("../../content/profile.toml");
pub(super) const BRIEF: &str = include_str!("../../content/brief.toml");

#[derive(Deserialize)]
struct PostsFile {
    #[serde(default)]
    posts: Vec<BlogPost>,
}

#[derive(Deserialize)]
struct ProjectsFile {
    #[serde(default)]
    projects: Vec<ProjectMeta>,
}

fn parse<T: DeserializeOwned>(name: &'static str, src: &str) -> Result<T, ContentError> {
    toml::from_str(src).map_err(|source| ContentError::Parse { name, source })
}

pub(super) fn parse_posts(src: &str) -> Result<Vec<BlogPost>, ContentError> {
    parse::<PostsFile>("posts.toml", src).map(|f| f.posts)
}

pub(super) fn parse_projects(src: &str) -> Result<Vec<ProjectMeta>, ContentError> {
    parse::<ProjectsFile>("projects.toml", src).map(|f| f.projects)
}

pub(super) fn parse_profile(src: &str) -> Result<Profile, ContentError> {
    parse("profile.toml", src)
}

pub(super) fn parse_proposal(src: &str) -> Result<Proposal, ContentError> {
    parse("brief.toml", src)
}
