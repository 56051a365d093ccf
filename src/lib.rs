//! A small client for a GitHub organization's public repositories.
//!
//! [`GithubOrgClient`] fetches an organization's metadata once, follows its
//! `repos_url`, and lists repository names, optionally filtered by license
//! key. The helpers it is built from ([`access_nested_map`], [`get_json`],
//! [`Memoized`]) are exported for direct use.

pub mod config;
pub mod error;
pub mod github;
pub mod memoize;
pub mod utils;

pub use error::{Error, Result};
pub use github::{get_json, GithubClient, GithubOrgClient, JsonFetcher};
pub use memoize::Memoized;
pub use utils::access_nested_map;
