//! In-memory holder of the four content collections.
//!
//! The data directory contains one JSON file per collection:
//!
//! ```text
//! data/
//! ├── about.json       # single record
//! ├── portfolio.json   # list of projects
//! ├── certs.json       # list of certifications
//! └── socials.json     # platform key → URI
//! ```
//!
//! Files are loaded in that order. Loading stops at the first failure and
//! everything loaded before it stays available; the failure is reported once
//! through [`LoadOutcome::error`]. Nothing is cached between loads and no
//! data is validated or transformed.

use crate::types::{About, Certification, Collection, ContentItem, Platform, Project, SocialLink, Socials};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, error};

/// Text of the single banner shown when any data file fails to load.
pub const LOAD_ERROR_BANNER: &str = "Error loading data. Please check console for details.";

pub const ABOUT_FILE: &str = "about.json";
pub const PORTFOLIO_FILE: &str = "portfolio.json";
pub const CERTS_FILE: &str = "certs.json";
pub const SOCIALS_FILE: &str = "socials.json";

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// The file that failed.
    pub fn path(&self) -> &Path {
        match self {
            LoadError::Io { path, .. } | LoadError::Json { path, .. } => path,
        }
    }
}

/// The four content collections. Each is independent of the others.
#[derive(Debug, Clone, Default)]
pub struct DataStore {
    pub about: Option<About>,
    pub portfolio: Vec<Project>,
    pub certs: Vec<Certification>,
    pub socials: Socials,
}

/// Result of loading a data directory: whatever loaded, plus the first
/// failure if there was one.
#[derive(Debug)]
pub struct LoadOutcome {
    pub store: DataStore,
    pub error: Option<LoadError>,
}

impl LoadOutcome {
    /// Strict view: any failure fails the whole load.
    pub fn into_result(self) -> Result<DataStore, LoadError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.store),
        }
    }
}

impl DataStore {
    /// Load all four collections from `data_dir`.
    pub fn load(data_dir: &Path) -> LoadOutcome {
        let mut store = DataStore::default();
        let error = store.load_into(data_dir).err();
        if let Some(err) = &error {
            error!(path = %err.path().display(), "{err}");
        }
        LoadOutcome { store, error }
    }

    fn load_into(&mut self, data_dir: &Path) -> Result<(), LoadError> {
        self.about = Some(read_json(&data_dir.join(ABOUT_FILE))?);
        self.portfolio = read_json(&data_dir.join(PORTFOLIO_FILE))?;
        self.certs = read_json(&data_dir.join(CERTS_FILE))?;
        self.socials = read_json(&data_dir.join(SOCIALS_FILE))?;
        Ok(())
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.portfolio.iter().find(|p| p.id == id)
    }

    pub fn certification(&self, id: &str) -> Option<&Certification> {
        self.certs.iter().find(|c| c.id == id)
    }

    /// Distinct tags of a collection in first-seen order.
    pub fn tags_of(&self, collection: Collection) -> Vec<String> {
        match collection {
            Collection::Portfolio => distinct_tags(&self.portfolio),
            Collection::Certs => distinct_tags(&self.certs),
        }
    }

    /// Footer links for recognized platforms, in file order. Unknown keys
    /// are skipped.
    pub fn social_links(&self) -> Vec<SocialLink> {
        self.socials
            .iter()
            .filter_map(|(key, value)| {
                Platform::from_key(key).map(|platform| SocialLink {
                    platform,
                    href: platform.href(value),
                })
            })
            .collect()
    }
}

fn distinct_tags<T: ContentItem>(items: &[T]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for item in items {
        if !tags.iter().any(|t| t == item.tag()) {
            tags.push(item.tag().to_string());
        }
    }
    tags
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    debug!(path = %path.display(), "loading data file");
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}
