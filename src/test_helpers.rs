//! Shared test utilities for the folio test suite.
//!
//! Provides item builders, an in-memory sample store, and fixture setup for
//! tests that read a site directory from disk.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let store = sample_store();
//! assert_eq!(project_ids(&store), vec!["a", "b", "c"]);
//!
//! let tmp = setup_fixtures();
//! let outcome = DataStore::load(&tmp.path().join("data"));
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::store::DataStore;
use crate::types::{About, Certification, Project};

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/site/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/site");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

// =========================================================================
// Builders
// =========================================================================

/// A project with no tech and no gallery.
pub fn project(id: &str, category: &str) -> Project {
    Project {
        id: id.to_string(),
        title: format!("Project {id}"),
        category: category.to_string(),
        image: format!("img/{id}-thumb.png"),
        short_desc: format!("Short description of {id}"),
        long_desc: format!("Long description of {id}"),
        tech: Vec::new(),
        link: format!("https://example.com/{id}"),
        gallery: Vec::new(),
    }
}

pub fn project_with_gallery(id: &str, category: &str, gallery: &[&str]) -> Project {
    Project {
        gallery: gallery.iter().map(|s| s.to_string()).collect(),
        ..project(id, category)
    }
}

/// A certification issued by `"Issuer"`.
pub fn cert(id: &str, kind: &str, full_image: &str) -> Certification {
    Certification {
        id: id.to_string(),
        name: format!("Certificate {id}"),
        issuer: "Issuer".to_string(),
        kind: kind.to_string(),
        image: format!("img/{id}-thumb.png"),
        full_image: full_image.to_string(),
        description: format!("What {id} certifies"),
        link: format!("https://example.com/{id}"),
    }
}

/// Portfolio `a:Web` (3 images), `b:ML` (1 image), `c:Web` (2 images);
/// certifications `c1:Cloud`, `c2:Data`.
pub fn sample_store() -> DataStore {
    let mut store = DataStore {
        about: Some(About {
            name: "Test Person".to_string(),
            headline: "Engineer".to_string(),
            short_bio: "Short bio".to_string(),
            long_bio: "Long bio".to_string(),
            skills: vec!["Rust".to_string()],
        }),
        portfolio: vec![
            project_with_gallery("a", "Web", &["a1.png", "a2.png", "a3.png"]),
            project_with_gallery("b", "ML", &["b1.png"]),
            project_with_gallery("c", "Web", &["c1.png", "c2.png"]),
        ],
        certs: vec![
            cert("c1", "Cloud", "c1-full.png"),
            cert("c2", "Data", "c2-full.png"),
        ],
        ..DataStore::default()
    };
    store
        .socials
        .insert("github".to_string(), "https://github.com/test".to_string());
    store
}

// =========================================================================
// Extractors
// =========================================================================

/// All project ids in store order.
pub fn project_ids(store: &DataStore) -> Vec<&str> {
    store.portfolio.iter().map(|p| p.id.as_str()).collect()
}
