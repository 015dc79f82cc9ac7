//! Content types deserialized from the site's JSON data files.
//!
//! Each file is a flat object or array of string and list-of-string fields,
//! with no versioning. Field names match the JSON keys exactly.

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Biography shown in the hero and about sections (`about.json`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct About {
    pub name: String,
    pub headline: String,
    pub short_bio: String,
    pub long_bio: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

/// A portfolio project (`portfolio.json` entry).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    /// Filter tag.
    pub category: String,
    /// Grid thumbnail; distinct from the gallery.
    pub image: String,
    pub short_desc: String,
    pub long_desc: String,
    #[serde(default)]
    pub tech: Vec<String>,
    pub link: String,
    /// Images shown in the modal, in display order.
    #[serde(default)]
    pub gallery: Vec<String>,
}

/// A certification (`certs.json` entry).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certification {
    pub id: String,
    pub name: String,
    pub issuer: String,
    /// Filter tag.
    #[serde(rename = "type")]
    pub kind: String,
    /// Grid thumbnail.
    pub image: String,
    /// Full-size certificate shown in the modal.
    pub full_image: String,
    pub description: String,
    pub link: String,
}

/// Which of the two filterable collections an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Portfolio,
    Certs,
}

impl Collection {
    pub const ALL: [Collection; 2] = [Collection::Portfolio, Collection::Certs];

    /// Parse the name used in session scripts and CLI output.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "portfolio" | "projects" => Some(Collection::Portfolio),
            "certs" | "certifications" => Some(Collection::Certs),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Collection::Portfolio => "portfolio",
            Collection::Certs => "certs",
        }
    }

    /// Placeholder shown when a filter leaves the grid empty.
    pub fn empty_message(self) -> &'static str {
        match self {
            Collection::Portfolio => "No projects found in this category.",
            Collection::Certs => "No certifications found in this category.",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Anything that can be filtered into a grid and opened in a modal.
pub trait ContentItem {
    fn id(&self) -> &str;
    /// The filter discriminator (`category` or `type`).
    fn tag(&self) -> &str;
    fn title(&self) -> &str;
    /// Images shown in the modal. Length > 1 mounts a carousel.
    fn gallery(&self) -> &[String];
}

impl ContentItem for Project {
    fn id(&self) -> &str {
        &self.id
    }

    fn tag(&self) -> &str {
        &self.category
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn gallery(&self) -> &[String] {
        &self.gallery
    }
}

impl ContentItem for Certification {
    fn id(&self) -> &str {
        &self.id
    }

    fn tag(&self) -> &str {
        &self.kind
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn gallery(&self) -> &[String] {
        std::slice::from_ref(&self.full_image)
    }
}

/// A social platform the footer knows how to present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Email,
    LinkedIn,
    GitHub,
    Kaggle,
    Medium,
}

impl Platform {
    /// Every recognized platform.
    pub const ALL: [Platform; 5] = [
        Platform::Email,
        Platform::LinkedIn,
        Platform::GitHub,
        Platform::Kaggle,
        Platform::Medium,
    ];

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }

    pub fn key(self) -> &'static str {
        match self {
            Platform::Email => "email",
            Platform::LinkedIn => "linkedin",
            Platform::GitHub => "github",
            Platform::Kaggle => "kaggle",
            Platform::Medium => "medium",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Platform::Email => "Email",
            Platform::LinkedIn => "LinkedIn",
            Platform::GitHub => "GitHub",
            Platform::Kaggle => "Kaggle",
            Platform::Medium => "Medium",
        }
    }

    /// Link target for a stored value. Emails become `mailto:` URIs.
    pub fn href(self, value: &str) -> String {
        match self {
            Platform::Email => format!("mailto:{value}"),
            _ => value.to_string(),
        }
    }
}

/// Contents of `socials.json`: platform key → URI, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Socials(Vec<(String, String)>);

impl Socials {
    /// Entries in file order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Set `key` to `value`. A repeated key keeps its first position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
    }
}

impl<'de> Deserialize<'de> for Socials {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SocialsVisitor;

        impl<'de> Visitor<'de> for SocialsVisitor {
            type Value = Socials;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping platform keys to URIs")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Socials, A::Error> {
                let mut socials = Socials::default();
                while let Some((key, value)) = map.next_entry::<String, String>()? {
                    socials.insert(key, value);
                }
                Ok(socials)
            }
        }

        deserializer.deserialize_map(SocialsVisitor)
    }
}

/// A resolved footer link.
#[derive(Debug, Clone, PartialEq)]
pub struct SocialLink {
    pub platform: Platform,
    pub href: String,
}
