use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read allow-list {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse allow-list {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

/// One allow-list entry. Extra fields (a reason, a ticket reference) are
/// accepted and ignored; only `link` matters.
#[derive(Debug, Deserialize)]
struct AllowEntry {
    link: String,
}

/// Links exempted from failing the build. Loaded once before scanning starts,
/// immutable afterwards, shared read-only across all concurrent scans.
///
/// Membership is exact-string match against the destination text as written in
/// the document. No normalization happens on either side, so an entry must
/// match the markdown source byte for byte.
#[derive(Debug, Clone, Default)]
pub struct AllowList {
    links: HashSet<String>,
}

impl AllowList {
    /// The fail-open default: nothing is exempted, every dead link is flagged.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load from a JSON array of objects carrying at least a `link` field.
    /// Any read or parse failure is fatal; scanning must not start with a
    /// half-understood exemption set.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let entries: Vec<AllowEntry> =
            serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
                path: path.display().to_string(),
                source,
            })?;

        let links: HashSet<String> = entries.into_iter().map(|entry| entry.link).collect();
        info!("Loaded {} allow-list entries from {}", links.len(), path.display());

        Ok(Self { links })
    }

    pub fn contains(&self, link: &str) -> bool {
        self.links.contains(link)
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}
