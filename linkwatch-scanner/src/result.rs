use serde::{Deserialize, Serialize};

/// Reachability verdict for a single link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkStatus {
    Alive,
    Dead,
}

/// One checked link from a document.
///
/// `link` is the destination text exactly as written in the source document,
/// never the resolved URL. Allow-list matching downstream is exact-string and
/// depends on this.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkRecord {
    pub link: String,
    pub status: LinkStatus,
}

impl LinkRecord {
    pub fn new(link: String, status: LinkStatus) -> Self {
        Self { link, status }
    }

    pub fn is_dead(&self) -> bool {
        self.status == LinkStatus::Dead
    }
}
