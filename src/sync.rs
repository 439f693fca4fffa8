//! Per-page drawing content shared with the presenter/viewer replication layer.
//!
//! The store is single-writer at any instant: the presenter sends its local
//! drawings, viewers receive the presenter's. The direction is one value, so the
//! `send` and `receive` flags the replication layer reads can never disagree.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

/// Slide/page identifier used as the content key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(pub String);

impl From<&str> for PageId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<u32> for PageId {
    fn from(value: u32) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which side of the replication channel the local session is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncDirection {
    /// Nothing flows yet; the initial state before any role is applied.
    Idle,
    /// Local drawings are authoritative and pushed to viewers.
    Send,
    /// Remote drawings are accepted and rendered locally.
    Receive,
}

/// Replicated drawing state: content per page plus the transfer direction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncState {
    pages: BTreeMap<PageId, String>,
    direction: SyncDirection,
}

/// Shared handle to [`SyncState`], held by the controller and the replication layer.
pub type SharedSyncState = Rc<RefCell<SyncState>>;

impl Default for SyncState {
    fn default() -> Self {
        Self::new()
    }
}

impl SyncState {
    /// Creates an empty store that neither sends nor receives.
    pub fn new() -> Self {
        Self {
            pages: BTreeMap::new(),
            direction: SyncDirection::Idle,
        }
    }

    pub fn shared() -> SharedSyncState {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Applies the local role: presenters send, everyone else receives.
    pub fn set_role(&mut self, is_presenter: bool) {
        let direction = if is_presenter {
            SyncDirection::Send
        } else {
            SyncDirection::Receive
        };
        if self.direction != direction {
            info!("Drawing sync direction {:?} -> {:?}", self.direction, direction);
        }
        self.direction = direction;
    }

    pub fn direction(&self) -> SyncDirection {
        self.direction
    }

    /// Local content should be pushed to the replication channel.
    pub fn send(&self) -> bool {
        self.direction == SyncDirection::Send
    }

    /// Remote content should be accepted from the replication channel.
    pub fn receive(&self) -> bool {
        self.direction == SyncDirection::Receive
    }

    /// Serialized content for a page, if any was ever written.
    pub fn content(&self, page: &PageId) -> Option<&str> {
        self.pages.get(page).map(String::as_str)
    }

    pub fn set_content(&mut self, page: PageId, content: String) {
        debug!("Page {} content updated ({} bytes)", page, content.len());
        self.pages.insert(page, content);
    }

    pub fn pages(&self) -> impl Iterator<Item = (&PageId, &str)> {
        self.pages.iter().map(|(page, content)| (page, content.as_str()))
    }
}
