use std::collections::HashMap;

use parking_lot::RwLock;

/// A viewer's vote on a comment, either as recorded by the server at fetch
/// time or as applied locally and not yet synced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VoteDirection {
    Up,
    Down,
    #[default]
    None,
}

impl VoteDirection {
    pub fn from_likes(likes: Option<bool>) -> Self {
        match likes {
            Some(true) => VoteDirection::Up,
            Some(false) => VoteDirection::Down,
            None => VoteDirection::None,
        }
    }

    pub fn as_likes(self) -> Option<bool> {
        match self {
            VoteDirection::Up => Some(true),
            VoteDirection::Down => Some(false),
            VoteDirection::None => None,
        }
    }

    pub fn delta(self) -> i64 {
        match self {
            VoteDirection::Up => 1,
            VoteDirection::Down => -1,
            VoteDirection::None => 0,
        }
    }
}

/// Manual collapse override set by the viewer, taking priority over every
/// automatic collapse rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HideOverride {
    ForcedHidden,
    ForcedShown,
    #[default]
    Unset,
}

impl HideOverride {
    pub fn as_collapsed(self) -> Option<bool> {
        match self {
            HideOverride::ForcedHidden => Some(true),
            HideOverride::ForcedShown => Some(false),
            HideOverride::Unset => None,
        }
    }

    pub fn from_collapsed(collapsed: Option<bool>) -> Self {
        match collapsed {
            Some(true) => HideOverride::ForcedHidden,
            Some(false) => HideOverride::ForcedShown,
            None => HideOverride::Unset,
        }
    }
}

/// A consistent point-in-time view of the overlay state for one comment.
/// Fetched once per render pass and handed to every consumer of that pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverlaySnapshot {
    pub vote: VoteDirection,
    pub hide: HideOverride,
}

/// Read access to locally tracked per-comment state, keyed by fullname
/// (e.g. "t1_abc123").
pub trait ChangeOverlay: Send + Sync {
    fn vote_direction(&self, fullname: &str) -> VoteDirection;
    fn hide_override(&self, fullname: &str) -> HideOverride;

    fn snapshot(&self, fullname: &str) -> OverlaySnapshot {
        OverlaySnapshot {
            vote: self.vote_direction(fullname),
            hide: self.hide_override(fullname),
        }
    }
}

/// In-process overlay store. Written by vote and fold actions, read
/// concurrently by render passes.
#[derive(Debug, Default)]
pub struct MemoryOverlay {
    entries: RwLock<HashMap<String, OverlaySnapshot>>,
}

impl MemoryOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_vote(&self, fullname: &str, vote: VoteDirection) {
        let mut entries = self.entries.write();
        entries.entry(fullname.to_string()).or_default().vote = vote;
    }

    /// Applies a vote request the way a vote keybinding does: requesting the
    /// direction already in place retracts it.
    pub fn toggle_vote(&self, fullname: &str, requested: VoteDirection) -> VoteDirection {
        let mut entries = self.entries.write();
        let entry = entries.entry(fullname.to_string()).or_default();
        entry.vote = if entry.vote == requested {
            VoteDirection::None
        } else {
            requested
        };
        entry.vote
    }

    pub fn set_hidden(&self, fullname: &str, hidden: Option<bool>) {
        let mut entries = self.entries.write();
        entries.entry(fullname.to_string()).or_default().hide =
            HideOverride::from_collapsed(hidden);
    }

    pub fn clear(&self, fullname: &str) {
        self.entries.write().remove(fullname);
    }
}

impl ChangeOverlay for MemoryOverlay {
    fn vote_direction(&self, fullname: &str) -> VoteDirection {
        self.entries
            .read()
            .get(fullname)
            .map(|entry| entry.vote)
            .unwrap_or_default()
    }

    fn hide_override(&self, fullname: &str) -> HideOverride {
        self.entries
            .read()
            .get(fullname)
            .map(|entry| entry.hide)
            .unwrap_or_default()
    }
}
