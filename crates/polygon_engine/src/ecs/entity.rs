//! Entity implementation
//!
//! An entity is a slot in the manager's slot table. The slot key
//! ([`EntityKey`]) is the handle everything else holds; the [`EntityId`] is
//! the human-facing identity, strictly increasing and never reused.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::storage::ComponentMask;

slotmap::new_key_type! {
    /// Stable handle to an entity slot.
    ///
    /// Keys of removed entities never resolve again, even when the slot is reused.
    pub struct EntityKey;
}

/// Unique, monotonically increasing entity identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Entity category used for filtering and collision dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum Tag {
    /// Untagged entity
    #[default]
    Default,
    /// The player avatar
    Player,
    /// Hostile shapes
    Enemy,
    /// Player projectiles
    Bullet,
    /// Short-lived decorative particles
    EffectEntity,
    /// The on-screen score label
    ScoreText,
}

impl Tag {
    /// Every tag, in declaration order
    pub const ALL: [Self; 6] = [
        Self::Default,
        Self::Player,
        Self::Enemy,
        Self::Bullet,
        Self::EffectEntity,
        Self::ScoreText,
    ];

    /// External name of the tag
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Player => "player",
            Self::Enemy => "enemy",
            Self::Bullet => "bullet",
            Self::EffectEntity => "effectEntity",
            Self::ScoreText => "scoreText",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a known [`Tag`]
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown entity tag: {0:?}")]
pub struct TagParseError(pub String);

impl FromStr for Tag {
    type Err = TagParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| TagParseError(s.to_string()))
    }
}

/// Identity record stored for every entity
#[derive(Debug, Clone)]
pub struct EntityRecord {
    id: EntityId,
    tag: Tag,
    active: bool,
    pub(crate) mask: ComponentMask,
}

impl EntityRecord {
    pub(super) fn new(id: EntityId, tag: Tag) -> Self {
        Self {
            id,
            tag,
            active: true,
            mask: ComponentMask::empty(),
        }
    }

    /// Get the entity ID
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Get the entity tag
    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// Whether the entity is still alive
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Components currently attached
    pub fn mask(&self) -> ComponentMask {
        self.mask
    }

    /// Mark inactive; returns true only on the first call
    pub(super) fn deactivate(&mut self) -> bool {
        std::mem::replace(&mut self.active, false)
    }
}
