//! Stable node identities
//!
//! A node's identity is derived from its semantic content only: the title plus a
//! [`Discriminator`] describing what kind of declaration produced it. The tree is
//! rebuilt on every render pass and on every keystroke of a search, so the same
//! declaration must always map to the same [`NodeId`] for registry lookups to
//! succeed across passes.
//!
//! Identities are name-based (v5) UUIDs under a fixed namespace. Collisions only
//! cause one node's search view to shadow another's.

use serde::{Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

/// Namespace under which all node identities are derived
const NODE_NAMESPACE: Uuid = Uuid::from_u128(0x5d1f_3c6e_9a4b_4f0e_8c2d_7b1a_6e3f_9d40);

/// Separator between the title and the discriminator in the hashed name
const FIELD_SEPARATOR: u8 = 0x1f;

/// The non-title half of an identity input
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Discriminator {
    /// A declared group, optionally distinguished by its icon symbol
    Group { icon: Option<String> },
    /// A declared item, optionally distinguished by a settings key
    Item { key: Option<String> },
    /// A custom group whose content is an arbitrary view
    Custom,
    /// A raw view explicitly opted into search
    Indexed,
}

impl Discriminator {
    /// Group discriminator from an optional icon symbol name
    #[must_use]
    pub fn group(icon: Option<&str>) -> Self {
        Self::Group {
            icon: icon.map(str::to_string),
        }
    }

    /// Item discriminator from an optional settings key
    #[must_use]
    pub fn item(key: Option<&str>) -> Self {
        Self::Item {
            key: key.map(str::to_string),
        }
    }

    fn encode(&self) -> String {
        match self {
            Self::Group { icon: Some(icon) } => format!("group:{icon}"),
            Self::Group { icon: None } => "group".to_string(),
            Self::Item { key: Some(key) } => format!("item:{key}"),
            Self::Item { key: None } => "item".to_string(),
            Self::Custom => "custom".to_string(),
            Self::Indexed => "indexed".to_string(),
        }
    }
}

/// Opaque 128-bit identity of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(Uuid);

impl NodeId {
    /// Derive the identity for a `(title, discriminator)` pair
    ///
    /// The result depends on nothing but the two inputs.
    ///
    /// # Examples
    /// ```
    /// # use trellis::node::{Discriminator, NodeId};
    /// let a = NodeId::derive("Wi-Fi", &Discriminator::item(None));
    /// let b = NodeId::derive("Wi-Fi", &Discriminator::item(None));
    /// assert_eq!(a, b);
    /// assert_ne!(a, NodeId::derive("Wi-Fi", &Discriminator::Indexed));
    /// ```
    #[must_use]
    pub fn derive(title: &str, discriminator: &Discriminator) -> Self {
        let encoded = discriminator.encode();
        let mut name = Vec::with_capacity(title.len() + encoded.len() + 1);
        name.extend_from_slice(title.as_bytes());
        name.push(FIELD_SEPARATOR);
        name.extend_from_slice(encoded.as_bytes());

        Self(Uuid::new_v5(&NODE_NAMESPACE, &name))
    }

    /// The identity as a raw 128-bit value
    #[must_use]
    pub const fn as_u128(&self) -> u128 {
        self.0.as_u128()
    }

    /// Short, human readable prefix for logs and tree dumps
    #[must_use]
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_string()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl Serialize for NodeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
