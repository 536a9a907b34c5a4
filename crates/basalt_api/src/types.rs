//! # Core Type Definitions
//!
//! Fundamental value types shared between the Basalt server and its plugins:
//! player identity, world positions, and the block/item snapshots carried by
//! interaction events.
//!
//! All types here are plain data with serde support, so hosts can log,
//! persist, or forward them without extra conversion layers.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Identity
// ============================================================================

/// Unique identifier for a player session.
///
/// A wrapper around UUID that keeps player IDs from being confused with other
/// identifiers floating around the server.
///
/// # Examples
///
/// ```rust
/// use basalt_api::PlayerId;
///
/// let player_id = PlayerId::new();
/// let parsed = PlayerId::from_str(&player_id.to_string())?;
/// assert_eq!(player_id, parsed);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub Uuid);

impl PlayerId {
    /// Creates a new random player ID using UUID v4.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parses a player ID from its string representation.
    pub fn from_str(s: &str) -> Result<Self, uuid::Error> {
        Uuid::parse_str(s).map(Self)
    }
}

impl std::str::FromStr for PlayerId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s)
    }
}

impl Default for PlayerId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// World Geometry
// ============================================================================

/// A 3D position in the game world.
///
/// Double precision throughout; world coordinates get large enough that
/// single-precision drift is visible in placement math.
///
/// # Examples
///
/// ```rust
/// use basalt_api::Position;
///
/// let a = Position::new(0.0, 64.0, 0.0);
/// let b = Position::new(3.0, 68.0, 0.0);
/// assert_eq!(a.distance(b), 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// X coordinate (east-west axis)
    pub x: f64,
    /// Y coordinate (vertical axis)
    pub y: f64,
    /// Z coordinate (north-south axis)
    pub z: f64,
}

impl Position {
    /// Creates a new position with the specified coordinates.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to another position.
    pub fn distance(&self, other: Position) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Distance to another position in the horizontal (XZ) plane, ignoring
    /// the vertical axis.
    pub fn horizontal_distance(&self, other: Position) -> f64 {
        let dx = self.x - other.x;
        let dz = self.z - other.z;
        (dx * dx + dz * dz).sqrt()
    }
}

// ============================================================================
// Interaction Payloads
// ============================================================================

/// Snapshot of the block a player interacted with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockRef {
    /// Namespaced block type, e.g. `minecraft:stone`.
    pub block_type: String,
    /// World position of the block.
    pub position: Position,
}

impl BlockRef {
    pub fn new(block_type: impl Into<String>, position: Position) -> Self {
        Self {
            block_type: block_type.into(),
            position,
        }
    }
}

/// Snapshot of an item held during an interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemStack {
    /// Namespaced item type, e.g. `minecraft:blaze_rod`.
    pub item_type: String,
}

impl ItemStack {
    pub fn new(item_type: impl Into<String>) -> Self {
        Self {
            item_type: item_type.into(),
        }
    }

    /// Whether the stack holds the given item type.
    pub fn is(&self, item_type: &str) -> bool {
        self.item_type == item_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_id_parses_its_own_display_form() {
        let id = PlayerId::new();
        let parsed = PlayerId::from_str(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn distance_handles_all_three_axes() {
        let a = Position::new(1.0, 2.0, 3.0);
        let b = Position::new(4.0, 6.0, 3.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(a.horizontal_distance(b), 3.0);
    }

    #[test]
    fn item_stack_matches_exact_type_only() {
        let rod = ItemStack::new("minecraft:blaze_rod");
        assert!(rod.is("minecraft:blaze_rod"));
        assert!(!rod.is("minecraft:stick"));
    }

    #[test]
    fn block_ref_serializes_with_nested_position() {
        let block = BlockRef::new("minecraft:stone", Position::new(10.0, 64.0, -3.5));
        let value = serde_json::to_value(&block).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "block_type": "minecraft:stone",
                "position": { "x": 10.0, "y": 64.0, "z": -3.5 }
            })
        );

        let parsed: BlockRef = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, block);
    }

    #[test]
    fn item_stack_decodes_from_json() {
        let rod: ItemStack =
            serde_json::from_str(r#"{"item_type":"minecraft:blaze_rod"}"#).unwrap();
        assert_eq!(rod, ItemStack::new("minecraft:blaze_rod"));
    }
}
