//! # Player Interface
//!
//! The host-owned view of a connected player that plugins are handed inside
//! events and context queries. Plugins never construct these; the host keeps
//! the backing session alive for at least the duration of any callback the
//! player object is passed to.

use crate::types::{PlayerId, Position};
use std::fmt::Debug;

/// Permission node granting operator capabilities.
///
/// Checked before a player receives performance reports or may trigger
/// privileged plugin actions.
pub const OP_PERMISSION: &str = "op";

/// A connected player session.
///
/// All accessors are synchronous snapshots taken on the dispatch thread;
/// `send_message` queues a chat line on the player's connection and returns
/// immediately.
pub trait Player: Send + Sync + Debug {
    /// Stable identifier for this session.
    fn id(&self) -> PlayerId;

    /// Display name, as shown in chat and logs.
    fn name(&self) -> &str;

    /// Whether the player's permission set includes the given node.
    fn has_permission(&self, node: &str) -> bool;

    /// Whether the player is currently in the sneaking/crouching posture.
    fn is_sneaking(&self) -> bool;

    /// Current world position.
    fn position(&self) -> Position;

    /// Queues a chat message for delivery to this player.
    fn send_message(&self, message: &str);
}
