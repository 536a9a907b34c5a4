//! Debounced TNT spawn around a sneaking operator.

use crate::config::PerformanceConfig;
use basalt_api::{
    color, EventError, PlayerId, PlayerInteractEvent, Position, ServerContext, OP_PERMISSION,
};
use dashmap::DashMap;
use rand::Rng;
use std::f64::consts::TAU;
use std::ops::Range;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

/// How many explosives one accepted trigger produces, inclusive.
const TNT_MIN: u32 = 4;
const TNT_MAX: u32 = 8;
/// Horizontal (XZ) offset drawn per unit, in blocks.
const SPAWN_DISTANCE: Range<f64> = 3.0..10.0;
/// Vertical offset drawn per unit, in blocks.
const SPAWN_HEIGHT: Range<f64> = 2.0..8.0;

/// Handles one interaction event.
///
/// The event must carry a block and an item, the player must be a sneaking
/// operator holding the reagent item, and the player's debounce window must
/// have elapsed. Anything else returns without touching any state; in
/// particular, a rejected event never updates the debounce timestamp.
pub(crate) fn handle_interact(
    event: &PlayerInteractEvent,
    context: &Arc<dyn ServerContext>,
    config: &PerformanceConfig,
    last_click: &DashMap<PlayerId, Instant>,
) -> Result<(), EventError> {
    if event.block.is_none() {
        return Ok(());
    }
    let Some(item) = event.item.as_ref() else {
        return Ok(());
    };

    let player = &event.player;
    if !player.has_permission(OP_PERMISSION) || !player.is_sneaking() {
        return Ok(());
    }
    if !item.is(&config.reagent_item) {
        return Ok(());
    }

    let now = Instant::now();
    if let Some(last) = last_click.get(&player.id()) {
        if now.duration_since(*last) < config.click_debounce() {
            return Ok(());
        }
    }
    last_click.insert(player.id(), now);

    let mut rng = rand::thread_rng();
    let count = rng.gen_range(TNT_MIN..=TNT_MAX);
    let origin = player.position();
    for _ in 0..count {
        let spot = random_spawn_position(&mut rng, origin);
        let command = format!("summon tnt {:.2} {:.2} {:.2}", spot.x, spot.y, spot.z);
        if let Err(e) = context.dispatch_command(&command) {
            warn!("spawn command rejected: {e}");
        }
    }

    player.send_message(&format!("{}Spawned {count} TNT!", color::YELLOW));
    info!("{} spawned {} TNT", player.name(), count);
    Ok(())
}

/// Picks a spot around `origin`: a uniformly random direction, horizontal
/// distance in [3, 10), height in [2, 8). Every unit draws independently.
fn random_spawn_position(rng: &mut impl Rng, origin: Position) -> Position {
    let angle = rng.gen_range(0.0..TAU);
    let dist = rng.gen_range(SPAWN_DISTANCE);
    let height = rng.gen_range(SPAWN_HEIGHT);
    Position::new(
        origin.x + angle.cos() * dist,
        origin.y + height,
        origin.z + angle.sin() * dist,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_offsets_stay_in_bounds() {
        let mut rng = rand::thread_rng();
        let origin = Position::new(12.0, 70.0, -3.0);
        for _ in 0..200 {
            let spot = random_spawn_position(&mut rng, origin);
            let horizontal = origin.horizontal_distance(spot);
            assert!(
                (2.999..10.001).contains(&horizontal),
                "horizontal offset {horizontal} outside [3, 10)"
            );
            let height = spot.y - origin.y;
            assert!(
                (1.999..8.001).contains(&height),
                "vertical offset {height} outside [2, 8)"
            );
        }
    }
}
