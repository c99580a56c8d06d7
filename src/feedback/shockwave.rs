//! Landing shockwave: an upward kick for every registered body.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use rand::Rng;

use crate::core::LandedEvent;
use crate::player::{JumpTuning, ShockwaveTargets};

/// Add a random upward impulse to each of the landing player's targets.
///
/// Targets that were despawned or cannot take impulses are skipped.
pub fn apply_shockwave(
    mut events: EventReader<LandedEvent>,
    tuning: Res<JumpTuning>,
    player_query: Query<&ShockwaveTargets>,
    mut body_query: Query<&mut ExternalImpulse>,
) {
    let mut rng = rand::thread_rng();

    for event in events.read() {
        let Ok(targets) = player_query.get(event.player) else {
            continue;
        };

        let mut kicked = 0;
        for &target in &targets.0 {
            let Ok(mut impulse) = body_query.get_mut(target) else {
                continue;
            };
            let force = rng.gen_range(tuning.min_shock_force..=tuning.max_shock_force);
            impulse.impulse += Vec3::Y * force;
            kicked += 1;
        }

        debug!("Shockwave hit {} of {} bodies", kicked, targets.0.len());
    }
}
