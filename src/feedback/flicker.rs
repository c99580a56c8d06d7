//! Color flicker on the player material.

use std::time::Duration;

use bevy::prelude::*;

use crate::core::JumpStartedEvent;
use crate::player::{JumpTuning, OriginalAppearance};

/// Alternates the material between a flicker color and the original color.
///
/// Starts lit. Each half-cycle lasts one interval; after `2 * count`
/// half-cycles the flicker is finished and the original color is showing.
#[derive(Component, Debug, Clone)]
pub struct Flicker {
    pub color: Color,
    timer: Timer,
    half_cycles_done: u32,
    half_cycles_total: u32,
    shown: Option<bool>,
}

impl Flicker {
    /// Returns `None` when `count` is zero.
    pub fn new(color: Color, interval: f32, count: u32) -> Option<Self> {
        if count == 0 {
            return None;
        }
        Some(Self {
            color,
            timer: Timer::from_seconds(interval.max(0.0), TimerMode::Repeating),
            half_cycles_done: 0,
            half_cycles_total: count.saturating_mul(2),
            shown: None,
        })
    }

    pub fn tick(&mut self, delta: Duration) {
        if self.is_finished() {
            return;
        }
        // Zero-length intervals finish on the first tick
        let completed = if self.timer.duration().is_zero() {
            self.half_cycles_total
        } else {
            self.timer.tick(delta).times_finished_this_tick()
        };
        self.half_cycles_done = self
            .half_cycles_done
            .saturating_add(completed)
            .min(self.half_cycles_total);
    }

    /// Whether the flicker color should be showing.
    pub fn is_lit(&self) -> bool {
        !self.is_finished() && self.half_cycles_done % 2 == 0
    }

    pub fn is_finished(&self) -> bool {
        self.half_cycles_done >= self.half_cycles_total
    }
}

/// Start (or restart) the flicker when a jump starts.
pub fn start_flicker(
    mut commands: Commands,
    mut events: EventReader<JumpStartedEvent>,
    tuning: Res<JumpTuning>,
) {
    for event in events.read() {
        let Some(flicker) = Flicker::new(
            tuning.flicker_color(),
            tuning.flicker_interval,
            tuning.flicker_count,
        ) else {
            continue;
        };
        if let Some(mut entity) = commands.get_entity(event.player) {
            entity.insert(flicker);
        }
    }
}

/// Step flickers and write the resulting color into the material.
pub fn update_flicker(
    mut commands: Commands,
    time: Res<Time>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut query: Query<(
        Entity,
        &mut Flicker,
        &MeshMaterial3d<StandardMaterial>,
        &OriginalAppearance,
    )>,
) {
    for (entity, mut flicker, material, original) in query.iter_mut() {
        flicker.tick(time.delta());

        let lit = flicker.is_lit();
        if flicker.shown != Some(lit) {
            if let Some(material) = materials.get_mut(&material.0) {
                material.base_color = if lit { flicker.color } else { original.color };
            }
            flicker.shown = Some(lit);
        }

        if flicker.is_finished() {
            commands.entity(entity).remove::<Flicker>();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_count_never_flickers() {
        assert!(Flicker::new(Color::WHITE, 0.1, 0).is_none());
    }

    #[test]
    fn alternates_then_ends_unlit() {
        let step = Duration::from_secs_f32(0.1);
        let mut flicker = Flicker::new(Color::WHITE, 0.1, 2).expect("flicker");

        let mut states = vec![flicker.is_lit()];
        while !flicker.is_finished() {
            flicker.tick(step);
            states.push(flicker.is_lit());
        }

        assert_eq!(states, vec![true, false, true, false, false]);
    }

    #[test]
    fn huge_count_does_not_overflow() {
        let mut flicker = Flicker::new(Color::WHITE, 0.1, u32::MAX).expect("flicker");
        assert!(flicker.is_lit());
        flicker.tick(Duration::from_secs_f32(0.1));
        assert!(!flicker.is_lit());
        assert!(!flicker.is_finished());
    }

    #[test]
    fn long_frame_catches_up() {
        let mut flicker = Flicker::new(Color::WHITE, 0.1, 6).expect("flicker");
        flicker.tick(Duration::from_secs(5));
        assert!(flicker.is_finished());
        assert!(!flicker.is_lit());
    }

    #[test]
    fn restores_original_material_color() {
        let mut app = App::new();
        app.init_resource::<Time>()
            .init_resource::<Assets<StandardMaterial>>()
            .add_systems(Update, update_flicker);

        let original = Color::srgb(0.9, 0.35, 0.2);
        let handle = app
            .world_mut()
            .resource_mut::<Assets<StandardMaterial>>()
            .add(StandardMaterial {
                base_color: original,
                ..default()
            });
        let player = app
            .world_mut()
            .spawn((
                MeshMaterial3d(handle.clone()),
                OriginalAppearance {
                    scale: Vec3::ONE,
                    color: original,
                },
                Flicker::new(Color::WHITE, 0.1, 1).expect("flicker"),
            ))
            .id();

        let base_color = |app: &App| {
            app.world()
                .resource::<Assets<StandardMaterial>>()
                .get(&handle)
                .map(|m| m.base_color)
        };

        app.update();
        assert_eq!(base_color(&app), Some(Color::WHITE));

        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs(1));
        app.update();
        assert_eq!(base_color(&app), Some(original));
        assert!(app.world().get::<Flicker>(player).is_none());
    }
}
