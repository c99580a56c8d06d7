//! Landing dust burst.

use std::f32::consts::TAU;
use std::time::Duration;

use bevy::prelude::*;
use rand::Rng;

use crate::core::LandedEvent;
use crate::player::{JumpTuning, ParticleSettings};

/// Half the player cube height; particles spawn at its feet.
const FOOT_OFFSET: f32 = 0.5;

/// Shared mesh and material for every particle.
#[derive(Resource, Clone)]
pub struct ParticleAssets {
    pub mesh: Handle<Mesh>,
    pub material: Handle<StandardMaterial>,
}

/// A single short-lived particle.
#[derive(Component, Debug, Clone)]
pub struct Particle {
    pub velocity: Vec3,
    pub lifetime: Timer,
}

impl Particle {
    pub fn new(velocity: Vec3, lifetime: f32) -> Self {
        Self {
            velocity,
            lifetime: Timer::from_seconds(lifetime.max(0.0), TimerMode::Once),
        }
    }

    /// Integrate one frame. Returns the displacement, or `None` once expired.
    pub fn advance(&mut self, delta: Duration, gravity: f32) -> Option<Vec3> {
        if self.lifetime.tick(delta).finished() {
            return None;
        }
        let dt = delta.as_secs_f32();
        self.velocity.y -= gravity * dt;
        Some(self.velocity * dt)
    }

    /// Scale factor shrinking linearly to zero over the lifetime.
    pub fn shrink(&self) -> f32 {
        1.0 - self.lifetime.fraction()
    }
}

/// Random outward/upward velocity for one particle.
fn burst_velocity(rng: &mut impl Rng, settings: &ParticleSettings) -> Vec3 {
    let angle = rng.gen_range(0.0..TAU);
    let spread = rng.gen_range(0.4..1.0);
    let lift = rng.gen_range(0.3..0.8);
    let direction = Vec3::new(angle.cos() * spread, lift, angle.sin() * spread).normalize();
    direction * settings.speed * rng.gen_range(0.6..=1.0)
}

/// Create the shared particle mesh and material.
pub fn setup_particle_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    tuning: Res<JumpTuning>,
) {
    let (r, g, b) = tuning.particles.color;
    commands.insert_resource(ParticleAssets {
        mesh: meshes.add(Cuboid::from_length(1.0)),
        material: materials.add(StandardMaterial {
            base_color: Color::srgb(r, g, b),
            unlit: true,
            ..default()
        }),
    });
}

/// Emit a burst at the player's feet on landing.
pub fn spawn_landing_particles(
    mut commands: Commands,
    mut events: EventReader<LandedEvent>,
    tuning: Res<JumpTuning>,
    assets: Option<Res<ParticleAssets>>,
) {
    let Some(assets) = assets else {
        events.clear();
        return;
    };

    let settings = &tuning.particles;
    let mut rng = rand::thread_rng();

    for event in events.read() {
        let origin = event.position - Vec3::Y * FOOT_OFFSET;
        for _ in 0..settings.count {
            commands.spawn((
                Particle::new(burst_velocity(&mut rng, settings), settings.lifetime),
                Mesh3d(assets.mesh.clone()),
                MeshMaterial3d(assets.material.clone()),
                Transform::from_translation(origin).with_scale(Vec3::splat(settings.size)),
            ));
        }
    }
}

/// Move, shrink and expire particles.
pub fn update_particles(
    mut commands: Commands,
    time: Res<Time>,
    tuning: Res<JumpTuning>,
    mut query: Query<(Entity, &mut Transform, &mut Particle)>,
) {
    let settings = &tuning.particles;

    for (entity, mut transform, mut particle) in query.iter_mut() {
        match particle.advance(time.delta(), settings.gravity) {
            Some(displacement) => {
                transform.translation += displacement;
                transform.scale = Vec3::splat(settings.size * particle.shrink());
            }
            None => commands.entity(entity).despawn(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn particle_falls_and_expires() {
        let mut particle = Particle::new(Vec3::new(1.0, 0.0, 0.0), 0.5);
        let step = Duration::from_millis(100);

        let first = particle.advance(step, 10.0).expect("alive");
        assert!(first.x > 0.0);
        assert!(first.y < 0.0);
        assert!(particle.shrink() < 1.0);

        let mut frames = 1;
        while particle.advance(step, 10.0).is_some() {
            frames += 1;
        }
        assert_eq!(frames, 4);
    }

    #[test]
    fn burst_goes_up_at_configured_speed() {
        let settings = ParticleSettings::default();
        let mut rng = rand::thread_rng();
        for _ in 0..64 {
            let velocity = burst_velocity(&mut rng, &settings);
            assert!(velocity.y > 0.0);
            assert!(velocity.length() <= settings.speed + 1e-4);
            assert!(velocity.length() >= settings.speed * 0.6 - 1e-4);
        }
    }

    #[test]
    fn landing_spawns_configured_count() {
        let mut app = App::new();
        app.init_resource::<JumpTuning>()
            .insert_resource(ParticleAssets {
                mesh: Handle::default(),
                material: Handle::default(),
            })
            .add_event::<LandedEvent>()
            .add_systems(Update, spawn_landing_particles);

        let player = app.world_mut().spawn_empty().id();
        app.world_mut().send_event(LandedEvent {
            player,
            position: Vec3::new(0.0, 0.5, 0.0),
        });
        app.update();

        let mut query = app.world_mut().query::<(&Particle, &Transform)>();
        let particles: Vec<_> = query.iter(app.world()).collect();
        assert_eq!(particles.len(), 16);
        assert!(particles.iter().all(|(_, t)| t.translation == Vec3::ZERO));
    }
}
