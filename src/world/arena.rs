//! Arena construction: ground, loose crates, light, camera and player.

use std::f32::consts::TAU;

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::feedback::CameraNoise;
use crate::player::{spawn_player, Ground};

/// Marker for every entity that belongs to the arena and is cleaned up with it.
#[derive(Component)]
pub struct ArenaEntity;

/// Half extent of the square ground slab.
const GROUND_HALF_SIZE: f32 = 10.0;
const GROUND_HALF_THICKNESS: f32 = 0.1;

const CRATE_COUNT: usize = 10;
const CRATE_RING_RADIUS: f32 = 4.0;
const CRATE_HALF_SIZE: f32 = 0.3;

/// Samples per second of the camera noise field.
const CAMERA_NOISE_FREQUENCY: f32 = 12.0;

pub const PLAYER_START: Vec3 = Vec3::new(0.0, 0.6, 0.0);

/// Build the arena and return the player entity.
pub fn build_arena(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) -> Entity {
    setup_environment(commands);
    spawn_ground(commands, meshes, materials);
    spawn_camera(commands);

    let crates = spawn_crate_ring(commands, meshes, materials);
    let player = spawn_player(commands, meshes, materials, PLAYER_START, crates);
    commands.entity(player).insert(ArenaEntity);
    player
}

/// Ambient fill plus one shadow-casting sun.
fn setup_environment(commands: &mut Commands) {
    commands.insert_resource(AmbientLight {
        color: Color::srgb(0.9, 0.9, 1.0),
        brightness: 300.0,
    });

    commands.spawn((
        DirectionalLight {
            illuminance: 8000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::XYZ,
            -std::f32::consts::FRAC_PI_3,
            std::f32::consts::FRAC_PI_6,
            0.0,
        )),
        ArenaEntity,
    ));
}

fn spawn_ground(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    commands.spawn((
        Ground,
        ArenaEntity,
        Mesh3d(meshes.add(Cuboid::new(
            GROUND_HALF_SIZE * 2.0,
            GROUND_HALF_THICKNESS * 2.0,
            GROUND_HALF_SIZE * 2.0,
        ))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.35, 0.4, 0.35),
            perceptual_roughness: 0.9,
            ..default()
        })),
        Transform::from_xyz(0.0, -GROUND_HALF_THICKNESS, 0.0),
        RigidBody::Fixed,
        Collider::cuboid(GROUND_HALF_SIZE, GROUND_HALF_THICKNESS, GROUND_HALF_SIZE),
    ));
}

/// Loose crates in a ring around the player; these are the shockwave targets.
fn spawn_crate_ring(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) -> Vec<Entity> {
    let mesh = meshes.add(Cuboid::from_length(CRATE_HALF_SIZE * 2.0));
    let material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.55, 0.4, 0.25),
        perceptual_roughness: 0.8,
        ..default()
    });

    (0..CRATE_COUNT)
        .map(|i| {
            let angle = TAU * i as f32 / CRATE_COUNT as f32;
            let position = Vec3::new(
                angle.cos() * CRATE_RING_RADIUS,
                CRATE_HALF_SIZE,
                angle.sin() * CRATE_RING_RADIUS,
            );
            commands
                .spawn((
                    ArenaEntity,
                    Mesh3d(mesh.clone()),
                    MeshMaterial3d(material.clone()),
                    Transform::from_translation(position),
                    RigidBody::Dynamic,
                    Collider::cuboid(CRATE_HALF_SIZE, CRATE_HALF_SIZE, CRATE_HALF_SIZE),
                    ExternalImpulse::default(),
                ))
                .id()
        })
        .collect()
}

fn spawn_camera(commands: &mut Commands) {
    let anchor = Transform::from_xyz(0.0, 4.0, 12.0).looking_at(Vec3::new(0.0, 1.5, 0.0), Vec3::Y);
    commands.spawn((
        Camera3d::default(),
        anchor,
        CameraNoise::new(anchor, CAMERA_NOISE_FREQUENCY, rand::random()),
        ArenaEntity,
    ));
}
