//! Scale tweening with easing support.

use bevy::prelude::*;

/// Easing curve applied to tween progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ease {
    Linear,
    InQuad,
    /// Decelerating quadratic, the default for squash/stretch poses
    #[default]
    OutQuad,
    InOutQuad,
}

impl Ease {
    /// Map linear progress `t` (clamped to 0..=1) onto the curve.
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// Animates `Transform::scale` from `from` to `to`.
///
/// Inserting a new `ScaleTween` replaces the running one, so the latest
/// pose request always wins. The component removes itself when finished.
#[derive(Component, Debug, Clone)]
pub struct ScaleTween {
    pub from: Vec3,
    pub to: Vec3,
    /// Total duration in seconds
    pub duration: f32,
    pub elapsed: f32,
    pub ease: Ease,
}

impl ScaleTween {
    /// Tween from the current scale to `target` with the default ease.
    pub fn to(current: Vec3, target: Vec3, duration: f32) -> Self {
        Self {
            from: current,
            to: target,
            duration: duration.max(0.0),
            elapsed: 0.0,
            ease: Ease::default(),
        }
    }

    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Advance by `delta` seconds and return the scale for this frame.
    pub fn advance(&mut self, delta: f32) -> Vec3 {
        self.elapsed = (self.elapsed + delta).min(self.duration);
        self.sample()
    }

    /// Scale at the current elapsed time.
    pub fn sample(&self) -> Vec3 {
        if self.duration <= 0.0 {
            return self.to;
        }
        let t = self.ease.evaluate(self.elapsed / self.duration);
        self.from.lerp(self.to, t)
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// System that steps every active scale tween.
pub fn update_scale_tweens(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut Transform, &mut ScaleTween)>,
) {
    let dt = time.delta_secs();

    for (entity, mut transform, mut tween) in query.iter_mut() {
        transform.scale = tween.advance(dt);

        if tween.is_finished() {
            commands.entity(entity).remove::<ScaleTween>();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eases_hit_their_endpoints() {
        for ease in [Ease::Linear, Ease::InQuad, Ease::OutQuad, Ease::InOutQuad] {
            assert_eq!(ease.evaluate(0.0), 0.0);
            assert_eq!(ease.evaluate(1.0), 1.0);
            assert_eq!(ease.evaluate(2.0), 1.0);
        }
    }

    #[test]
    fn out_quad_front_loads_motion() {
        assert!(Ease::OutQuad.evaluate(0.5) > 0.5);
        assert!(Ease::InQuad.evaluate(0.5) < 0.5);
        assert_eq!(Ease::InOutQuad.evaluate(0.5), 0.5);
    }

    #[test]
    fn tween_reaches_target_and_finishes() {
        let mut tween = ScaleTween::to(Vec3::ONE, Vec3::new(1.5, 0.5, 1.5), 0.5)
            .with_ease(Ease::Linear);

        let halfway = tween.advance(0.25);
        assert!((halfway - Vec3::new(1.25, 0.75, 1.25)).length() < 1e-5);
        assert!(!tween.is_finished());

        let end = tween.advance(1.0);
        assert_eq!(end, Vec3::new(1.5, 0.5, 1.5));
        assert!(tween.is_finished());
    }

    #[test]
    fn zero_duration_snaps() {
        let mut tween = ScaleTween::to(Vec3::ONE, Vec3::splat(2.0), 0.0);
        assert_eq!(tween.advance(0.0), Vec3::splat(2.0));
        assert!(tween.is_finished());
    }

    #[test]
    fn system_applies_scale_and_removes_finished_tween() {
        let mut app = App::new();
        app.init_resource::<Time>()
            .add_systems(Update, update_scale_tweens);

        let entity = app
            .world_mut()
            .spawn((
                Transform::default(),
                ScaleTween::to(Vec3::ONE, Vec3::splat(3.0), 0.0),
            ))
            .id();

        app.update();

        let world = app.world();
        assert_eq!(world.get::<Transform>(entity).map(|t| t.scale), Some(Vec3::splat(3.0)));
        assert!(world.get::<ScaleTween>(entity).is_none());
    }
}
