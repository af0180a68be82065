//! Three drifting, twinkling star layers behind the slides.

use rand::Rng;
use raylib::prelude::*;

use crate::constants::with_alpha;

struct Star {
    // Normalized [0, 1) screen position, scaled at draw time so the field
    // survives window resizes.
    pos: Vector2,
    radius: f32,
    phase: f32,
}

/// One depth layer. Brightness pulses as `base + sin(t * speed + phase) * amp`
/// and the whole layer floats on a slow Lissajous path, each layer with its
/// own rates so they move independently and read as depth.
struct Layer {
    stars: Vec<Star>,
    base: f32,
    amp: f32,
    twinkle_speed: f32,
    twinkle_phase: f32,
    drift_speed: Vector2,
    drift_amp: f32,
}

pub struct Starfield {
    layers: Vec<Layer>,
    t: f32,
}

/// Layer brightness at time `t`, clamped to a drawable alpha.
fn twinkle(base: f32, amp: f32, speed: f32, phase: f32, t: f32) -> f32 {
    (base + (t * speed + phase).sin() * amp).clamp(0.0, 1.0)
}

/// Floating offset of a layer at time `t`, in normalized screen units.
fn drift(speed: Vector2, amp: f32, t: f32) -> Vector2 {
    Vector2::new((t * speed.x).sin() * amp, (t * speed.y).cos() * amp)
}

impl Layer {
    fn seeded(
        rng: &mut impl Rng,
        count: usize,
        radius: std::ops::Range<f32>,
        base: f32,
        amp: f32,
        twinkle_speed: f32,
        twinkle_phase: f32,
        drift_speed: Vector2,
        drift_amp: f32,
    ) -> Self {
        let stars = (0..count)
            .map(|_| Star {
                pos: Vector2::new(rng.random_range(0.0..1.0), rng.random_range(0.0..1.0)),
                radius: rng.random_range(radius.clone()),
                phase: rng.random_range(0.0..std::f32::consts::TAU),
            })
            .collect();
        Self {
            stars,
            base,
            amp,
            twinkle_speed,
            twinkle_phase,
            drift_speed,
            drift_amp,
        }
    }
}

impl Starfield {
    pub fn new(rng: &mut impl Rng) -> Self {
        // Near, mid and far layers: fewer, larger, brighter up close.
        let layers = vec![
            Layer::seeded(rng, 90, 1.4..2.2, 0.7, 0.3, 0.5, 0.0, Vector2::new(0.10, 0.15), 0.012),
            Layer::seeded(rng, 150, 0.9..1.5, 0.6, 0.4, 0.3, 1.0, Vector2::new(0.12, 0.18), 0.018),
            Layer::seeded(rng, 240, 0.5..1.0, 0.5, 0.5, 0.4, 2.0, Vector2::new(0.08, 0.10), 0.024),
        ];
        Self { layers, t: 0.0 }
    }

    pub fn update(&mut self, dt: f32) {
        self.t += dt;
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, width: f32, height: f32) {
        for layer in &self.layers {
            let alpha = twinkle(
                layer.base,
                layer.amp,
                layer.twinkle_speed,
                layer.twinkle_phase,
                self.t,
            );
            let offset = drift(layer.drift_speed, layer.drift_amp, self.t);
            let color = with_alpha(Color::WHITE, alpha);
            for star in &layer.stars {
                // Per-star phase keeps neighbours from pulsing in lockstep.
                let sparkle = 0.75 + 0.25 * (self.t * 1.7 + star.phase).sin();
                let p = Vector2::new(
                    (star.pos.x + offset.x).rem_euclid(1.0) * width,
                    (star.pos.y + offset.y).rem_euclid(1.0) * height,
                );
                d.draw_circle_v(p, star.radius * sparkle, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twinkle_stays_a_valid_alpha() {
        // The far layer oscillates 0.5 +/- 0.5, exactly touching both ends.
        let mut t = 0.0;
        while t < 20.0 {
            let a = twinkle(0.5, 0.5, 0.4, 2.0, t);
            assert!((0.0..=1.0).contains(&a));
            t += 0.05;
        }
    }

    #[test]
    fn twinkle_clamps_an_overdriven_layer() {
        assert_eq!(twinkle(0.9, 0.5, 1.0, 0.0, std::f32::consts::FRAC_PI_2), 1.0);
    }

    #[test]
    fn drift_is_bounded_by_its_amplitude() {
        let speed = Vector2::new(0.12, 0.18);
        let mut t = 0.0;
        while t < 60.0 {
            let o = drift(speed, 0.02, t);
            assert!(o.x.abs() <= 0.02 + f32::EPSILON);
            assert!(o.y.abs() <= 0.02 + f32::EPSILON);
            t += 0.1;
        }
    }

    #[test]
    fn drift_starts_from_a_deterministic_origin() {
        let o = drift(Vector2::new(0.1, 0.1), 0.02, 0.0);
        assert_eq!(o.x, 0.0);
        assert!((o.y - 0.02).abs() < 1e-6);
    }
}
