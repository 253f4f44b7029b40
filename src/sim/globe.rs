// Particle point set placed on a sphere, plus the per-frame wave and rotation.
//
// Current positions are always rebuilt from the original ones, so a long
// running animation never accumulates drift.

use super::constants::*;
use glam::Vec3;
use rand::prelude::*;
use std::f32::consts::TAU;

/// Straight RGBA color with the alpha kept numeric so it can be swapped per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0.0);

    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// CSS `rgba()` string accepted by the canvas style setters.
    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

pub const WHITE_PALETTE: [Rgba; 5] = [
    Rgba::new(255, 255, 255, 0.9),
    Rgba::new(255, 255, 255, 0.8),
    Rgba::new(255, 255, 255, 0.7),
    Rgba::new(255, 255, 255, 0.6),
    Rgba::new(255, 255, 255, 0.5),
];

/// Inputs for building a point set.
#[derive(Clone, Debug)]
pub struct GlobeParams {
    pub particle_count: usize,
    pub radius_ratio: f32,
    pub palette: &'static [Rgba],
}

impl Default for GlobeParams {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            radius_ratio: GLOBE_RADIUS_RATIO,
            palette: &WHITE_PALETTE,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Point {
    pub position: Vec3,
    pub original: Vec3,
    pub radius: f32,
    pub color: Rgba,
    pub wave_amplitude: f32,
    pub wave_speed: f32,
}

impl Point {
    /// Radially displace the original position by the wave at `time`.
    ///
    /// A point sitting exactly on the center has no direction to move in and
    /// keeps its position.
    pub fn apply_wave(&mut self, time: f64) {
        let distance = self.original.length();
        if distance > 0.0 {
            let wave = (time * self.wave_speed as f64).sin() as f32 * self.wave_amplitude;
            self.position = self.original * ((distance + wave) / distance);
        }
    }

    /// Rotate about Y first, then about X.
    pub fn rotate(&mut self, angle_x: f32, angle_y: f32) {
        self.position = rotate_yx(self.position, angle_x, angle_y);
    }
}

#[inline]
pub fn rotate_yx(p: Vec3, angle_x: f32, angle_y: f32) -> Vec3 {
    let (sin_y, cos_y) = angle_y.sin_cos();
    let x = p.x * cos_y - p.z * sin_y;
    let z = p.x * sin_y + p.z * cos_y;

    let (sin_x, cos_x) = angle_x.sin_cos();
    let y = p.y * cos_x - z * sin_x;
    let z = p.y * sin_x + z * cos_x;
    Vec3::new(x, y, z)
}

/// Uniformly distributed point on a sphere surface of `radius`.
///
/// The polar angle goes through `acos` of a uniform value so the density does
/// not bunch up at the poles.
pub fn sample_sphere<R: Rng + ?Sized>(rng: &mut R, radius: f32) -> Vec3 {
    let theta = rng.gen::<f32>() * TAU;
    let phi = rng.gen_range(-1.0f32..=1.0).acos();
    let (sin_phi, cos_phi) = phi.sin_cos();
    Vec3::new(
        radius * sin_phi * theta.cos(),
        radius * sin_phi * theta.sin(),
        radius * cos_phi,
    )
}

#[inline]
pub fn globe_radius(width: f32, height: f32, ratio: f32) -> f32 {
    width.min(height) * ratio
}

pub struct Globe {
    points: Vec<Point>,
    radius: f32,
    time: f64,
    rng: StdRng,
}

impl Globe {
    pub fn new(params: &GlobeParams, radius: f32, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let palette = if params.palette.is_empty() {
            &WHITE_PALETTE[..]
        } else {
            params.palette
        };
        let points = (0..params.particle_count)
            .map(|_| {
                let original = sample_sphere(&mut rng, radius);
                Point {
                    position: original,
                    original,
                    radius: rng.gen_range(POINT_RADIUS_MIN..POINT_RADIUS_MAX),
                    color: palette[rng.gen_range(0..palette.len())],
                    wave_amplitude: rng.gen_range(WAVE_AMPLITUDE_MIN..WAVE_AMPLITUDE_MAX),
                    wave_speed: rng.gen_range(WAVE_SPEED_MIN..WAVE_SPEED_MAX),
                }
            })
            .collect();
        Self {
            points,
            radius,
            time: 0.0,
            rng,
        }
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Redraw every original position on a sphere of the new radius.
    ///
    /// Point identities, colors and wave parameters survive; only placement
    /// changes, and current positions snap back to the new originals.
    pub fn relocate(&mut self, radius: f32) {
        self.radius = radius;
        for p in &mut self.points {
            p.original = sample_sphere(&mut self.rng, radius);
            p.position = p.original;
        }
    }

    /// One simulation tick: advance time, then rebuild positions from the
    /// originals with wave displacement and rotation applied.
    pub fn advance(&mut self, angle_x: f32, angle_y: f32) {
        self.time += TIME_STEP;
        for p in &mut self.points {
            p.position = p.original;
            p.apply_wave(self.time);
            p.rotate(angle_x, angle_y);
        }
    }
}
