// Host-side tests for frame composition, driven through a recording surface.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/sim/constants.rs");
}
mod globe {
    include!("../src/sim/globe.rs");
}
mod interaction {
    include!("../src/sim/interaction.rs");
}
mod scene {
    include!("../src/sim/scene.rs");
}
mod controller {
    include!("../src/sim/controller.rs");
}

use constants::*;
use controller::*;
use glam::{Vec2, Vec3};
use globe::*;
use interaction::*;
use scene::*;

#[derive(Clone, Debug, PartialEq)]
enum Call {
    Fade(Rgba),
    Circle { center: Vec2, radius: f32, color: Rgba },
    Glow { center: Vec2, inner: f32, outer: f32 },
    Alpha(f32),
    Line { from: Vec2, to: Vec2 },
}

#[derive(Default)]
struct Recorder {
    calls: Vec<Call>,
}

impl Recorder {
    fn circles(&self) -> Vec<(Vec2, f32, Rgba)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Circle {
                    center,
                    radius,
                    color,
                } => Some((*center, *radius, *color)),
                _ => None,
            })
            .collect()
    }

    fn lines(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::Line { .. }))
            .count()
    }
}

impl DrawSurface for Recorder {
    fn fade(&mut self, _viewport: Viewport, color: Rgba) {
        self.calls.push(Call::Fade(color));
    }
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.calls.push(Call::Circle {
            center,
            radius,
            color,
        });
    }
    fn fill_glow(&mut self, center: Vec2, inner: f32, outer: f32, _color: Rgba) {
        self.calls.push(Call::Glow {
            center,
            inner,
            outer,
        });
    }
    fn set_global_alpha(&mut self, alpha: f32) {
        self.calls.push(Call::Alpha(alpha));
    }
    fn stroke_line(&mut self, from: Vec2, to: Vec2, _a: Rgba, _b: Rgba, _width: f64) {
        self.calls.push(Call::Line { from, to });
    }
}

fn point_at(position: Vec3) -> Point {
    Point {
        position,
        original: position,
        radius: 2.0,
        color: Rgba::new(255, 255, 255, 0.7),
        wave_amplitude: 5.0,
        wave_speed: 0.01,
    }
}

fn points(positions: &[Vec3]) -> Vec<Point> {
    positions.iter().copied().map(point_at).collect()
}

const VIEW: Viewport = Viewport {
    width: 800.0,
    height: 600.0,
};

#[test]
fn projection_follows_focal_length() {
    let center = Vec2::new(400.0, 300.0);
    let p = project(Vec3::new(100.0, -50.0, 0.0), 2.0, center, 1.0).unwrap();
    assert_eq!(p.screen, Vec2::new(500.0, 250.0));
    assert_eq!(p.size, 2.0);

    // Farther away shrinks, zoom enlarges
    let far = project(Vec3::new(100.0, 0.0, 900.0), 2.0, center, 2.0).unwrap();
    assert!((far.screen.x - 500.0).abs() < 1e-4);
    assert!((far.size - 2.0).abs() < 1e-5);

    // Size never collapses to zero
    let tiny = project(Vec3::new(0.0, 0.0, 1.0e6), 1.0, center, 0.5).unwrap();
    assert_eq!(tiny.size, MIN_POINT_SIZE);

    assert!(project(Vec3::new(0.0, 0.0, -FOCAL_LENGTH), 1.0, center, 1.0).is_none());
}

#[test]
fn brightness_remaps_and_clamps() {
    assert!((brightness(-300.0) - 0.2).abs() < 1e-6);
    assert!((brightness(0.0) - 0.5).abs() < 1e-6);
    assert!((brightness(300.0) - 1.0).abs() < 1e-6);
    assert_eq!(brightness(-1000.0), BRIGHTNESS_MIN);
    assert_eq!(brightness(1000.0), BRIGHTNESS_MAX);
}

#[test]
fn depth_order_is_non_increasing_in_z() {
    let globe = Globe::new(&GlobeParams::default(), 200.0, 21);
    let pts = globe.points();
    let order = depth_order(pts);
    assert_eq!(order.len(), pts.len());
    for w in order.windows(2) {
        assert!(pts[w[0]].position.z >= pts[w[1]].position.z);
    }
}

#[test]
fn points_at_or_beyond_near_plane_are_never_drawn() {
    let pts = points(&[
        Vec3::new(10.0, 0.0, NEAR_PLANE_Z),
        Vec3::new(20.0, 0.0, NEAR_PLANE_Z + 250.0),
        Vec3::new(30.0, 0.0, 0.0),
        Vec3::new(40.0, 0.0, NEAR_PLANE_Z - 1.0),
    ]);
    let mut rec = Recorder::default();
    let stats = compose_frame(&mut rec, &pts, 1000.0, VIEW, 1.0);

    assert_eq!(stats.drawn, 2);
    assert_eq!(stats.culled, 2);
    let center = VIEW.center();
    for (screen, _, _) in rec.circles() {
        // Culled points would project at x offsets 10 * s and 20 * s
        let offset = screen.x - center.x;
        assert!(offset > 25.0, "culled point drawn at offset {offset}");
    }
}

#[test]
fn frame_starts_with_trail_fade_and_ends_with_full_alpha() {
    let pts = points(&[Vec3::new(0.0, 0.0, 0.0), Vec3::new(5.0, 0.0, 0.0)]);
    let mut rec = Recorder::default();
    compose_frame(&mut rec, &pts, 200.0, VIEW, 1.0);
    assert_eq!(
        rec.calls.first(),
        Some(&Call::Fade(Rgba::new(0, 0, 0, TRAIL_FADE_ALPHA)))
    );
    assert_eq!(rec.calls.last(), Some(&Call::Alpha(1.0)));
}

#[test]
fn fill_alpha_comes_from_depth() {
    let pts = points(&[Vec3::new(0.0, 0.0, 150.0), Vec3::new(0.0, 0.0, -150.0)]);
    let mut rec = Recorder::default();
    compose_frame(&mut rec, &pts, 10.0, VIEW, 1.0);
    let circles = rec.circles();
    // Back to front: z=150 first
    assert!((circles[0].2.a - 0.75).abs() < 1e-6);
    assert!((circles[1].2.a - 0.25).abs() < 1e-6);
    // Every palette entry gets its alpha replaced, not just one
    assert_eq!(circles[0].2.r, 255);
}

#[test]
fn only_bright_points_glow() {
    let pts = points(&[Vec3::new(0.0, 0.0, 100.0), Vec3::new(0.0, 0.0, 0.0)]);
    let mut rec = Recorder::default();
    compose_frame(&mut rec, &pts, 10.0, VIEW, 1.0);
    let glows: Vec<&Call> = rec
        .calls
        .iter()
        .filter(|c| matches!(c, Call::Glow { .. }))
        .collect();
    assert_eq!(glows.len(), 1);
    let circle = rec.circles()[0];
    match glows[0] {
        Call::Glow {
            center,
            inner,
            outer,
        } => {
            assert_eq!(*center, circle.0);
            assert!((inner - circle.1 * GLOW_INNER_FACTOR).abs() < 1e-6);
            assert!((outer - circle.1 * GLOW_OUTER_FACTOR).abs() < 1e-6);
        }
        _ => unreachable!(),
    }
}

#[test]
fn links_close_pairs_only() {
    let radius = 200.0;
    // 0.1 R apart: linked
    let near = points(&[Vec3::new(0.0, 0.0, 10.0), Vec3::new(20.0, 0.0, 10.0)]);
    let mut rec = Recorder::default();
    let stats = compose_frame(&mut rec, &near, radius, VIEW, 1.0);
    assert_eq!(stats.links, 1);
    assert_eq!(rec.lines(), 1);
    let alpha = rec
        .calls
        .iter()
        .find_map(|c| match c {
            Call::Alpha(a) if *a < 1.0 => Some(*a),
            _ => None,
        })
        .unwrap();
    // opacity = 1 - 0.1 / 0.25
    assert!((alpha - LINK_ALPHA_SCALE * 0.6).abs() < 1e-5);

    // 0.5 R apart: not linked
    let far = points(&[Vec3::new(0.0, 0.0, 10.0), Vec3::new(100.0, 0.0, 10.0)]);
    let mut rec = Recorder::default();
    let stats = compose_frame(&mut rec, &far, radius, VIEW, 1.0);
    assert_eq!(stats.links, 0);
    assert_eq!(rec.lines(), 0);
}

#[test]
fn link_threshold_is_strict() {
    assert!(link_opacity(Vec3::ZERO, Vec3::new(50.0, 0.0, 0.0), 50.0).is_none());
    let o = link_opacity(Vec3::ZERO, Vec3::new(25.0, 0.0, 0.0), 50.0).unwrap();
    assert!((o - 0.5).abs() < 1e-6);
}

#[test]
fn links_only_look_four_ahead_in_depth_order() {
    // Six coincident-ish points sorted by z: the first links to the next four
    // but never to the sixth, even though it is just as close.
    let pts: Vec<Point> = (0..6)
        .map(|i| point_at(Vec3::new(0.0, 0.0, 10.0 - i as f32)))
        .collect();
    let mut rec = Recorder::default();
    let stats = compose_frame(&mut rec, &pts, 1000.0, VIEW, 1.0);
    // Pairs (i, j) with 0 < j - i <= 4 among 6 points: 4 + 4 + 3 + 2 + 1
    assert_eq!(stats.links, 14);
}

#[test]
fn links_skip_culled_points() {
    let pts = points(&[
        Vec3::new(0.0, 0.0, NEAR_PLANE_Z + 1.0),
        Vec3::new(1.0, 0.0, NEAR_PLANE_Z - 1.0),
    ]);
    let mut rec = Recorder::default();
    let stats = compose_frame(&mut rec, &pts, 1000.0, VIEW, 1.0);
    assert_eq!(stats.links, 0);
    assert_eq!(stats.drawn, 1);
}

#[test]
fn controller_resize_then_render_matches_new_radius() {
    let params = GlobeParams {
        particle_count: 64,
        ..GlobeParams::default()
    };
    let mut ctl = GlobeController::new(&params, 800, 600, 1);
    assert!((ctl.globe().radius() - 180.0).abs() < 1e-4);

    let mut rec = Recorder::default();
    let stats = ctl.frame([InputEvent::Resize { width: 400, height: 1000 }], &mut rec);
    assert!((ctl.globe().radius() - 120.0).abs() < 1e-4);
    assert_eq!(ctl.viewport(), Viewport::new(400, 1000));
    assert_eq!(stats.drawn + stats.culled, 64);
    let r2 = 120.0f32 * 120.0;
    for p in ctl.globe().points() {
        assert!((p.original.length_squared() - r2).abs() <= r2 * 1e-4);
    }
}

#[test]
fn controller_survives_degenerate_resize() {
    let mut ctl = GlobeController::new(&GlobeParams::default(), 800, 600, 2);
    let mut rec = Recorder::default();
    let stats = ctl.frame([InputEvent::Resize { width: 0, height: 0 }], &mut rec);
    assert_eq!(stats.drawn, PARTICLE_COUNT);
    for (center, _, _) in rec.circles() {
        assert!(center.is_finite());
    }
}

#[test]
fn controller_applies_queued_input_before_stepping() {
    let params = GlobeParams {
        particle_count: 8,
        ..GlobeParams::default()
    };
    let mut ctl = GlobeController::new(&params, 800, 600, 3);
    let mut rec = Recorder::default();
    ctl.frame(
        [
            InputEvent::PointerDown { x: 0.0, y: 0.0 },
            InputEvent::PointerMove { x: 100.0, y: 0.0 },
            InputEvent::Wheel { delta_y: -500.0 },
        ],
        &mut rec,
    );
    let ix = ctl.interaction();
    assert!(ix.dragging);
    assert!((ix.target_rotation_y - 0.5).abs() < 1e-6);
    assert!((ix.rotation_y - 0.5 * ROTATION_EASING).abs() < 1e-6);
    assert!((ix.target_zoom - 1.5).abs() < 1e-6);
    assert!((ix.zoom - (1.0 + 0.5 * ZOOM_EASING)).abs() < 1e-6);
    assert!((ctl.globe().time() - TIME_STEP).abs() < 1e-12);
}
