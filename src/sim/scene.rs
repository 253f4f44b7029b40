// Frame composition: perspective projection, painter's ordering, depth
// shading and the connective lines between depth neighbours.
//
// Drawing goes through `DrawSurface` so the same composition drives the
// canvas in the browser and a recording surface in tests.

use super::constants::*;
use super::globe::{Point, Rgba};
use glam::{Vec2, Vec3};

/// Drawable area in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width as f32,
            height: height as f32,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub screen: Vec2,
    pub size: f32,
}

/// Perspective-project a point; `None` once it reaches the focal point.
#[inline]
pub fn project(position: Vec3, radius: f32, center: Vec2, zoom: f32) -> Option<Projected> {
    let depth = FOCAL_LENGTH + position.z;
    if depth <= 0.0 {
        return None;
    }
    let scale = zoom * FOCAL_LENGTH / depth;
    Some(Projected {
        screen: center + position.truncate() * scale,
        size: (radius * scale).max(MIN_POINT_SIZE),
    })
}

#[inline]
pub fn is_visible(z: f32) -> bool {
    z < NEAR_PLANE_Z
}

/// Linear remap of depth to the [0.2, 1] brightness band.
#[inline]
pub fn brightness(z: f32) -> f32 {
    ((z - BRIGHTNESS_Z_NEAR) / BRIGHTNESS_Z_SPAN).clamp(BRIGHTNESS_MIN, BRIGHTNESS_MAX)
}

/// Indices of `points` ordered back to front (descending z).
pub fn depth_order(points: &[Point]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..points.len()).collect();
    order.sort_by(|&a, &b| points[b].position.z.total_cmp(&points[a].position.z));
    order
}

/// Line opacity for two points closer than `threshold`, else `None`.
#[inline]
pub fn link_opacity(a: Vec3, b: Vec3, threshold: f32) -> Option<f32> {
    let distance = a.distance(b);
    (distance < threshold).then_some(1.0 - distance / threshold)
}

/// Primitive drawing operations a frame needs.
pub trait DrawSurface {
    /// Cover the whole viewport with a translucent fill.
    fn fade(&mut self, viewport: Viewport, color: Rgba);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    /// Radial gradient from `color` at `inner` to transparent at `outer`.
    fn fill_glow(&mut self, center: Vec2, inner: f32, outer: f32, color: Rgba);
    fn set_global_alpha(&mut self, alpha: f32);
    /// Line with a linear gradient between the two endpoint colors.
    fn stroke_line(&mut self, from: Vec2, to: Vec2, from_color: Rgba, to_color: Rgba, width: f64);
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameStats {
    pub drawn: usize,
    pub culled: usize,
    pub links: usize,
}

/// Draw one frame of `points` onto `surface`.
pub fn compose_frame<S: DrawSurface + ?Sized>(
    surface: &mut S,
    points: &[Point],
    globe_radius: f32,
    viewport: Viewport,
    zoom: f32,
) -> FrameStats {
    let mut stats = FrameStats::default();
    surface.fade(viewport, Rgba::new(0, 0, 0, TRAIL_FADE_ALPHA));

    let center = viewport.center();
    let order = depth_order(points);
    let projected: Vec<Option<Projected>> = order
        .iter()
        .map(|&i| {
            let p = &points[i];
            if is_visible(p.position.z) {
                project(p.position, p.radius, center, zoom)
            } else {
                None
            }
        })
        .collect();

    for (&i, proj) in order.iter().zip(&projected) {
        let Some(proj) = proj else {
            stats.culled += 1;
            continue;
        };
        let p = &points[i];
        let light = brightness(p.position.z);
        let color = p.color.with_alpha(light);
        surface.fill_circle(proj.screen, proj.size, color);
        if light > GLOW_BRIGHTNESS_THRESHOLD {
            surface.fill_glow(
                proj.screen,
                proj.size * GLOW_INNER_FACTOR,
                proj.size * GLOW_OUTER_FACTOR,
                color,
            );
        }
        stats.drawn += 1;
    }

    let threshold = globe_radius * LINK_DISTANCE_RATIO;
    for a in 0..order.len() {
        let Some(pa) = projected[a] else { continue };
        let end = (a + 1 + LINK_LOOKAHEAD).min(order.len());
        for b in a + 1..end {
            let Some(pb) = projected[b] else { continue };
            let (p1, p2) = (&points[order[a]], &points[order[b]]);
            if let Some(opacity) = link_opacity(p1.position, p2.position, threshold) {
                surface.set_global_alpha(LINK_ALPHA_SCALE * opacity);
                surface.stroke_line(pa.screen, pb.screen, p1.color, p2.color, LINK_WIDTH);
                stats.links += 1;
            }
        }
    }
    surface.set_global_alpha(1.0);
    stats
}
