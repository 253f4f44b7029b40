use super::globe::{globe_radius, Globe, GlobeParams};
use super::interaction::{InputEvent, Interaction};
use super::scene::{compose_frame, DrawSurface, FrameStats, Viewport};

/// Owns the point set, the interaction state and the viewport for one mount.
pub struct GlobeController {
    globe: Globe,
    interaction: Interaction,
    viewport: Viewport,
    radius_ratio: f32,
}

impl GlobeController {
    pub fn new(params: &GlobeParams, width: u32, height: u32, seed: u64) -> Self {
        let viewport = Viewport::new(width, height);
        let radius = globe_radius(viewport.width, viewport.height, params.radius_ratio);
        Self {
            globe: Globe::new(params, radius, seed),
            interaction: Interaction::default(),
            viewport,
            radius_ratio: params.radius_ratio,
        }
    }

    #[inline]
    pub fn globe(&self) -> &Globe {
        &self.globe
    }

    #[inline]
    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::Resize { width, height } => self.resize(width, height),
            other => self.interaction.apply(other),
        }
    }

    /// New viewport: recompute the globe radius and re-place every point.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = Viewport::new(width, height);
        let radius = globe_radius(self.viewport.width, self.viewport.height, self.radius_ratio);
        self.globe.relocate(radius);
        log::debug!(
            "[resize] {}x{} globe radius {:.1}",
            width,
            height,
            radius
        );
    }

    /// Advance the interaction easing and the point set by one frame.
    pub fn tick(&mut self) {
        self.interaction.step();
        self.globe
            .advance(self.interaction.rotation_x, self.interaction.rotation_y);
    }

    pub fn render<S: DrawSurface + ?Sized>(&self, surface: &mut S) -> FrameStats {
        compose_frame(
            surface,
            self.globe.points(),
            self.globe.radius(),
            self.viewport,
            self.interaction.zoom,
        )
    }

    /// Apply queued input, step, and draw: everything a display refresh does.
    pub fn frame<S, I>(&mut self, events: I, surface: &mut S) -> FrameStats
    where
        S: DrawSurface + ?Sized,
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            self.handle(event);
        }
        self.tick();
        self.render(surface)
    }
}
