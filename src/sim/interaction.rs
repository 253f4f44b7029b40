use super::constants::*;

/// Input intent queued by the DOM handlers and applied at the start of a frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    PointerDown { x: f32, y: f32 },
    PointerMove { x: f32, y: f32 },
    PointerUp,
    Wheel { delta_y: f32 },
    Resize { width: u32, height: u32 },
}

/// Queue an event. Consecutive moves collapse into the latest one: the drag
/// delta only depends on the first and last pointer position. Consecutive
/// resizes collapse the same way. Wheel events are kept since the zoom clamp
/// is not additive.
pub fn push_event(queue: &mut Vec<InputEvent>, event: InputEvent) {
    let collapsible = matches!(
        event,
        InputEvent::PointerMove { .. } | InputEvent::Resize { .. }
    );
    if let Some(last) = queue.last_mut() {
        if collapsible && std::mem::discriminant(last) == std::mem::discriminant(&event) {
            *last = event;
            return;
        }
    }
    queue.push(event);
}

/// Rotation and zoom as displayed, plus the targets they ease toward.
#[derive(Clone, Copy, Debug)]
pub struct Interaction {
    pub rotation_x: f32,
    pub rotation_y: f32,
    pub zoom: f32,
    pub target_rotation_x: f32,
    pub target_rotation_y: f32,
    pub target_zoom: f32,
    pub dragging: bool,
    pub last_x: f32,
    pub last_y: f32,
}

impl Default for Interaction {
    fn default() -> Self {
        Self {
            rotation_x: 0.0,
            rotation_y: 0.0,
            zoom: 1.0,
            target_rotation_x: 0.0,
            target_rotation_y: 0.0,
            target_zoom: 1.0,
            dragging: false,
            last_x: 0.0,
            last_y: 0.0,
        }
    }
}

/// Move `current` toward `target` by `fraction` of the remaining gap.
#[inline]
pub fn ease(current: f32, target: f32, fraction: f32) -> f32 {
    current + (target - current) * fraction
}

impl Interaction {
    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.dragging = true;
        self.last_x = x;
        self.last_y = y;
    }

    /// Horizontal drag yaws, vertical drag pitches; ignored unless dragging.
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        if !self.dragging {
            return;
        }
        let dx = x - self.last_x;
        let dy = y - self.last_y;
        self.target_rotation_y += dx * DRAG_SENSITIVITY;
        self.target_rotation_x -= dy * DRAG_SENSITIVITY;
        self.last_x = x;
        self.last_y = y;
    }

    pub fn pointer_up(&mut self) {
        self.dragging = false;
    }

    pub fn wheel(&mut self, delta_y: f32) {
        let zoom = (self.target_zoom - delta_y * WHEEL_SENSITIVITY).clamp(ZOOM_MIN, ZOOM_MAX);
        // NaN leaves the target untouched; infinities land on a bound
        if !zoom.is_nan() {
            self.target_zoom = zoom;
        }
    }

    /// Apply a queued pointer or wheel event. Resize is handled by the owner
    /// of the viewport and is a no-op here.
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown { x, y } => self.pointer_down(x, y),
            InputEvent::PointerMove { x, y } => self.pointer_move(x, y),
            InputEvent::PointerUp => self.pointer_up(),
            InputEvent::Wheel { delta_y } => self.wheel(delta_y),
            InputEvent::Resize { .. } => {}
        }
    }

    /// Ease toward the targets, then nudge the yaw target while idle.
    pub fn step(&mut self) {
        self.rotation_x = ease(self.rotation_x, self.target_rotation_x, ROTATION_EASING);
        self.rotation_y = ease(self.rotation_y, self.target_rotation_y, ROTATION_EASING);
        self.zoom = ease(self.zoom, self.target_zoom, ZOOM_EASING);
        if !self.dragging {
            self.target_rotation_y += AUTO_ROTATE_STEP;
        }
    }
}
