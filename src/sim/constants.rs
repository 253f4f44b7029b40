// Simulation and projection tuning shared by the frame loop and the renderer.

// Point set
pub const PARTICLE_COUNT: usize = 600;
pub const GLOBE_RADIUS_RATIO: f32 = 0.3; // fraction of the smaller viewport side
pub const POINT_RADIUS_MIN: f32 = 1.0;
pub const POINT_RADIUS_MAX: f32 = 3.0;
pub const WAVE_AMPLITUDE_MIN: f32 = 5.0;
pub const WAVE_AMPLITUDE_MAX: f32 = 15.0;
pub const WAVE_SPEED_MIN: f32 = 0.01;
pub const WAVE_SPEED_MAX: f32 = 0.03;

// Frame stepping
pub const TIME_STEP: f64 = 0.01; // per frame, not per second
pub const ROTATION_EASING: f32 = 0.05;
pub const ZOOM_EASING: f32 = 0.1;
pub const AUTO_ROTATE_STEP: f32 = 0.001; // radians per frame while idle

// Input mapping
pub const DRAG_SENSITIVITY: f32 = 0.005; // radians per pixel
pub const WHEEL_SENSITIVITY: f32 = 0.001; // zoom per wheel delta unit
pub const ZOOM_MIN: f32 = 0.5;
pub const ZOOM_MAX: f32 = 3.0;

// Projection
pub const FOCAL_LENGTH: f32 = 900.0;
pub const NEAR_PLANE_Z: f32 = 500.0; // points at or beyond this z are not drawn
pub const MIN_POINT_SIZE: f32 = 0.1;

// Depth shading: z in [-300, 300] maps to brightness [0.2, 1]
pub const BRIGHTNESS_Z_NEAR: f32 = -300.0;
pub const BRIGHTNESS_Z_SPAN: f32 = 600.0;
pub const BRIGHTNESS_MIN: f32 = 0.2;
pub const BRIGHTNESS_MAX: f32 = 1.0;
pub const GLOW_BRIGHTNESS_THRESHOLD: f32 = 0.6;
pub const GLOW_INNER_FACTOR: f32 = 0.5;
pub const GLOW_OUTER_FACTOR: f32 = 3.0;

// Connective lines
pub const LINK_LOOKAHEAD: usize = 4; // neighbours considered in depth order
pub const LINK_DISTANCE_RATIO: f32 = 0.25; // of the globe radius
pub const LINK_ALPHA_SCALE: f32 = 0.15;
pub const LINK_WIDTH: f64 = 1.0;

// Motion trail
pub const TRAIL_FADE_ALPHA: f32 = 0.1;
