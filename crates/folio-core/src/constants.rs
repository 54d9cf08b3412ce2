// Tuning constants for every interaction on the page.

// Cursor follower
pub const CURSOR_FOLLOW_SEC: f32 = 0.3; // lag of the custom cursor behind the pointer

// Magnetic buttons
pub const MAGNETIC_STRENGTH: f32 = 0.3; // fraction of the center offset applied as displacement
pub const MAGNETIC_FOLLOW_SEC: f32 = 0.5;
pub const MAGNETIC_RETURN_SEC: f32 = 0.5;
pub const MAGNETIC_ELASTIC_AMPLITUDE: f32 = 1.0;
pub const MAGNETIC_ELASTIC_PERIOD: f32 = 0.3;

// Hero title entrance
pub const HERO_DURATION_SEC: f32 = 1.0;
pub const HERO_DELAY_SEC: f32 = 0.5; // before the first fragment
pub const HERO_STAGGER_SEC: f32 = 0.1; // between successive fragments

// Scroll reveal
pub const REVEAL_DURATION_SEC: f32 = 1.0;
pub const REVEAL_START_FRACTION: f32 = 0.9; // element top vs viewport height
// Window events that re-evaluate pending reveals. `load` covers late images and fonts.
pub const REVEAL_CHECK_EVENTS: [&str; 3] = ["scroll", "resize", "load"];

// Horizontal gallery
pub const GALLERY_REFRESH_EVENTS: [&str; 2] = ["resize", "load"]; // re-measure track overflow

// Particle background
pub const PARTICLE_COUNT: usize = 5000;
pub const PARTICLE_HALF_EXTENT: f32 = 1000.0; // coordinates lie in [-extent, extent]
pub const PARTICLE_SIZE: f32 = 1.5;
pub const PARTICLE_COLOR: [f32; 4] = [0.533, 0.533, 0.533, 1.0]; // #888888
pub const PARTICLE_SPIN_PER_MS: f64 = 0.00005 * 0.5; // radians of Y rotation per wall-clock ms
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 1.0;
pub const CAMERA_FAR: f32 = 10_000.0;
pub const CAMERA_Z: f32 = 1000.0;
pub const CAMERA_POINTER_SCALE: f32 = 0.1; // pointer px -> camera units
pub const CAMERA_FOLLOW: f32 = 0.05; // fraction of the remaining distance per frame

// Contact form
pub const CONTACT_ENDPOINT: &str = "https://eoqih2cuoy6927o.m.pipedream.net";
pub const STATUS_SENDING: &str = "Sending...";
pub const STATUS_SENT: &str = "✅ Message sent successfully!";
pub const STATUS_FAILED: &str = "❌ Failed to send message. Try again later.";
pub const STATUS_NETWORK_ERROR: &str = "⚠️ Network error. Please try again.";
