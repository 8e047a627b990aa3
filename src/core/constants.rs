// Shared animation and timing constants used by the web frontend.

// Mesh motion
pub const SMOOTHING_FACTOR: f32 = 0.05; // fraction of the remaining distance covered per frame
pub const POINTER_SENSITIVITY: f32 = 0.5; // radians at the container edge
pub const DRIFT_YAW_PER_FRAME: f32 = 0.002;
pub const DRIFT_ROLL_PER_FRAME: f32 = 0.001;

// Emissive glow pulse: base + sin(t * freq) * amplitude
pub const EMISSIVE_BASE: f32 = 0.3;
pub const EMISSIVE_PULSE_AMPLITUDE: f32 = 0.1;
pub const EMISSIVE_PULSE_FREQ: f32 = 2.0; // rad/s

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_Z: f32 = 3.0;

// Mesh
pub const SHAPE_RADIUS: f32 = 1.0;
pub const MSAA_SAMPLES: u32 = 4;

// Typewriter timings (milliseconds)
pub const TYPE_SPEED_MS: u32 = 150;
pub const DELETE_SPEED_MS: u32 = 50;
pub const DWELL_MS: u32 = 1500; // hold at a fully typed phrase
pub const WORD_PAUSE_MS: u32 = 500; // gap before the next phrase starts
pub const STARTUP_DELAY_MS: u32 = 1000;

pub const DEFAULT_PHRASES: [&str; 5] = [
    "Game Developer",
    "XR Developer",
    "Unity Developer",
    "Software Engineer",
    "3D Modeler",
];
