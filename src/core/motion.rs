use super::constants::{
    DRIFT_ROLL_PER_FRAME, DRIFT_YAW_PER_FRAME, EMISSIVE_BASE, EMISSIVE_PULSE_AMPLITUDE,
    EMISSIVE_PULSE_FREQ, POINTER_SENSITIVITY, SMOOTHING_FACTOR,
};
use glam::{EulerRot, Mat4, Quat};

/// Mesh orientation in radians, applied in X (pitch), Y (yaw), Z (roll) order.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Orientation {
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
}

impl Orientation {
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_quat(Quat::from_euler(
            EulerRot::XYZ,
            self.pitch,
            self.yaw,
            self.roll,
        ))
    }
}

/// Orientation the pointer asks for. Roll is never pointer driven.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerTarget {
    pub pitch: f32,
    pub yaw: f32,
}

/// Client-space rectangle of the hero container.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn center(&self) -> (f32, f32) {
        (self.left + self.width * 0.5, self.top + self.height * 0.5)
    }
}

/// Map a pointer position to a target orientation.
///
/// The pointer offset from the container center is normalized so the
/// container edges land on ±1, then scaled by `POINTER_SENSITIVITY`.
/// Horizontal offset drives yaw, vertical offset drives pitch. Returns `None`
/// for a degenerate rectangle so callers keep their previous target.
pub fn pointer_target(client_x: f32, client_y: f32, rect: Rect) -> Option<PointerTarget> {
    if !(rect.width > 0.0 && rect.height > 0.0) {
        return None;
    }
    let (cx, cy) = rect.center();
    let nx = (client_x - cx) / (rect.width * 0.5);
    let ny = (client_y - cy) / (rect.height * 0.5);
    if !(nx.is_finite() && ny.is_finite()) {
        return None;
    }
    Some(PointerTarget {
        pitch: ny * POINTER_SENSITIVITY,
        yaw: nx * POINTER_SENSITIVITY,
    })
}

#[inline]
pub fn approach(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}

#[inline]
pub fn emissive_intensity(elapsed_sec: f32) -> f32 {
    EMISSIVE_BASE + (elapsed_sec * EMISSIVE_PULSE_FREQ).sin() * EMISSIVE_PULSE_AMPLITUDE
}

/// Per-frame animation state of the hero mesh.
///
/// `step` is the only mutator of `orientation`: smoothing toward the pointer
/// target runs first, then the constant drift. A scene with several meshes
/// must keep one animator per mesh to preserve that ordering.
#[derive(Clone, Debug)]
pub struct MeshAnimator {
    pub orientation: Orientation,
    pub target: PointerTarget,
    pub emissive: f32,
}

impl Default for MeshAnimator {
    fn default() -> Self {
        Self {
            orientation: Orientation::default(),
            target: PointerTarget::default(),
            emissive: EMISSIVE_BASE,
        }
    }
}

impl MeshAnimator {
    pub fn set_target(&mut self, target: PointerTarget) {
        self.target = target;
    }

    pub fn smooth_toward_target(&mut self) {
        let o = &mut self.orientation;
        o.pitch = approach(o.pitch, self.target.pitch, SMOOTHING_FACTOR);
        o.yaw = approach(o.yaw, self.target.yaw, SMOOTHING_FACTOR);
    }

    pub fn apply_drift(&mut self) {
        self.orientation.yaw += DRIFT_YAW_PER_FRAME;
        self.orientation.roll += DRIFT_ROLL_PER_FRAME;
    }

    pub fn step(&mut self, elapsed_sec: f32) {
        self.emissive = emissive_intensity(elapsed_sec);
        self.smooth_toward_target();
        self.apply_drift();
    }
}
