//! Platform-free description of the hero scene.
//!
//! These types avoid referencing web or GPU APIs so the camera, resize and
//! per-frame logic can be exercised on the host. The web frontend reads them
//! to fill GPU uniforms each frame.

use super::constants::{CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR, CAMERA_Z};
use super::motion::{MeshAnimator, PointerTarget};
use glam::{Mat4, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn hero(aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// CSS size of the drawing surface plus the device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub css_width: f32,
    pub css_height: f32,
    pub pixel_ratio: f32,
}

impl Viewport {
    /// Backing-store size in device pixels, never below 1x1.
    pub fn backing_size(&self) -> (u32, u32) {
        let w = (self.css_width * self.pixel_ratio).floor() as u32;
        let h = (self.css_height * self.pixel_ratio).floor() as u32;
        (w.max(1), h.max(1))
    }

    /// Width over height; 1.0 while either side is not positive.
    pub fn aspect(&self) -> f32 {
        if self.css_width > 0.0 && self.css_height > 0.0 {
            self.css_width / self.css_height
        } else {
            1.0
        }
    }
}

/// Linear RGB from an sRGB hex color such as `0x7e88c8`.
pub fn srgb_hex_to_linear(hex: u32) -> [f32; 3] {
    let channel = |shift: u32| {
        let c = ((hex >> shift) & 0xff) as f32 / 255.0;
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    [channel(16), channel(8), channel(0)]
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub color: u32,
    pub intensity: f32,
    pub range: f32,
    pub position: Vec3,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmbientLight {
    pub color: u32,
    pub intensity: f32,
}

/// Flat-shaded, semi-metallic material with an emissive term.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeMaterial {
    pub color: u32,
    pub emissive: u32,
    pub metalness: f32,
    pub roughness: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Lighting {
    pub ambient: AmbientLight,
    pub points: [PointLight; 2],
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            ambient: AmbientLight {
                color: 0xffffff,
                intensity: 0.5,
            },
            points: [
                // bluish key light
                PointLight {
                    color: 0x8a9afc,
                    intensity: 1.5,
                    range: 100.0,
                    position: Vec3::new(5.0, 5.0, 5.0),
                },
                // cyan rim light
                PointLight {
                    color: 0x38d6e1,
                    intensity: 1.0,
                    range: 100.0,
                    position: Vec3::new(-5.0, -3.0, 2.0),
                },
            ],
        }
    }
}

impl Default for ShapeMaterial {
    fn default() -> Self {
        Self {
            color: 0x7e88c8,
            emissive: 0x38d6e1,
            metalness: 0.3,
            roughness: 0.6,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct HeroConfig {
    pub lighting: Lighting,
    pub material: ShapeMaterial,
}

/// Everything the hero banner animates, independent of how it is drawn.
#[derive(Clone, Debug)]
pub struct HeroScene {
    pub config: HeroConfig,
    pub camera: Camera,
    pub viewport: Viewport,
    pub animator: MeshAnimator,
}

impl HeroScene {
    pub fn new(config: HeroConfig, viewport: Viewport) -> Self {
        // A container not laid out yet gets a square projection until resized
        Self {
            config,
            camera: Camera::hero(viewport.aspect()),
            viewport,
            animator: MeshAnimator::default(),
        }
    }

    pub fn pointer_moved(&mut self, target: Option<PointerTarget>) {
        if let Some(t) = target {
            self.animator.set_target(t);
        }
    }

    /// Apply a container resize. Zero-sized containers are ignored so the
    /// projection never degenerates. Returns whether anything changed.
    pub fn resize(&mut self, css_width: f32, css_height: f32, pixel_ratio: f32) -> bool {
        if !(css_width > 0.0 && css_height > 0.0) {
            return false;
        }
        self.viewport = Viewport {
            css_width,
            css_height,
            pixel_ratio: if pixel_ratio > 0.0 { pixel_ratio } else { 1.0 },
        };
        self.camera.aspect = self.viewport.aspect();
        true
    }

    pub fn advance(&mut self, elapsed_sec: f32) {
        self.animator.step(elapsed_sec);
    }
}
