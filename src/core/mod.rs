pub mod constants;
pub mod error;
pub mod geometry;
pub mod hover;
pub mod motion;
pub mod scene;
pub mod schedule;
pub mod typewriter;

pub use error::SetupError;
pub use motion::{pointer_target, PointerTarget, Rect};
pub use scene::{HeroConfig, HeroScene, Viewport};
pub use schedule::{LoopHandle, TimerHost, TimerSlot};
pub use typewriter::{Typewriter, TypewriterConfig};

// Shader bundled as a string constant
pub static HERO_WGSL: &str = include_str!("../../shaders/hero.wgsl");
