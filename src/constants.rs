// DOM contract of the portfolio page.

// Hero banner container; the WebGPU canvas is appended to it
pub const HERO_CONTAINER_ID: &str = "threejs-container";

// Headline span rewritten by the typewriter
pub const TYPING_TARGET_SELECTOR: &str = ".typing-text span";

// Project cards that get hover lift
pub const PROJECT_CARD_SELECTOR: &str = ".projects-thumb";

// Class set on the generated canvas so page CSS can target it
pub const HERO_CANVAS_CLASS: &str = "hero-canvas";
