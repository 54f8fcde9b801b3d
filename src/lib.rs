//! Sketch Kernel - vector math, particle integration and curve smoothing
//! for the sketchbook's canvas sketches, compiled to WASM
//!
//! Architecture:
//! - core/     - Logging macros
//! - math/     - Vector arithmetic
//! - physics/  - Particle integration, swarm stepping, flowfields
//! - curves/   - Chaikin smoothing
//! - domain/   - Sketch settings (JSON)
//! - api/      - wasm-bindgen exports

// Macros must be declared before the modules that use them
#[macro_use]
pub mod core;
pub mod math;
pub mod physics;
pub mod curves;
pub mod domain;
pub mod api;

use wasm_bindgen::prelude::*;

// Thread pool initialization for the parallel swarm step
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the kernel
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("sketch-kernel {} initialized", version());
}

/// Get kernel version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use api::wasm::{JsParticle, JsVector, Swarm};
pub use curves::{apply_chaikin_curve, Point};
pub use domain::settings::SketchSettings;
pub use math::Vector;
pub use physics::{apply_force, FlowField, Particle, ParticleSystem, PerfStats};
