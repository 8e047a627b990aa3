// Host-side tests for setup error messages.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod error {
    include!("../src/core/error.rs");
}

use error::SetupError;

#[test]
fn missing_element_names_the_id() {
    let e = SetupError::MissingElement("threejs-container");
    assert_eq!(e.to_string(), "element `threejs-container` not found");
}

#[test]
fn gpu_errors_carry_the_cause() {
    let e = SetupError::Gpu("no WebGPU adapter".into());
    assert_eq!(e.to_string(), "gpu setup failed: no WebGPU adapter");
}

#[test]
fn setup_errors_convert_into_anyhow() {
    let e: anyhow::Error = SetupError::MissingElement("threejs-container").into();
    assert!(matches!(
        e.downcast_ref::<SetupError>(),
        Some(SetupError::MissingElement("threejs-container"))
    ));
}
