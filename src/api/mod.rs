//! JavaScript-facing surface (wasm-bindgen exports).

pub mod wasm;
