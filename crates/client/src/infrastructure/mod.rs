//! Infrastructure adapters

#[cfg(not(target_arch = "wasm32"))]
pub mod http;
pub mod testing;
