//! Ambient "connected dots" background.
//!
//! `core` holds the simulation and compiles everywhere; the remaining modules
//! wire it to a browser canvas and only build for `wasm32`.

pub mod constants;
pub mod core;

#[cfg(target_arch = "wasm32")]
mod background;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod render;

#[cfg(target_arch = "wasm32")]
pub use background::{start, teardown_default, ParticleBackground};
