pub mod animation;
pub mod config;
pub mod constants;
pub mod field;
pub mod grid;
pub mod particle;
pub mod surface;
#[cfg(not(target_arch = "wasm32"))]
pub mod ticker;

pub use animation::*;
pub use config::*;
pub use field::*;
pub use grid::ProximityGrid;
pub use particle::*;
pub use surface::*;
#[cfg(not(target_arch = "wasm32"))]
pub use ticker::Ticker;
