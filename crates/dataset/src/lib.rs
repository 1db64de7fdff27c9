pub mod loader;
pub mod sample;
pub mod types;

pub use loader::*;
pub use types::*;
