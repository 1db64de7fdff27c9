pub mod camera;
pub mod ease;
pub mod geo;
pub mod time;

// Foundation crate: small, well-tested primitives only.
pub use camera::*;
pub use ease::*;
pub use geo::*;
pub use time::*;
