pub mod animator;
pub mod bounds;
pub mod fit;

pub use animator::*;
pub use bounds::*;
pub use fit::*;
