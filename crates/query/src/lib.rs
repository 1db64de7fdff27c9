pub mod boundary;
pub mod request;
pub mod resolver;

pub use boundary::*;
pub use request::*;
pub use resolver::*;
