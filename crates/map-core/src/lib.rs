pub mod config;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod style;
pub mod transform;

pub use config::*;
pub use error::*;
pub use geometry::*;
pub use layout::*;
pub use transform::*;
