mod config;
mod curve;
mod error;
mod extrude;
mod measure;
mod order;
mod plan;

pub use config::*;
pub use curve::*;
pub use error::*;
pub use extrude::*;
pub use measure::*;
pub use order::*;
pub use plan::*;
