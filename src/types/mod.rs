pub mod error;
pub mod model;

pub use error::{AutodocError, Result};
pub use model::*;
