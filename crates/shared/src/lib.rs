mod date;
mod error;

pub use date::*;
pub use error::*;
