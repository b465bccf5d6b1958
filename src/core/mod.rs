pub mod address;
pub mod error;
pub mod types;

pub use address::*;
pub use error::*;
pub use types::*;
