pub mod config;
pub mod error;
pub mod filter;

pub use config::*;
pub use error::*;
pub use filter::*;
