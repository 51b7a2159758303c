mod component;
mod controller;
pub use component::*;
pub use controller::*;
