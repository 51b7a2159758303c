// Primitives
pub mod button;
pub mod menu;
pub mod search_input;

// Composites: depend on the primitives above
pub mod filter_bar;
pub mod filter_options;

// Re-exports for convenience
pub use button::*;
pub use filter_bar::*;
pub use filter_options::*;
pub use menu::*;
pub use search_input::*;
