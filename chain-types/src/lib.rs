pub mod errors;
pub mod events;
pub mod ids;
pub mod moves;

// Re-export all types
pub use errors::*;
pub use events::*;
pub use ids::*;
pub use moves::*;
