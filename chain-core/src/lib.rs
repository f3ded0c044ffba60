pub mod dictionary;
pub mod dueum;
pub mod selector;
pub mod session;

// Re-export main components
pub use dictionary::*;
pub use selector::*;
pub use session::*;
