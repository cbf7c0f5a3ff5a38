// The streaming core: escaping, literal formatting, position tracking,
// and the event-driven writer itself.

mod escape;
mod literal;
mod position;
mod writer;

// Re-export all public symbols
pub use escape::*;
pub use literal::*;
pub use position::*;
pub use writer::*;
