// Classification tags for written tokens and the pluggable markup
// backends that style them.

mod classifier;
mod renderer;
mod terminal;

// Re-export all public symbols
pub use classifier::*;
pub use renderer::*;
pub use terminal::*;
