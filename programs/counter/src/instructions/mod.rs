//! Instructions module for the Counter program
//!
//! Each instruction is implemented in its own file together with its
//! account validation context.

pub mod initialize;
pub mod increment;

// Re-export instruction handlers
pub use initialize::*;
pub use increment::*;
