//! Layout primitives consumed by the margin filters.
//!
//! A document is an ordered list of blocks; each block owns the positioned
//! tokens it groups, remembers its page, and records the slice it occupies in
//! the document-wide flat token array.

pub mod block;
pub mod document;
pub mod token;

// Re-export main types
pub use block::{Block, Page};
pub use document::{retokenize, Document};
pub use token::PositionedToken;
