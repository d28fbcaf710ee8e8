//! Domain types for Edit Review
//! Defines the entries under review, the answers collected for them and the
//! errors raised along the way.

pub mod entry;
pub mod error;
pub mod review;

pub use entry::*;
pub use error::*;
pub use review::*;
