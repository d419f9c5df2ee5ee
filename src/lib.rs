//! Dirlist - walks a directory tree and lists each directory's contents

pub mod error;
pub mod output;
pub mod walk;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::WalkError;
pub use output::ListingWriter;
pub use walk::{TraversalStep, Walk};
