//! Listing output formatting.

use std::io::{self, Write};

use crate::walk::TraversalStep;

/// Writes traversal steps as listing lines.
///
/// Each step becomes one `Directory:` line followed by a `  Subfolder:` line
/// per subdirectory and a `  File:` line per file, with every child shown by
/// its full path.
pub struct ListingWriter<W: Write> {
    out: W,
}

impl<W: Write> ListingWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write the lines for one traversal step.
    pub fn write_step(&mut self, step: &TraversalStep) -> io::Result<()> {
        writeln!(self.out, "Directory: {}", step.path.display())?;

        for dir in step.dir_paths() {
            writeln!(self.out, "  Subfolder: {}", dir.display())?;
        }
        for file in step.file_paths() {
            writeln!(self.out, "  File: {}", file.display())?;
        }

        Ok(())
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
