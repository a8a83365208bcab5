//! Turning songs into styled text runs and runs into pages.
//!
//! A format string is interpreted per song into [`StyledRun`]s. Runs are
//! immutable descriptors; a [`Typesetter`] decides where and how they land on
//! the page.

mod format;
mod layout;
mod pdf;

pub use format::{Directive, FieldValue, Format, StyledRun};
pub use layout::{Layout, PageGeometry, Placement};
pub use pdf::PdfTypesetter;

use crate::error::Result;

/// Consumer of rendered runs, one song per row.
pub trait Typesetter {
    /// Place one run. A run that is not `continued` ends the current line.
    fn write_run(&mut self, run: &StyledRun) -> Result<()>;

    /// Close the current song's row. Starts a new line if the row's last run
    /// left it open.
    fn end_row(&mut self) -> Result<()>;
}
