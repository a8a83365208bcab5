//! Orchestrates a listing run: settings, scan, score join, sort, filter and
//! render, strictly in that order.

mod pipeline;
mod settings;

pub use pipeline::{Outcome, build_catalog, execute, render_listing};
pub use settings::{Overrides, load_settings};

use crate::error::Result;

pub fn run(overrides: &Overrides) -> Result<Outcome> {
    let settings = load_settings(overrides);
    execute(&settings)
}
