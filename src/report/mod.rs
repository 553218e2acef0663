// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Report rendering.
//!
//! Turns groups and the status tally into the text or JSON report, with a
//! commit granularity recommendation and example commit messages.

mod render;
mod suggestion;

pub use render::{GroupReport, Report, TextRenderer};
pub use suggestion::{example_message, example_subject, Recommendation};
