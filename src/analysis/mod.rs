// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Change classification and grouping.
//!
//! Every function here is pure and total: any path yields a type and a
//! scope, and any change list yields a complete partition into groups.

mod classifier;
pub mod classify;
mod grouping;
pub mod scope;
mod tally;

pub use classifier::{classify_type, extract_scope, Classifier};
pub use classify::{TypeRule, TypeTable};
pub use grouping::{group, Group};
pub use scope::{Scope, ScopeExtractor};
pub use tally::{tally, StatusTally};
