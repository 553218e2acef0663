// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for cg.
//!
//! This module handles locating, loading and parsing the optional cg.toml
//! file. Every field has a default, so an empty file behaves exactly like
//! no file at all.

pub mod default;
mod loader;
mod schema;

pub use loader::{find_config_file, load_config, load_config_from, parse_config};
pub use schema::*;
