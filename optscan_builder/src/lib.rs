//! Builder module for `optscan`.
//! See the `optscan` crate root for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod model;
mod parser;

pub use api::*;
pub use model::*;
pub use parser::{Action, ConfigError, GeneralParser, ParseError};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
