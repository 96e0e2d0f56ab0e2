//! Computer build explorer: a fixed hierarchy of parts with price
//! aggregation and a typed visitor for memory cost reports.

pub mod arena;
pub mod catalog;
pub mod cli;
pub mod errors;
pub mod exitcode;
pub mod parts;
pub mod tree_traits;
pub mod util;
pub mod visitor;
