//! A module that contains the primitives, utilities and data-structures that
//! are shared by the engines.

pub mod color;
pub mod error;
pub mod sanitize;
pub mod utils;
