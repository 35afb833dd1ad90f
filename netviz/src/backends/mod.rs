//! Backends that turn the DOT text into pictures.

pub mod graphviz;
