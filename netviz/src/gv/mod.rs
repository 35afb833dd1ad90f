//! A module that contains everything that has to do with producing the
//! GraphViz file format: the AST, the printer, record labels and the
//! document front matter.

pub mod ast;
pub mod emitter;
pub mod printer;
pub mod record;

pub use emitter::{DotDocument, FrontMatter};
pub use printer::to_dot;
pub use record::{parse_record_string, RecordDef};
