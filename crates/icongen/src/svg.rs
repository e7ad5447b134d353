//! SVG markup parser module

pub mod model;
pub mod parser;

pub use model::{Content, Element};
pub use parser::Parser;
