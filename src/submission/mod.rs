pub mod fields;
pub mod parser;

pub use parser::FieldMap;
