//! Core field extraction logic
//!
//! This module holds the pure, I/O free pieces of pk: escape handling for
//! user supplied strings, the line tokenizer, field argument parsing and the
//! field printer. Everything here works on in-memory strings so it can be
//! tested in isolation.

pub mod escapes;
pub mod field;
pub mod printer;
pub mod tokenizer;

pub use field::FieldSpec;
pub use printer::FieldPrinter;
pub use tokenizer::Tokenizer;

#[cfg(test)]
mod field_proptest;

#[cfg(test)]
mod tokenizer_proptest;
