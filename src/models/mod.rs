//! Domain models for the word service.
//!
//! There is one entity, [`word::Word`]; everything stored or listed is
//! derived from it.

pub mod word;
