//! SI unit tables: coherent base units, decimal prefixes, and named
//! derived units.

pub mod base;
pub mod derived;
pub mod prefixes;
