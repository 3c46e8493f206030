//! Unit conversion engine
//!
//! Directed conversion graph with breadth-first factor composition and the
//! affine temperature special case.

pub mod graph;
pub mod temperature;

mod seed;

pub use graph::{ConversionGraph, ConvertError, ConvertResult};
