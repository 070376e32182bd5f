//! View layer: pure functions from state to widget trees.

pub mod carousel;
pub mod gallery;
pub mod order;
pub mod sections;
pub mod theme;
