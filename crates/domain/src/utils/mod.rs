//! Helpers shared by the wire types and the renderers

pub mod display;
pub mod timestamp;
