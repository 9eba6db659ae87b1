pub use glam::{DMat3, DMat4, DVec3};

/// Pixel dimensions `(width, height)` of a raw frame stream.
pub type Resolution = (u32, u32);
