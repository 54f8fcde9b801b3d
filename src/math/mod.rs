//! Vector math shared by the physics kernel and the curve tools.

mod vector;

pub use vector::Vector;
