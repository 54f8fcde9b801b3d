pub mod settings;

pub use settings::{PhysicsSettings, SketchSettings, SmoothingSettings};
