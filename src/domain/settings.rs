use serde::{Deserialize, Serialize};

/// Chaikin passes beyond this blow up point counts (each pass doubles them)
pub const MAX_SMOOTHING_ITERATIONS: u32 = 10;

/// Per-sketch parameters, loaded from the sketch's JSON config
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SketchSettings {
    #[serde(default)]
    pub physics: PhysicsSettings,
    #[serde(default)]
    pub smoothing: SmoothingSettings,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicsSettings {
    #[serde(default = "default_delta_time")]
    pub delta_time: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_velocity: Option<f64>,
    /// Mass given to newly spawned particles
    #[serde(default = "default_mass")]
    pub mass: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmoothingSettings {
    #[serde(default = "default_iterations")]
    pub iterations: u32,
}

fn default_delta_time() -> f64 {
    1.0
}

fn default_mass() -> f64 {
    1.0
}

fn default_iterations() -> u32 {
    2
}

impl Default for PhysicsSettings {
    fn default() -> Self {
        Self {
            delta_time: default_delta_time(),
            max_velocity: None,
            mass: default_mass(),
        }
    }
}

impl Default for SmoothingSettings {
    fn default() -> Self {
        Self {
            iterations: default_iterations(),
        }
    }
}

impl SketchSettings {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let settings: SketchSettings = serde_json::from_str(json).map_err(|e| e.to_string())?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<(), String> {
        self.physics.validate()?;
        self.smoothing.validate()
    }
}

impl PhysicsSettings {
    pub fn validate(&self) -> Result<(), String> {
        if !(self.delta_time.is_finite() && self.delta_time > 0.0) {
            return Err(format!("physics.deltaTime must be positive, got {}", self.delta_time));
        }
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(format!("physics.mass must be positive, got {}", self.mass));
        }
        if let Some(max) = self.max_velocity {
            if max.is_nan() || max < 0.0 {
                return Err(format!("physics.maxVelocity must be >= 0, got {}", max));
            }
        }
        Ok(())
    }
}

impl SmoothingSettings {
    pub fn validate(&self) -> Result<(), String> {
        if self.iterations > MAX_SMOOTHING_ITERATIONS {
            return Err(format!(
                "smoothing.iterations must be <= {}, got {}",
                MAX_SMOOTHING_ITERATIONS, self.iterations
            ));
        }
        Ok(())
    }
}
