use wasm_bindgen::prelude::*;

use crate::curves::{apply_chaikin_curve, Point};
use crate::domain::settings::SketchSettings;
use crate::math::Vector;
use crate::physics::{FlowField, Particle, ParticleSystem, PerfStats};

/// Vector exported to sketch scripts as `Vector`
#[wasm_bindgen(js_name = Vector)]
#[derive(Clone, Copy, Debug)]
pub struct JsVector {
    inner: Vector,
}

impl From<Vector> for JsVector {
    fn from(inner: Vector) -> Self {
        Self { inner }
    }
}

impl From<JsVector> for Vector {
    fn from(v: JsVector) -> Self {
        v.inner
    }
}

#[wasm_bindgen(js_class = Vector)]
impl JsVector {
    #[wasm_bindgen(constructor)]
    pub fn new(x: f64, y: f64) -> Self {
        Vector::new(x, y).into()
    }

    #[wasm_bindgen(js_name = newXyz)]
    pub fn new_xyz(x: f64, y: f64, z: f64) -> Self {
        Vector::new_3d(x, y, z).into()
    }

    #[wasm_bindgen(js_name = fromAngle)]
    pub fn from_angle(angle: f64, length: Option<f64>) -> Self {
        Vector::from_angle(angle, length.unwrap_or(1.0)).into()
    }

    #[wasm_bindgen(js_name = fromTuple)]
    pub fn from_tuple(tuple: Vec<f64>) -> Result<JsVector, JsError> {
        match tuple.as_slice() {
            [x, y] => Ok(Vector::new(*x, *y).into()),
            _ => Err(JsError::new(&format!("expected [x, y], got {} values", tuple.len()))),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> f64 { self.inner.x }
    #[wasm_bindgen(getter)]
    pub fn y(&self) -> f64 { self.inner.y }
    #[wasm_bindgen(getter)]
    pub fn z(&self) -> Option<f64> { self.inner.z }

    pub fn add(&self, other: &JsVector) -> JsVector {
        self.inner.add(other.inner).into()
    }

    pub fn subtract(&self, other: &JsVector) -> JsVector {
        self.inner.subtract(other.inner).into()
    }

    pub fn multiply(&self, scalar: f64) -> JsVector {
        self.inner.multiply(scalar).into()
    }

    pub fn divide(&self, scalar: f64) -> JsVector {
        self.inner.divide(scalar).into()
    }

    pub fn magnitude(&self) -> f64 {
        self.inner.magnitude()
    }

    pub fn normalize(&self) -> JsVector {
        self.inner.normalize().into()
    }

    pub fn limit(&self, max: f64) -> JsVector {
        self.inner.limit(max).into()
    }

    /// `[x, y]` for canvas calls
    #[wasm_bindgen(js_name = toTuple)]
    pub fn to_tuple(&self) -> Vec<f64> {
        let (x, y) = self.inner.to_tuple();
        vec![x, y]
    }
}

/// Particle exported to sketch scripts as `Particle`
#[wasm_bindgen(js_name = Particle)]
#[derive(Clone, Copy, Debug)]
pub struct JsParticle {
    inner: Particle,
}

impl From<Particle> for JsParticle {
    fn from(inner: Particle) -> Self {
        Self { inner }
    }
}

#[wasm_bindgen(js_class = Particle)]
impl JsParticle {
    /// Velocity defaults to zero and mass to 1
    #[wasm_bindgen(constructor)]
    pub fn new(x: f64, y: f64, vx: Option<f64>, vy: Option<f64>, mass: Option<f64>) -> Self {
        Particle::new(Vector::new(x, y))
            .with_velocity(Vector::new(vx.unwrap_or(0.0), vy.unwrap_or(0.0)))
            .with_mass(mass.unwrap_or(1.0))
            .into()
    }

    #[wasm_bindgen(getter)]
    pub fn position(&self) -> JsVector { self.inner.position.into() }
    #[wasm_bindgen(getter)]
    pub fn velocity(&self) -> JsVector { self.inner.velocity.into() }
    #[wasm_bindgen(getter)]
    pub fn mass(&self) -> f64 { self.inner.mass }

    /// Returns the next-frame particle; this one is left as it was
    #[wasm_bindgen(js_name = applyForce)]
    pub fn apply_force(&self, fx: f64, fy: f64, delta_time: Option<f64>, max_velocity: Option<f64>) -> JsParticle {
        self.inner
            .apply_force(Vector::new(fx, fy), delta_time.unwrap_or(1.0), max_velocity)
            .into()
    }
}

/// Chaikin-smooth a flat `[x0, y0, x1, y1, ...]` polyline
#[wasm_bindgen(js_name = chaikinCurve)]
pub fn chaikin_curve(flat: Vec<f64>, iterations: u32) -> Result<Vec<f64>, JsError> {
    let points = points_from_flat(&flat).map_err(|e| JsError::new(&e))?;
    Ok(points_to_flat(&apply_chaikin_curve(&points, iterations)))
}

pub(crate) fn points_from_flat(flat: &[f64]) -> Result<Vec<Point>, String> {
    if flat.len() % 2 != 0 {
        return Err(format!("expected interleaved x/y pairs, got {} values", flat.len()));
    }
    Ok(flat.chunks_exact(2).map(|c| Point::new(c[0], c[1])).collect())
}

pub(crate) fn points_to_flat(points: &[Point]) -> Vec<f64> {
    let mut out = Vec::with_capacity(points.len() * 2);
    for p in points {
        out.push(p.x);
        out.push(p.y);
    }
    out
}

/// Flowfield swarm: a particle system steered by an angle grid
#[wasm_bindgen]
pub struct Swarm {
    system: ParticleSystem,
    field: FlowField,
    settings: SketchSettings,
}

impl Swarm {
    pub fn with_settings(settings: SketchSettings, cols: u32, rows: u32, cell_size: f64) -> Self {
        Self {
            system: ParticleSystem::new(settings.physics),
            field: FlowField::new(cols, rows, cell_size),
            settings,
        }
    }

    pub fn system(&self) -> &ParticleSystem {
        &self.system
    }

    pub fn field(&self) -> &FlowField {
        &self.field
    }
}

#[wasm_bindgen]
impl Swarm {
    /// `settings_json` follows the sketch config format; pass `"{}"` for defaults
    #[wasm_bindgen(constructor)]
    pub fn new(settings_json: &str, cols: u32, rows: u32, cell_size: f64) -> Result<Swarm, JsError> {
        let settings = SketchSettings::from_json(settings_json).map_err(|e| JsError::new(&e))?;
        console_log!(
            "swarm: {}x{} field, cell {}px, dt {}",
            cols, rows, cell_size, settings.physics.delta_time
        );
        Ok(Self::with_settings(settings, cols, rows, cell_size))
    }

    #[wasm_bindgen(getter)]
    pub fn len(&self) -> u32 {
        self.system.len() as u32
    }

    #[wasm_bindgen(js_name = isEmpty)]
    pub fn is_empty(&self) -> bool {
        self.system.is_empty()
    }

    pub fn spawn(&mut self, x: f64, y: f64) {
        self.system.spawn_at(Vector::new(x, y));
    }

    pub fn clear(&mut self) {
        self.system.clear();
    }

    /// Returns false when the cell is outside the field
    #[wasm_bindgen(js_name = setAngle)]
    pub fn set_angle(&mut self, col: u32, row: u32, angle: f64) -> bool {
        self.field.set_angle(col, row, angle)
    }

    /// One frame: every particle is pushed along its cell's angle
    pub fn step(&mut self, strength: f64) {
        let field = &self.field;
        self.system.step(|p| field.force_at(p.position, strength));
    }

    /// Interleaved `[x0, y0, x1, y1, ...]`
    pub fn positions(&self) -> Vec<f64> {
        self.system.positions_flat()
    }

    /// Current positions as one polyline, smoothed with the configured passes
    #[wasm_bindgen(js_name = smoothedPath)]
    pub fn smoothed_path(&self) -> Vec<f64> {
        let points: Vec<Point> = self.system.particles().iter().map(|p| p.position.into()).collect();
        points_to_flat(&apply_chaikin_curve(&points, self.settings.smoothing.iterations))
    }

    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.system.enable_perf_metrics(enabled);
    }

    pub fn get_perf_stats(&self) -> PerfStats {
        self.system.perf_stats()
    }

    #[wasm_bindgen(js_name = settingsJson)]
    pub fn settings_json(&self) -> String {
        self.settings.to_json()
    }
}
