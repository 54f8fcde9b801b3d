use wasm_bindgen::prelude::*;

/// Snapshot of the last swarm step (zeros while perf metrics are off)
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(crate) step_ms: f64,
    pub(crate) particles_processed: u32,
    pub(crate) steps_total: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn particles_processed(&self) -> u32 { self.particles_processed }
    #[wasm_bindgen(getter)]
    pub fn steps_total(&self) -> u32 { self.steps_total }
}
