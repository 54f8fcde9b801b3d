use crate::math::Vector;

/// Grid of angles steering particles in flowfield sketches
///
/// Cells are `cell_size` pixels square and stored row-major.
#[derive(Clone, Debug)]
pub struct FlowField {
    cols: u32,
    rows: u32,
    cell_size: f64,
    angles: Vec<f64>,
}

impl FlowField {
    pub fn new(cols: u32, rows: u32, cell_size: f64) -> Self {
        Self {
            cols,
            rows,
            cell_size,
            angles: vec![0.0; (cols as usize) * (rows as usize)],
        }
    }

    /// Build a field by evaluating `angle_at(col, row)` for every cell
    pub fn from_fn(cols: u32, rows: u32, cell_size: f64, mut angle_at: impl FnMut(u32, u32) -> f64) -> Self {
        let mut field = Self::new(cols, rows, cell_size);
        for row in 0..rows {
            for col in 0..cols {
                let idx = field.index(col, row);
                field.angles[idx] = angle_at(col, row);
            }
        }
        field
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    #[inline]
    fn index(&self, col: u32, row: u32) -> usize {
        (row as usize) * (self.cols as usize) + (col as usize)
    }

    #[inline]
    fn in_bounds(&self, col: u32, row: u32) -> bool {
        col < self.cols && row < self.rows
    }

    pub fn angle(&self, col: u32, row: u32) -> Option<f64> {
        if !self.in_bounds(col, row) {
            return None;
        }
        Some(self.angles[self.index(col, row)])
    }

    /// Returns false when the cell is outside the grid
    pub fn set_angle(&mut self, col: u32, row: u32, angle: f64) -> bool {
        if !self.in_bounds(col, row) {
            return false;
        }
        let idx = self.index(col, row);
        self.angles[idx] = angle;
        true
    }

    /// Force of length `strength` along the cell under `position`
    ///
    /// Positions outside the grid wrap around (the field tiles the plane).
    pub fn force_at(&self, position: Vector, strength: f64) -> Vector {
        if self.cols == 0 || self.rows == 0 {
            return Vector::ZERO;
        }
        let col = wrap_cell(position.x, self.cell_size, self.cols);
        let row = wrap_cell(position.y, self.cell_size, self.rows);
        Vector::from_angle(self.angles[self.index(col, row)], strength)
    }
}

#[inline]
fn wrap_cell(coord: f64, cell_size: f64, count: u32) -> u32 {
    let cell = (coord / cell_size).floor();
    if !cell.is_finite() {
        return 0;
    }
    let wrapped = cell.rem_euclid(count as f64) as u32;
    // rem_euclid can round up to `count` for tiny negative inputs
    wrapped.min(count - 1)
}
