use serde::{Deserialize, Serialize};

/// 2D vector with an optional third component
///
/// `z` only survives arithmetic when both operands carry it; mixing a 2D and
/// a 3D operand yields a strictly 2D result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
}

impl Vector {
    pub const ZERO: Vector = Vector { x: 0.0, y: 0.0, z: None };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: None }
    }

    pub const fn new_3d(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z: Some(z) }
    }

    pub fn is_3d(&self) -> bool {
        self.z.is_some()
    }

    /// Unit-length (or `length`) 2D vector pointing at `angle` radians
    pub fn from_angle(angle: f64, length: f64) -> Self {
        Self::new(length * angle.cos(), length * angle.sin())
    }

    pub fn from_tuple((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }

    /// Drops `z`; drawing APIs only take pairs
    pub fn to_tuple(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    pub fn add(&self, other: Vector) -> Self {
        *self + other
    }

    pub fn subtract(&self, other: Vector) -> Self {
        *self - other
    }

    pub fn multiply(&self, scalar: f64) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z.map(|z| z * scalar),
        }
    }

    /// Division by zero is not guarded and yields inf/NaN components
    pub fn divide(&self, scalar: f64) -> Self {
        Self {
            x: self.x / scalar,
            y: self.y / scalar,
            z: self.z.map(|z| z / scalar),
        }
    }

    pub fn magnitude_squared(&self) -> f64 {
        let z = self.z.unwrap_or(0.0);
        self.x * self.x + self.y * self.y + z * z
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Caller guarantees a non-zero vector; zero input produces NaN
    pub fn normalize(&self) -> Self {
        self.divide(self.magnitude())
    }

    /// Rescale to `max` when longer than `max`, otherwise return unchanged
    pub fn limit(&self, max: f64) -> Self {
        let mag = self.magnitude();
        if mag > max {
            self.multiply(max / mag)
        } else {
            *self
        }
    }

    pub fn dot(&self, other: Vector) -> f64 {
        let z = zip_z(self.z, other.z, |a, b| a * b).unwrap_or(0.0);
        self.x * other.x + self.y * other.y + z
    }

    pub fn distance(&self, other: Vector) -> f64 {
        self.subtract(other).magnitude()
    }

    /// 2D heading in radians, the inverse of `from_angle`
    pub fn heading(&self) -> f64 {
        self.y.atan2(self.x)
    }
}

#[inline]
fn zip_z(a: Option<f64>, b: Option<f64>, f: impl FnOnce(f64, f64) -> f64) -> Option<f64> {
    match (a, b) {
        (Some(a), Some(b)) => Some(f(a, b)),
        _ => None,
    }
}

impl From<(f64, f64)> for Vector {
    fn from(t: (f64, f64)) -> Self {
        Self::from_tuple(t)
    }
}

impl From<Vector> for (f64, f64) {
    fn from(v: Vector) -> Self {
        v.to_tuple()
    }
}

impl std::ops::Add for Vector {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: zip_z(self.z, rhs.z, |a, b| a + b),
        }
    }
}

impl std::ops::Sub for Vector {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: zip_z(self.z, rhs.z, |a, b| a - b),
        }
    }
}

impl std::ops::Mul<f64> for Vector {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        self.multiply(rhs)
    }
}

impl std::ops::Div<f64> for Vector {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        self.divide(rhs)
    }
}

impl std::ops::Neg for Vector {
    type Output = Self;
    fn neg(self) -> Self {
        self.multiply(-1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn add_and_subtract_are_component_wise() {
        let a = Vector::new(1.0, 2.0);
        let b = Vector::new(3.0, -5.0);
        assert_eq!(a + b, Vector::new(4.0, -3.0));
        assert_eq!(a - b, Vector::new(-2.0, 7.0));
    }

    #[test]
    fn z_survives_only_when_both_operands_have_it() {
        let a = Vector::new_3d(1.0, 1.0, 2.0);
        let b = Vector::new_3d(1.0, 1.0, 3.0);
        assert_eq!((a + b).z, Some(5.0));
        assert_eq!((a - b).z, Some(-1.0));

        let flat = Vector::new(1.0, 1.0);
        assert_eq!((a + flat).z, None);
        assert_eq!((flat - a).z, None);
        assert_eq!(a + flat, Vector::new(2.0, 2.0));
    }

    #[test]
    fn scaling_keeps_dimensionality() {
        let v = Vector::new_3d(2.0, 4.0, 6.0);
        assert_eq!(v * 0.5, Vector::new_3d(1.0, 2.0, 3.0));
        assert_eq!(v / 2.0, Vector::new_3d(1.0, 2.0, 3.0));
        assert_eq!(-Vector::new(1.0, -1.0), Vector::new(-1.0, 1.0));
    }

    #[test]
    fn divide_by_zero_is_not_guarded() {
        let v = Vector::new(1.0, 0.0) / 0.0;
        assert!(v.x.is_infinite());
        assert!(v.y.is_nan());
    }

    #[test]
    fn magnitude_includes_z() {
        assert!(approx(Vector::new(3.0, 4.0).magnitude(), 5.0));
        assert!(approx(Vector::new_3d(2.0, 3.0, 6.0).magnitude(), 7.0));
    }

    #[test]
    fn normalize_yields_unit_length() {
        for v in [
            Vector::new(3.0, 4.0),
            Vector::new(-0.001, 0.002),
            Vector::new(1e6, -3e5),
            Vector::new_3d(1.0, -2.0, 2.0),
        ] {
            assert!(approx(v.normalize().magnitude(), 1.0));
        }
    }

    #[test]
    fn normalize_zero_is_nan() {
        let n = Vector::ZERO.normalize();
        assert!(n.x.is_nan() && n.y.is_nan());
    }

    #[test]
    fn limit_is_identity_within_bound() {
        let v = Vector::new(3.0, 4.0);
        assert_eq!(v.limit(5.0), v);
        assert_eq!(v.limit(10.0), v);
    }

    #[test]
    fn limit_rescales_and_keeps_direction() {
        let v = Vector::new(30.0, 40.0);
        let limited = v.limit(5.0);
        assert!(approx(limited.magnitude(), 5.0));
        let (a, b) = (limited.normalize(), v.normalize());
        assert!(approx(a.x, b.x) && approx(a.y, b.y));
    }

    #[test]
    fn from_angle_uses_length() {
        let v = Vector::from_angle(std::f64::consts::FRAC_PI_2, 2.0);
        assert!(approx(v.x, 0.0));
        assert!(approx(v.y, 2.0));
        assert!(approx(Vector::from_angle(0.7, 1.0).heading(), 0.7));
    }

    #[test]
    fn tuple_conversion_drops_z() {
        let v = Vector::new_3d(1.5, -2.5, 9.0);
        assert_eq!(v.to_tuple(), (1.5, -2.5));
        assert_eq!(Vector::from_tuple((1.5, -2.5)), Vector::new(1.5, -2.5));
        let t: (f64, f64) = Vector::new(7.0, 8.0).into();
        assert_eq!(t, (7.0, 8.0));
    }

    #[test]
    fn dot_and_distance() {
        assert!(approx(Vector::new(1.0, 2.0).dot(Vector::new(3.0, 4.0)), 11.0));
        assert!(approx(Vector::new(0.0, 0.0).distance(Vector::new(3.0, 4.0)), 5.0));
    }

    #[test]
    fn serde_omits_missing_z() {
        let json = serde_json::to_string(&Vector::new(1.0, 2.0)).unwrap();
        assert_eq!(json, r#"{"x":1.0,"y":2.0}"#);
        let v: Vector = serde_json::from_str(r#"{"x":1,"y":2,"z":3}"#).unwrap();
        assert_eq!(v, Vector::new_3d(1.0, 2.0, 3.0));
    }
}
