use nalgebra::Vector2;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

#[inline]
pub fn vec2(t: (f64, f64)) -> Vector2<f64> {
    Vector2::new(t.0, t.1)
}

#[inline]
pub fn pair(v: Vector2<f64>) -> (f64, f64) {
    (v.x, v.y)
}

pub fn ensure_positive(name: &str, value: f64) -> PyResult<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(PyValueError::new_err(format!(
            "{name} must be positive and finite, got {value}"
        )))
    }
}
