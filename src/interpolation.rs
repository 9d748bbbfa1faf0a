/// Linear interpolation of `x` between `(x0, y0)` and `(x1, y1)`.
///
/// When `x0 == x1` the line is undefined and the midpoint of `y0` and `y1`
/// is returned instead of dividing by zero.
#[must_use]
pub fn linear(x: f64, x0: f64, x1: f64, y0: f64, y1: f64) -> f64 {
    let dx = x1 - x0;
    if dx == 0.0 {
        return (y0 + y1) / 2.0;
    }
    y0 + (x - x0) * (y1 - y0) / dx
}
