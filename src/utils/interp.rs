use thiserror::Error;
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SplineError {
    #[error("The number of X values ({x_len}) must match the number of Y values ({y_len}).")]
    DimensionMismatch { x_len: usize, y_len: usize },
    #[error("At least 3 points are required for cubic spline interpolation (got {found}).")]
    InsufficientPoints { found: usize },
    #[error("X values must be sorted in strictly increasing order with no duplicates or non-finite values (violated at index {index}).")]
    UnsortedOrDuplicateAbscissas { index: usize },
    #[error("Target point ({target}) is out of bounds: {min} to {max}.")]
    OutOfBounds { target: f64, min: f64, max: f64 },
    #[error("No suitable interval found for x_target ({target}).")]
    InternalInvariantViolation { target: f64 },
}
impl SplineError {
    pub fn is_input_error(&self) -> bool {
        !matches!(self, SplineError::InternalInvariantViolation { .. })
    }
}
struct NaturalCubic<'a> {
    x: &'a [f64],
    coeffs: Vec<[f64; 4]>,
}
impl<'a> NaturalCubic<'a> {
    fn new(x: &'a [f64], y: &[f64]) -> Self {
        let n = x.len();
        let h: Vec<f64> = x.windows(2).map(|w| w[1] - w[0]).collect();
        let mut alpha = vec![0.0; n];
        for i in 1..n - 1 {
            alpha[i] = 3.0 / h[i] * (y[i + 1] - y[i]) - 3.0 / h[i - 1] * (y[i] - y[i - 1]);
        }
        // Forward sweep of the tridiagonal system. l[0] = l[n-1] = 1 and
        // z[0] = z[n-1] = 0 pin c to zero at both ends.
        let mut l = vec![1.0; n];
        let mut mu = vec![0.0; n];
        let mut z = vec![0.0; n];
        for i in 1..n - 1 {
            l[i] = 2.0 * (x[i + 1] - x[i - 1]) - h[i - 1] * mu[i - 1];
            mu[i] = h[i] / l[i];
            z[i] = (alpha[i] - h[i - 1] * z[i - 1]) / l[i];
        }
        let mut c = vec![0.0; n];
        let mut coeffs = vec![[0.0; 4]; n - 1];
        for j in (0..n - 1).rev() {
            c[j] = z[j] - mu[j] * c[j + 1];
            let b = (y[j + 1] - y[j]) / h[j] - h[j] * (c[j + 1] + 2.0 * c[j]) / 3.0;
            let d = (c[j + 1] - c[j]) / (3.0 * h[j]);
            coeffs[j] = [y[j], b, c[j], d];
        }
        Self { x, coeffs }
    }
    // Ascending scan, shared knots resolve to the left interval.
    #[inline]
    fn segment(&self, t: f64) -> Option<usize> {
        self.x.windows(2).position(|w| w[0] <= t && t <= w[1])
    }
    fn sample(&self, t: f64) -> Result<f64, SplineError> {
        let i = self
            .segment(t)
            .ok_or(SplineError::InternalInvariantViolation { target: t })?;
        let [a, b, c, d] = self.coeffs[i];
        let dx = t - self.x[i];
        Ok(a + dx * (b + dx * (c + dx * d)))
    }
}
fn validate(x_vals: &[f64], y_vals: &[f64], x_target: f64) -> Result<(), SplineError> {
    let n = x_vals.len();
    if n != y_vals.len() {
        return Err(SplineError::DimensionMismatch { x_len: n, y_len: y_vals.len() });
    }
    if n < 3 {
        return Err(SplineError::InsufficientPoints { found: n });
    }
    // Rejects NaN and infinite knots as well.
    if let Some(index) = x_vals
        .windows(2)
        .position(|w| !(w[0] < w[1] && w[0].is_finite() && w[1].is_finite()))
    {
        return Err(SplineError::UnsortedOrDuplicateAbscissas { index });
    }
    let (min, max) = (x_vals[0], x_vals[n - 1]);
    if !(min <= x_target && x_target <= max) {
        return Err(SplineError::OutOfBounds { target: x_target, min, max });
    }
    Ok(())
}
/// Evaluates the natural cubic spline through `(x_vals, y_vals)` at `x_target`.
/// Targets outside `[x_vals[0], x_vals[n-1]]` are refused rather than extrapolated.
pub fn interpolate(x_vals: &[f64], y_vals: &[f64], x_target: f64) -> Result<f64, SplineError> {
    validate(x_vals, y_vals, x_target)?;
    NaturalCubic::new(x_vals, y_vals).sample(x_target)
}
