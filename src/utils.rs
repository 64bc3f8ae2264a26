pub mod interp;
pub mod parser;
use crate::utils::interp::SplineError;
pub fn render_estimate(target: f64, outcome: &Result<f64, SplineError>, precision: usize) -> String {
    match outcome {
        Ok(value) => format!("Estimated value at x = {}: {:.*}", target, precision, value),
        Err(e) if e.is_input_error() => format!("Invalid input: {}", e),
        Err(e) => format!("Internal error: {}", e),
    }
}
