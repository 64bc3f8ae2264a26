use anyhow::{anyhow, Context, Result};
use regex::Regex;
pub fn parse_values(s: &str) -> Result<Vec<f64>> {
    let separators = Regex::new(r"[\s,;\[\]]+")?;
    let values = separators
        .split(s)
        .filter(|token| !token.is_empty())
        .map(|token| token.parse::<f64>().with_context(|| format!("Invalid number '{}'", token)))
        .collect::<Result<Vec<_>>>()?;
    if values.is_empty() {
        return Err(anyhow!("No numbers found in '{}'", s));
    }
    Ok(values)
}
#[inline(always)]
pub fn target_parser(arg: &str) -> Result<f64> {
    let trimmed = arg.trim();
    let target: f64 = trimmed
        .parse()
        .with_context(|| format!("Invalid x value '{}'", trimmed))?;
    Ok(target)
}
