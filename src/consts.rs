pub const CONFIG_FILE: &str = "splineconfig.ini";
pub const BANNER: &str = "Cubic Spline Interpolation";
use crate::utils::parser::parse_values;
use ini::Ini;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::path::Path;
use tracing::warn;
#[derive(Debug, Clone, PartialEq)]
pub struct SplineConfig {
    pub x_vals: Vec<f64>,
    pub y_vals: Vec<f64>,
    pub precision: usize,
    pub port: u16,
    pub max_workers: usize,
}
pub static SPLINE_CONFIG: Lazy<SplineConfig> = Lazy::new(|| load_spline_config(CONFIG_FILE));
pub fn load_spline_config<P: AsRef<Path>>(path: P) -> SplineConfig {
    let ini = match Ini::load_from_file(path.as_ref()) {
        Ok(ini) => ini,
        Err(_) => return SplineConfig::default(),
    };
    let default_section: HashMap<String, String> = ini
        .section(None::<String>)
        .map(|props| props.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect())
        .unwrap_or_default();
    let defaults = SplineConfig::default();
    let values = |key: &str, fallback: Vec<f64>| match default_section.get(key) {
        None => fallback,
        Some(raw) => parse_values(raw).unwrap_or_else(|e| {
            warn!("Ignoring '{}' in {}: {}", key, path.as_ref().display(), e);
            fallback
        }),
    };
    SplineConfig {
        x_vals: values("x_vals", defaults.x_vals),
        y_vals: values("y_vals", defaults.y_vals),
        precision: default_section
            .get("precision")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.precision),
        port: default_section
            .get("port")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.port),
        max_workers: default_section
            .get("max_workers")
            .and_then(|s| s.parse().ok())
            .filter(|&n: &usize| n > 0)
            .unwrap_or(defaults.max_workers),
    }
}
impl Default for SplineConfig {
    fn default() -> Self {
        Self {
            x_vals: vec![1., 2., 3., 4.],
            y_vals: vec![1., 4., 9., 16.],
            precision: 6,
            port: 8572,
            max_workers: 2,
        }
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    fn write_temp_ini(name: &str, body: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("spline_interp_{}_{}.ini", name, std::process::id()));
        fs::write(&path, body).unwrap();
        path
    }
    #[test]
    fn test_default_config() {
        let default = SplineConfig::default();
        assert_eq!(default.x_vals, vec![1., 2., 3., 4.]);
        assert_eq!(default.y_vals, vec![1., 4., 9., 16.]);
        assert_eq!(default.precision, 6);
        assert_eq!(default.port, 8572);
        assert_eq!(default.max_workers, 2);
    }
    #[test]
    fn test_missing_file_gives_default() {
        let cfg = load_spline_config("definitely/not/here/splineconfig.ini");
        assert_eq!(cfg, SplineConfig::default());
    }
    #[test]
    fn test_real_ini_load() {
        let path = write_temp_ini(
            "full",
            "x_vals = 0, 0.5, 1.5\ny_vals = 2, -1, 3\nprecision = 3\nport = 9000\nmax_workers = 4\n",
        );
        let cfg = load_spline_config(&path);
        fs::remove_file(&path).unwrap();
        assert_eq!(cfg.x_vals, vec![0.0, 0.5, 1.5]);
        assert_eq!(cfg.y_vals, vec![2.0, -1.0, 3.0]);
        assert_eq!(cfg.precision, 3);
        assert_eq!(cfg.port, 9000);
        assert_eq!(cfg.max_workers, 4);
    }
    #[test]
    fn test_parse_fault_tolerance() {
        let path = write_temp_ini(
            "faulty",
            "x_vals = none\nprecision = many\nport = 70000\nmax_workers = 0\n",
        );
        let cfg = load_spline_config(&path);
        fs::remove_file(&path).unwrap();
        assert_eq!(cfg, SplineConfig::default());
    }
    #[test]
    fn test_malformed_list_falls_back() {
        let path = write_temp_ini("malformed", "x_vals = 1, 2, three, 4\ny_vals = 0, 1, 4, 9\n");
        let cfg = load_spline_config(&path);
        fs::remove_file(&path).unwrap();
        assert_eq!(cfg.x_vals, SplineConfig::default().x_vals);
        assert_eq!(cfg.y_vals, vec![0., 1., 4., 9.]);
    }
    #[test]
    fn test_sample_set_is_not_validated_here() {
        let path = write_temp_ini("unsorted", "x_vals = 3, 1, 2\ny_vals = 1, 2\n");
        let cfg = load_spline_config(&path);
        fs::remove_file(&path).unwrap();
        assert_eq!(cfg.x_vals, vec![3., 1., 2.]);
        assert_eq!(cfg.y_vals, vec![1., 2.]);
    }
    #[test]
    fn test_global_config_init() {
        let cfg = &SPLINE_CONFIG;
        assert!(!cfg.x_vals.is_empty());
        assert!(!cfg.y_vals.is_empty());
        assert!(cfg.max_workers >= 1);
    }
}
