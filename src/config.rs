use crate::constants::{DEFAULT_QUBITS, DEFAULT_SAMPLE_STEPS};
use crate::oscillator::OscillatorSet;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarmonographConfig {
    pub qubits: usize,         // e.g., 4
    pub frequencies: Vec<f64>, // one per qubit
    pub phases: Vec<f64>,      // one per qubit
    pub sample_steps: usize,   // e.g., 2000
}

impl Default for HarmonographConfig {
    fn default() -> Self {
        Self {
            qubits: DEFAULT_QUBITS,
            frequencies: vec![1.0, 2.0, 3.0, 4.0],
            phases: vec![0.0, PI / 4.0, PI / 2.0, 3.0 * PI / 4.0],
            sample_steps: DEFAULT_SAMPLE_STEPS,
        }
    }
}

impl HarmonographConfig {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        if !path.as_ref().exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Build the oscillator set described by this config
    pub fn oscillators(&self) -> anyhow::Result<OscillatorSet> {
        OscillatorSet::new(self.qubits, &self.frequencies, &self.phases)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HarmonographConfig::default();
        assert_eq!(config.qubits, 4);
        assert_eq!(config.frequencies, vec![1.0, 2.0, 3.0, 4.0]);
        assert!((config.phases[1] - PI / 4.0).abs() < 1e-12);
        assert_eq!(config.sample_steps, 2000);
        assert!(config.oscillators().is_ok());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = HarmonographConfig::load("no_such_harmonograph.toml").unwrap();
        assert_eq!(config.qubits, HarmonographConfig::default().qubits);
    }

    #[test]
    fn test_parses_toml() {
        let config: HarmonographConfig = toml::from_str(
            r#"
            qubits = 2
            frequencies = [0.5, 1.5]
            phases = [0.0, 3.14]
            sample_steps = 100
            "#,
        )
        .unwrap();

        assert_eq!(config.qubits, 2);
        assert_eq!(config.sample_steps, 100);
        assert_eq!(config.oscillators().unwrap().len(), 2);
    }

    #[test]
    fn test_inconsistent_config_fails_at_oscillator_build() {
        let config = HarmonographConfig {
            qubits: 3,
            frequencies: vec![1.0, 2.0],
            phases: vec![0.0, 0.0],
            sample_steps: 10,
        };
        assert!(config.oscillators().is_err());
    }
}
