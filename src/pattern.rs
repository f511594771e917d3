//! Pattern sampling: the closed 3D curve traced by a bank of oscillators.
//!
//! Each sample is the superposition of every oscillator's sinusoidal
//! contribution. Coordinates are left unnormalized, so their magnitude
//! grows with the oscillator count and the frequency values.

use crate::oscillator::OscillatorSet;
use anyhow::{bail, Result};
use nalgebra::Point3;
use serde::Serialize;
use std::f64::consts::PI;
use tracing::debug;

/// A sampled harmonograph curve: three parallel coordinate sequences,
/// one entry per time step. Immutable once sampled.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pattern {
    x: Vec<f64>,
    y: Vec<f64>,
    z: Vec<f64>,
}

impl Pattern {
    /// Sample the curve over one full period.
    ///
    /// The interval `[0, 2π)` is split into `steps` equal sub-intervals
    /// and every oscillator contributes
    /// `(sin(f·t + φ), cos(f·t + φ), sin(f·t + φ)·cos(f·t))`
    /// at each step. Deterministic: identical inputs give identical
    /// output. `steps` must be at least one.
    pub fn sample(oscillators: &OscillatorSet, steps: usize) -> Result<Self> {
        if steps == 0 {
            bail!("sample resolution must be at least one step");
        }

        let mut x = Vec::with_capacity(steps);
        let mut y = Vec::with_capacity(steps);
        let mut z = Vec::with_capacity(steps);

        for t in 0..steps {
            let time = t as f64 * (2.0 * PI) / steps as f64;
            let mut sx = 0.0;
            let mut sy = 0.0;
            let mut sz = 0.0;

            for osc in oscillators.iter() {
                let angle = osc.frequency * time + osc.phase;
                sx += angle.sin();
                sy += angle.cos();
                sz += angle.sin() * (osc.frequency * time).cos();
            }

            x.push(sx);
            y.push(sy);
            z.push(sz);
        }

        debug!(steps, oscillators = oscillators.len(), "sampled pattern");
        Ok(Self { x, y, z })
    }

    /// Number of sampled time steps
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn z(&self) -> &[f64] {
        &self.z
    }

    /// View the curve as 3D points, in sample order
    pub fn points(&self) -> impl Iterator<Item = Point3<f64>> + '_ {
        (0..self.len()).map(|i| Point3::new(self.x[i], self.y[i], self.z[i]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bank(frequencies: &[f64], phases: &[f64]) -> OscillatorSet {
        OscillatorSet::new(frequencies.len(), frequencies, phases).unwrap()
    }

    #[test]
    fn test_sequences_have_requested_length() {
        let set = bank(&[1.0, 2.0], &[0.0, 0.4]);
        let pattern = Pattern::sample(&set, 128).unwrap();
        assert_eq!(pattern.len(), 128);
        assert_eq!(pattern.x().len(), 128);
        assert_eq!(pattern.y().len(), 128);
        assert_eq!(pattern.z().len(), 128);
    }

    #[test]
    fn test_sampling_is_deterministic() {
        let set = bank(&[1.5, 2.5, 0.3], &[0.1, 0.2, 0.3]);
        let first = Pattern::sample(&set, 500).unwrap();
        let second = Pattern::sample(&set, 500).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_steps_rejected() {
        let set = bank(&[1.0], &[0.0]);
        assert!(Pattern::sample(&set, 0).is_err());
    }

    #[test]
    fn test_single_oscillator_four_steps() {
        // f = 1, φ = 0, steps = 4 → time hits 0, π/2, π, 3π/2
        let set = bank(&[1.0], &[0.0]);
        let pattern = Pattern::sample(&set, 4).unwrap();

        for t in 0..4 {
            let time = t as f64 * (2.0 * PI) / 4.0;
            let expected_x = time.sin();
            let expected_y = time.cos();
            let expected_z = time.sin() * time.cos();
            assert!((pattern.x()[t] - expected_x).abs() < 1e-12, "x at step {}", t);
            assert!((pattern.y()[t] - expected_y).abs() < 1e-12, "y at step {}", t);
            assert!((pattern.z()[t] - expected_z).abs() < 1e-12, "z at step {}", t);
        }
    }

    #[test]
    fn test_contributions_accumulate_without_normalization() {
        let single = bank(&[2.0], &[0.5]);
        let double = bank(&[2.0, 2.0], &[0.5, 0.5]);

        let one = Pattern::sample(&single, 16).unwrap();
        let two = Pattern::sample(&double, 16).unwrap();

        for t in 0..16 {
            assert!((two.x()[t] - 2.0 * one.x()[t]).abs() < 1e-12);
            assert!((two.y()[t] - 2.0 * one.y()[t]).abs() < 1e-12);
            assert!((two.z()[t] - 2.0 * one.z()[t]).abs() < 1e-12);
        }
    }

    #[test]
    fn test_points_view_matches_sequences() {
        let set = bank(&[1.0, 3.0], &[0.0, 1.0]);
        let pattern = Pattern::sample(&set, 32).unwrap();

        let points: Vec<_> = pattern.points().collect();
        assert_eq!(points.len(), pattern.len());
        assert_eq!(points[7].x, pattern.x()[7]);
        assert_eq!(points[7].y, pattern.y()[7]);
        assert_eq!(points[7].z, pattern.z()[7]);
    }
}
