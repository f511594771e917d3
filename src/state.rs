//! State-vector simulation.
//!
//! A bank of `n` oscillators maps onto an `n`-qubit register: starting
//! from the ground state, each oscillator in turn rotates every pair of
//! amplitudes whose basis indices differ only in that oscillator's bit.
//! Each rotation is orthogonal, so the total probability stays at 1.

use crate::oscillator::OscillatorSet;
use num_complex::Complex64;
use tracing::debug;

/// A register of `2^n` complex amplitudes. Index `i`'s binary digits
/// (`n` bits, bit 0 = oscillator 0) label the basis state.
#[derive(Debug, Clone, PartialEq)]
pub struct StateVector {
    amplitudes: Vec<Complex64>,
    qubits: usize,
}

impl StateVector {
    /// The ground state: amplitude 1 at index 0, zero everywhere else.
    pub fn ground(qubits: usize) -> Self {
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); 1 << qubits];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Self { amplitudes, qubits }
    }

    /// Run the rotation sequence for a bank of oscillators.
    ///
    /// Oscillator `q` rotates bit `q` by half its frequency, applied in
    /// increasing `q` order. The phase parameter never enters the
    /// rotation; it shapes the pattern curve only. Cannot fail on a
    /// valid set.
    pub fn simulate(oscillators: &OscillatorSet) -> Self {
        let mut state = Self::ground(oscillators.len());
        for (qubit, osc) in oscillators.iter().enumerate() {
            state.rotate(qubit, osc.frequency);
        }
        debug!(
            qubits = state.qubits,
            total_probability = state.total_probability(),
            "simulated state vector"
        );
        state
    }

    /// Apply one orthogonal rotation (by `frequency / 2`) to every
    /// amplitude pair differing in bit `qubit`.
    ///
    /// The new vector is materialized from the pre-step amplitudes and
    /// swapped in only after the full pass, so no pair ever mixes old
    /// and new values.
    fn rotate(&mut self, qubit: usize, frequency: f64) {
        let dim = self.amplitudes.len();
        let cos = (frequency / 2.0).cos();
        let sin = (frequency / 2.0).sin();

        let mut next = vec![Complex64::new(0.0, 0.0); dim];
        for i in 0..dim {
            if i & (1 << qubit) == 0 {
                let j = i | (1 << qubit);
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];

                next[i] = Complex64::new(cos * a.re - sin * b.re, cos * a.im - sin * b.im);
                next[j] = Complex64::new(sin * a.re + cos * b.re, sin * a.im + cos * b.im);
            }
        }

        self.amplitudes = next;
    }

    /// Read-only view of the amplitudes, basis order
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Register dimension, `2^n`
    pub fn len(&self) -> usize {
        self.amplitudes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.amplitudes.is_empty()
    }

    /// Number of qubits `n`
    pub fn qubits(&self) -> usize {
        self.qubits
    }

    /// `|amplitude|²` per basis index
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|a| a.norm_sqr()).collect()
    }

    /// Sum of all squared magnitudes; ≈ 1.0 after a simulation
    pub fn total_probability(&self) -> f64 {
        self.amplitudes.iter().map(|a| a.norm_sqr()).sum()
    }

    /// The `n`-bit binary label of a basis index, e.g. `"101"`
    pub fn basis_label(&self, index: usize) -> String {
        format!("{:0width$b}", index, width = self.qubits)
    }
}
