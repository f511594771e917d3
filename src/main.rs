use clap::{Parser, Subcommand};
use serde_json::json;

use quantum_harmonograph::constants::MAX_QUBITS;
use quantum_harmonograph::{ColorSample, HarmonographConfig, OscillatorSet, Pattern, StateVector};

// --- CLI Arguments ---
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Path to a TOML file with oscillator defaults
    #[arg(short, long, default_value = "harmonograph.toml", global = true)]
    config: String,

    /// Oscillator frequency (repeat once per oscillator; overrides the config file)
    #[arg(short, long = "frequency", global = true)]
    frequencies: Vec<f64>,

    /// Oscillator phase (repeat once per oscillator; defaults to zero each)
    #[arg(short, long = "phase", global = true)]
    phases: Vec<f64>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Sample the 3D pattern curve and print it as JSON
    Pattern {
        /// Number of samples around the closed curve
        #[arg(short, long)]
        steps: Option<usize>,
    },
    /// Simulate the state vector; print amplitudes, probabilities and colors
    Simulate,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Log to stderr so stdout stays clean for JSON output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let config = HarmonographConfig::load(&args.config)?;
    let oscillators = resolve_oscillators(&args, &config)?;

    match args.command {
        Commands::Pattern { steps } => {
            let steps = steps.unwrap_or(config.sample_steps);
            let pattern = Pattern::sample(&oscillators, steps)?;

            // Color the curve from the state vector, one color per amplitude
            let state = StateVector::simulate(&oscillators);
            let colors: Vec<String> = ColorSample::map_all(state.amplitudes())
                .iter()
                .map(|c| c.to_hex())
                .collect();

            let output = json!({
                "steps": pattern.len(),
                "pattern": pattern,
                "colors": colors,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Commands::Simulate => {
            let state = StateVector::simulate(&oscillators);
            let colors = ColorSample::map_all(state.amplitudes());

            let states: Vec<_> = state
                .amplitudes()
                .iter()
                .enumerate()
                .map(|(i, amp)| {
                    json!({
                        "basis": state.basis_label(i),
                        "re": amp.re,
                        "im": amp.im,
                        "probability": amp.norm_sqr(),
                        "color": colors[i].to_hex(),
                    })
                })
                .collect();

            let output = json!({
                "qubits": state.qubits(),
                "total_probability": state.total_probability(),
                "states": states,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

/// Oscillator parameters from the command line, falling back to the
/// config file when no --frequency was given.
fn resolve_oscillators(args: &Args, config: &HarmonographConfig) -> anyhow::Result<OscillatorSet> {
    let (qubits, frequencies, phases) = if args.frequencies.is_empty() {
        (
            config.qubits,
            config.frequencies.clone(),
            config.phases.clone(),
        )
    } else {
        let phases = if args.phases.is_empty() {
            vec![0.0; args.frequencies.len()]
        } else {
            args.phases.clone()
        };
        (args.frequencies.len(), args.frequencies.clone(), phases)
    };

    if qubits > MAX_QUBITS {
        anyhow::bail!(
            "{} oscillators would need a 2^{} state vector; the ceiling is {}",
            qubits,
            qubits,
            MAX_QUBITS
        );
    }

    OscillatorSet::new(qubits, &frequencies, &phases)
}
