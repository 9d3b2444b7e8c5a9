// demos/state_sweep.rs
//! Synthesizes every physiological state and reports which EEG band
//! dominates each one.

use eeg_core::processing::relative_band_powers;
use eeg_core::{simulate, PhysiologicalState, SimulationConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("EEG Core State Sweep");
    println!("====================");

    let config = SimulationConfig {
        duration_secs: 20.0,
        seed: Some(7),
        ..SimulationConfig::default()
    };

    for state in PhysiologicalState::ALL {
        let signal = simulate(state, &config)?;
        let powers = relative_band_powers(&signal, config.sampling_rate_hz);

        println!();
        println!("{}", state.label());
        for &(frequency_hz, amplitude) in state.recipe() {
            println!("  component: {} Hz x {}", frequency_hz, amplitude);
        }
        for (band, share) in powers {
            let bar = "#".repeat((share * 40.0).round() as usize);
            println!("  {:<6} {:>5.1}% {}", band.label(), share * 100.0, bar);
        }
    }

    println!();
    println!("Done");
    Ok(())
}
