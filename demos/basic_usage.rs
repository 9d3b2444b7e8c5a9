// demos/basic_usage.rs
//! Basic usage example for the EEG core library

use eeg_core::io::{load_signal, save_signal};
use eeg_core::processing::relative_band_powers;
use eeg_core::{decompose, simulate, DecompositionConfig, PhysiologicalState, SimulationConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("EEG Core Basic Usage Example");
    println!("============================");

    let config = SimulationConfig {
        seed: Some(42),
        ..SimulationConfig::default()
    };

    println!("Configuration:");
    println!("  Sampling Rate: {} Hz", config.sampling_rate_hz);
    println!("  Duration: {} s", config.duration_secs);
    println!("  Noise Std Dev: {}", config.noise_std_dev);
    println!();

    println!("Synthesizing a wakeful-state signal...");
    let signal = simulate(PhysiologicalState::Wake, &config)?;
    println!("Generated {} samples", signal.len());

    let out_path = std::env::temp_dir().join("eeg_wake.csv");
    save_signal(&out_path, &signal, config.sampling_rate_hz)?;
    println!("Saved signal to {}", out_path.display());

    let reloaded = load_signal(&out_path)?;
    println!("Reloaded {} samples", reloaded.len());
    println!();

    println!("Decomposing into canonical bands...");
    let bands = decompose(&reloaded, &DecompositionConfig::default())?;
    for (band, component) in bands.iter() {
        println!(
            "  {:<6} {:>5.1}-{:>4.1} Hz: {} samples",
            band.label(),
            band.low_cut_hz(),
            band.high_cut_hz(),
            component.len()
        );
    }
    println!();

    println!("Relative band powers of the raw signal:");
    for (band, share) in relative_band_powers(&reloaded, config.sampling_rate_hz) {
        println!("  {:<6} {:>5.1}%", band.label(), share * 100.0);
    }

    println!();
    println!("Done");
    Ok(())
}
