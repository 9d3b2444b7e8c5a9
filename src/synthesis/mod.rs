// src/synthesis/mod.rs
//! Brain-wave signal synthesis

pub mod composer;
pub mod noise;
pub mod state;
pub mod wave;

pub use composer::StateSignalComposer;
pub use noise::GaussianNoise;
pub use state::PhysiologicalState;
pub use wave::{WaveGenerator, WaveSpec};
