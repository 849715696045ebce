//! Conical-nanochannel memristor ("Mysistor") device model.
//!
//! This crate provides:
//! - Physical configuration: [`PhysicalConstants`] at a fixed reference temperature
//! - Device inputs and geometry: [`DeviceParameters`]
//! - Closed-form electrokinetic coefficients: [`ConductanceModel`]
//! - The solver-facing element: [`Mysistor`]
//! - Conductance traces recovered from transient waveforms: [`trace`]

pub mod conductance;
pub mod constants;
pub mod error;
pub mod mysistor;
pub mod trace;

pub use conductance::Conductance;
pub use constants::PhysicalConstants;
pub use error::{Error, Result};
pub use mysistor::{Concentration, ConductanceModel, DeviceParameters, Mysistor};
