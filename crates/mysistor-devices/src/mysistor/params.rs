//! Mysistor physical inputs and channel geometry.

use crate::constants::PhysicalConstants;
use crate::error::{Error, Result};

/// Tip radius of the conical channel (m). Fixed for every device.
pub const TIP_RADIUS: f64 = 50e-9;

/// Bulk carrier density of the electrolyte.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Concentration {
    /// Molar concentration in mol/m³ (numerically equal to mM).
    Molar(f64),
    /// Carrier number density in m⁻³.
    NumberDensity(f64),
}

impl Concentration {
    /// Carrier number density in m⁻³.
    pub fn number_density(&self, constants: &PhysicalConstants) -> f64 {
        match *self {
            Concentration::Molar(c) => c * constants.avogadro,
            Concentration::NumberDensity(n) => n,
        }
    }

    fn raw(&self) -> f64 {
        match *self {
            Concentration::Molar(v) | Concentration::NumberDensity(v) => v,
        }
    }
}

impl Default for Concentration {
    fn default() -> Self {
        Concentration::Molar(0.1)
    }
}

/// Physical inputs of a Mysistor.
///
/// Geometry is a truncated cone: the tip radius is fixed at
/// [`TIP_RADIUS`] and the base radius is `radius_ratio` times larger.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DeviceParameters {
    /// Bulk carrier density. Default: 0.1 mol/m³.
    pub bulk_density: Concentration,
    /// Channel length (m). Default: 10 µm.
    pub channel_length: f64,
    /// Base-to-tip radius ratio (rbrt). Default: 4.
    pub radius_ratio: f64,
    /// Conductance relaxation time (s). Default: 4.8 ms.
    ///
    /// Consumed by whatever steps the conductance in time; the device
    /// itself never integrates it.
    pub relaxation_time: f64,
    /// Driving pressure across the channel (Pa). Default: 0.
    pub pressure: f64,
}

impl Default for DeviceParameters {
    fn default() -> Self {
        Self {
            bulk_density: Concentration::default(),
            channel_length: 10e-6,
            radius_ratio: 4.0,
            relaxation_time: 0.0048,
            pressure: 0.0,
        }
    }
}

impl DeviceParameters {
    /// Check the physical constraints on the inputs.
    ///
    /// A ratio of exactly 1 is a cylinder: valid, with no geometric
    /// asymmetry and therefore no voltage sensitivity.
    pub fn validate(&self) -> Result<()> {
        if !(self.channel_length.is_finite() && self.channel_length > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "channel length must be positive, got {}",
                self.channel_length
            )));
        }
        if !(self.radius_ratio.is_finite() && self.radius_ratio >= 1.0) {
            return Err(Error::InvalidParameter(format!(
                "radius ratio must be at least 1, got {}",
                self.radius_ratio
            )));
        }
        let density = self.bulk_density.raw();
        if !(density.is_finite() && density > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "bulk density must be positive, got {}",
                density
            )));
        }
        if !(self.relaxation_time.is_finite() && self.relaxation_time > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "relaxation time must be positive, got {}",
                self.relaxation_time
            )));
        }
        if !self.pressure.is_finite() {
            return Err(Error::InvalidParameter(format!(
                "pressure must be finite, got {}",
                self.pressure
            )));
        }
        Ok(())
    }

    /// Tip radius (m).
    pub fn tip_radius(&self) -> f64 {
        TIP_RADIUS
    }

    /// Base radius (m).
    pub fn base_radius(&self) -> f64 {
        self.radius_ratio * TIP_RADIUS
    }

    /// Base minus tip radius (m).
    pub fn delta_radius(&self) -> f64 {
        self.base_radius() - TIP_RADIUS
    }

    /// Mean squared radius of the cone, (rb² + rt² + rb·rt)/3 (m²).
    pub fn average_radius(&self) -> f64 {
        let rb = self.base_radius();
        let rt = TIP_RADIUS;
        (rb * rb + rt * rt + rb * rt) / 3.0
    }
}
