//! Electrokinetic coefficients derived from the Mysistor inputs.
//!
//! These values are computed once when the device is created. The equations
//! describe ion transport through a conical nanochannel with a charged wall:
//!
//! ```text
//! w      = e·D·η / (kBT·ε·φ0)              electrokinetic ratio
//! Du     = σ / (2·ρ·r_tip)                 Dukhin number at the tip
//! g0     = π·r_tip·r_base/L · 2·ρ·e²·D/kBT  ohmic conductance
//! Δg     = -2·w·Δr·Du / r_base             voltage sensitivity
//! Δρ/φ   = 2·Δr·σ·e / (kBT·r_tip²)         charge-density shift per volt
//! Q/φ    = -π·r_base·r_tip·ε·φ0 / (η·L)    electro-osmotic flow per volt
//! Q_p    = π·(r_base·r_tip)³ / (8·L·η·r̄²)  pressure-driven flow per pascal
//! Pe/Q   = L / (D·π·r_tip²)                Péclet number per unit flow
//! ```

use super::params::DeviceParameters;
use crate::constants::PhysicalConstants;

/// Conversion of `g0` from SI siemens to the solver's working units.
pub const G0_SCALE: f64 = 1e12;

/// Coefficients of the conductance model.
#[derive(Debug, Clone, PartialEq)]
pub struct ConductanceModel {
    /// Electrokinetic ratio w (dimensionless).
    pub electrokinetic_ratio: f64,
    /// Dukhin number at the tip (dimensionless).
    pub dukhin: f64,
    /// Zero-bias ohmic conductance, scaled by [`G0_SCALE`].
    pub g0: f64,
    /// First-order voltage sensitivity of the conductance.
    pub delta_g: f64,
    /// Charge-density perturbation per volt (m⁻³/V).
    pub delta_rho_over_potential: f64,
    /// Volumetric flow per volt (m³/(s·V)).
    pub q_over_potential: f64,
    /// Volumetric flow per pascal (m³/(s·Pa)).
    pub q_pressure: f64,
    /// Péclet number per unit volumetric flow (s/m³).
    pub peclet_over_q: f64,
}

impl ConductanceModel {
    /// Derive the coefficients from validated inputs.
    pub fn new(params: &DeviceParameters, c: &PhysicalConstants) -> Self {
        let rt = params.tip_radius();
        let rb = params.base_radius();
        let dr = params.delta_radius();
        let r_avg = params.average_radius();
        let length = params.channel_length;
        let rho = params.bulk_density.number_density(c);

        let kbt = c.thermal_energy();
        let e = c.elementary_charge;
        let d = c.diffusion_coefficient;
        let eta = c.viscosity;
        let eps = c.permittivity;
        let sigma = c.surface_charge;
        let phi0 = c.reference_potential;

        let w = (e * d * eta) / (kbt * eps * phi0);
        let du = sigma / (2.0 * rho * rt);

        let geometric = std::f64::consts::PI * rt * rb / length;
        let bulk = 2.0 * rho * e * e * d / kbt;
        let g0 = geometric * bulk * G0_SCALE;

        let delta_g = -2.0 * w * dr * du / rb;

        let delta_rho_over_potential = 2.0 * dr * sigma * e / (kbt * rt * rt);
        let q_over_potential = -std::f64::consts::PI * rb * rt * eps * phi0 / (eta * length);
        let q_pressure = std::f64::consts::PI * (rb * rt).powi(3) / (8.0 * length * eta * r_avg);
        let peclet_over_q = length / (d * std::f64::consts::PI * rt * rt);

        log::debug!(
            "mysistor model: g0={:.6e} delta_g={:.6e} w={:.4e} Du={:.4e} Pe/Q={:.4e}",
            g0,
            delta_g,
            w,
            du,
            peclet_over_q
        );

        Self {
            electrokinetic_ratio: w,
            dukhin: du,
            g0,
            delta_g,
            delta_rho_over_potential,
            q_over_potential,
            q_pressure,
            peclet_over_q,
        }
    }

    /// Volumetric flow rate (m³/s) driven by a voltage and a pressure.
    pub fn flow_rate(&self, voltage: f64, pressure: f64) -> f64 {
        self.q_over_potential * voltage + self.q_pressure * pressure
    }

    /// Péclet number of the flow driven by a voltage and a pressure.
    pub fn peclet_number(&self, voltage: f64, pressure: f64) -> f64 {
        self.peclet_over_q * self.flow_rate(voltage, pressure)
    }

    /// Charge-density perturbation (m⁻³) at a given voltage.
    pub fn charge_density_shift(&self, voltage: f64) -> f64 {
        self.delta_rho_over_potential * voltage
    }

    /// First-order conductance at a given voltage, `g0 + Δg·V`.
    pub fn linearized_conductance(&self, voltage: f64) -> f64 {
        self.g0 + self.delta_g * voltage
    }
}
