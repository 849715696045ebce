//! Physical constants used by the conductance model.
//!
//! All literals are held at a single reference temperature (20 °C) so that
//! every derived coefficient is reproducible. Override individual fields with
//! struct-update syntax to explore other electrolytes:
//!
//! ```
//! use mysistor_devices::PhysicalConstants;
//!
//! let warm = PhysicalConstants {
//!     temperature: 300.0,
//!     ..Default::default()
//! };
//! assert!(warm.thermal_energy() > PhysicalConstants::default().thermal_energy());
//! ```

/// Fixed physical constants of the electrolyte and channel wall.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PhysicalConstants {
    /// Elementary charge (C).
    pub elementary_charge: f64,
    /// Boltzmann constant (J/K).
    pub boltzmann: f64,
    /// Reference temperature (K).
    pub temperature: f64,
    /// Solvent viscosity (Pa·s).
    pub viscosity: f64,
    /// Solvent permittivity (F/m).
    pub permittivity: f64,
    /// Wall surface charge density, as a number density (m⁻²).
    pub surface_charge: f64,
    /// Reference (zeta) potential of the wall (V).
    pub reference_potential: f64,
    /// Ion diffusion coefficient (m²/s).
    pub diffusion_coefficient: f64,
    /// Avogadro constant (mol⁻¹).
    pub avogadro: f64,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self {
            elementary_charge: 1.602e-19,
            boltzmann: 1.38e-23,
            temperature: 293.15,
            viscosity: 1.01e-3,
            permittivity: 0.71e-9,
            surface_charge: -0.0015e18,
            reference_potential: -10e-3,
            diffusion_coefficient: 1.75e-9,
            avogadro: 6.022e23,
        }
    }
}

impl PhysicalConstants {
    /// Thermal energy kB·T (J).
    pub fn thermal_energy(&self) -> f64 {
        self.boltzmann * self.temperature
    }

    /// Thermal voltage kB·T/e (V).
    pub fn thermal_voltage(&self) -> f64 {
        self.thermal_energy() / self.elementary_charge
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_reference_temperature() {
        let c = PhysicalConstants::default();
        assert_eq!(c.temperature, 293.15);
        assert!((c.thermal_energy() - 4.04547e-21).abs() < 1e-26);
    }

    #[test]
    fn test_thermal_voltage() {
        let vt = PhysicalConstants::default().thermal_voltage();
        // At 20 °C, Vt ≈ 25.25 mV
        assert!((vt - 0.02525).abs() < 1e-4, "Vt = {}", vt);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_partial_override_from_json() {
        let c: PhysicalConstants = serde_json::from_str(r#"{"temperature": 300.0}"#).unwrap();
        assert_eq!(c.temperature, 300.0);
        assert_eq!(c.viscosity, PhysicalConstants::default().viscosity);
    }
}
