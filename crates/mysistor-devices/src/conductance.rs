//! Resistance/conductance pair.

/// The present conductance of a two-terminal device, held together with
/// its reciprocal resistance.
///
/// Both representations are always updated together, so `g * r == 1`
/// holds for every value a caller can observe. Construction and updates
/// reject zero, negative and non-finite inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conductance {
    siemens: f64,
    ohms: f64,
}

impl Conductance {
    /// Create from a resistance in ohms.
    pub fn from_resistance(ohms: f64) -> Option<Self> {
        is_positive(ohms).then(|| Self {
            siemens: 1.0 / ohms,
            ohms,
        })
    }

    /// Create from a conductance in siemens.
    pub fn from_conductance(siemens: f64) -> Option<Self> {
        is_positive(siemens).then(|| Self {
            siemens,
            ohms: 1.0 / siemens,
        })
    }

    /// Conductance in siemens.
    pub fn siemens(&self) -> f64 {
        self.siemens
    }

    /// Resistance in ohms.
    pub fn ohms(&self) -> f64 {
        self.ohms
    }
}

/// Positive, finite and with a finite reciprocal.
fn is_positive(x: f64) -> bool {
    x.is_finite() && x > 0.0 && (1.0 / x).is_finite()
}
