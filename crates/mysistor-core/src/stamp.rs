//! MNA stamping trait.

use crate::element::Element;
use crate::mna::MnaSystem;

/// Trait for devices that can stamp into an MNA matrix.
pub trait Stamper: Element + Send + Sync {
    /// Stamp this device's present conductance into the MNA system.
    fn stamp(&self, mna: &mut MnaSystem);
}
