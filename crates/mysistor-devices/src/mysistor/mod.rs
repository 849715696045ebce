//! Mysistor: a conical-nanochannel memristor.
//!
//! The device is stamped as a plain conductance between its two terminals.
//! Its present conductance is not a function of the instantaneous voltage;
//! it drifts with time constant `relaxation_time` and is written back by an
//! external time-stepping update between solver steps. The electrokinetic
//! coefficients that drive that update are derived once at construction
//! and exposed through [`Mysistor::model`].
//!
//! ```text
//!             /\    /\    /\
//!     n1 o---+  \  /  \  /  \  +---o n2
//!                \/    \/    \/
//! ```
//!
//! # Usage
//!
//! ```
//! use mysistor_core::NodeId;
//! use mysistor_devices::{DeviceParameters, Mysistor};
//!
//! let params = DeviceParameters { radius_ratio: 6.0, ..Default::default() };
//! let mut m = Mysistor::with_params("M1", NodeId::new(1), NodeId::GROUND, 1000.0, params).unwrap();
//! m.set_conductance(0.002).unwrap();
//! assert!((m.resistance() - 500.0).abs() < 1e-9);
//! ```

pub mod derived;
pub mod params;

pub use derived::{ConductanceModel, G0_SCALE};
pub use params::{Concentration, DeviceParameters, TIP_RADIUS};

use mysistor_core::mna::MnaSystem;
use mysistor_core::{Element, NodeId, OpInfo, Stamper};

use crate::conductance::Conductance;
use crate::constants::PhysicalConstants;
use crate::error::{Error, Result};

/// Operating-point report labels, in report order.
pub const OP_LABELS: [&str; 5] = [
    "Part ID",
    "R [Ω]",
    "V(n1,n2) [V]",
    "I(n1->n2) [A]",
    "P [W]",
];

/// A Mysistor element.
#[derive(Debug, Clone)]
pub struct Mysistor {
    /// Device name (e.g., "M1"). The first letter identifies the kind.
    pub name: String,
    /// Anode node (n1).
    pub node_pos: NodeId,
    /// Cathode node (n2).
    pub node_neg: NodeId,
    state: Conductance,
    params: DeviceParameters,
    constants: PhysicalConstants,
    model: ConductanceModel,
}

impl Mysistor {
    /// Create a Mysistor with default physical parameters.
    pub fn new(
        name: impl Into<String>,
        node_pos: NodeId,
        node_neg: NodeId,
        resistance: f64,
    ) -> Result<Self> {
        Self::with_params(name, node_pos, node_neg, resistance, DeviceParameters::default())
    }

    /// Create a Mysistor with the given physical parameters.
    pub fn with_params(
        name: impl Into<String>,
        node_pos: NodeId,
        node_neg: NodeId,
        resistance: f64,
        params: DeviceParameters,
    ) -> Result<Self> {
        Self::with_constants(
            name,
            node_pos,
            node_neg,
            resistance,
            params,
            PhysicalConstants::default(),
        )
    }

    /// Create a Mysistor with explicit physical constants.
    pub fn with_constants(
        name: impl Into<String>,
        node_pos: NodeId,
        node_neg: NodeId,
        resistance: f64,
        params: DeviceParameters,
        constants: PhysicalConstants,
    ) -> Result<Self> {
        let name = name.into();
        params.validate()?;
        let state = Conductance::from_resistance(resistance).ok_or_else(|| Error::InvalidValue {
            name: name.clone(),
            value: resistance,
        })?;
        let model = ConductanceModel::new(&params, &constants);

        Ok(Self {
            name,
            node_pos,
            node_neg,
            state,
            params,
            constants,
            model,
        })
    }

    /// Present conductance (S).
    pub fn conductance(&self) -> f64 {
        self.state.siemens()
    }

    /// Present resistance (Ω).
    pub fn resistance(&self) -> f64 {
        self.state.ohms()
    }

    /// Set the present conductance. The resistance follows.
    ///
    /// Rejects zero, negative and non-finite values and leaves the previous
    /// state untouched.
    pub fn set_conductance(&mut self, g: f64) -> Result<()> {
        self.state = Conductance::from_conductance(g).ok_or_else(|| Error::InvalidValue {
            name: self.name.clone(),
            value: g,
        })?;
        log::trace!("{}: g = {:e} S", self.name, g);
        Ok(())
    }

    /// Set the present resistance. The conductance follows.
    pub fn set_resistance(&mut self, r: f64) -> Result<()> {
        self.state = Conductance::from_resistance(r).ok_or_else(|| Error::InvalidValue {
            name: self.name.clone(),
            value: r,
        })?;
        log::trace!("{}: R = {:e} Ω", self.name, r);
        Ok(())
    }

    /// Replace the terminal nodes. Nothing else changes.
    pub fn reassign_nodes(&mut self, node_pos: NodeId, node_neg: NodeId) {
        self.node_pos = node_pos;
        self.node_neg = node_neg;
    }

    /// Terminal current contributed by the device itself: always zero.
    ///
    /// The solver stamps the device as a conductance and computes the
    /// branch current as `v * conductance()`; this hook only exists for the
    /// generic nonlinear-element interface.
    pub fn terminal_current(&self, _voltage: f64, _time: f64) -> f64 {
        0.0
    }

    /// Operating-point report.
    ///
    /// `port_voltages` is `[[v]]` where `v` is the voltage across n1-n2.
    /// Returns part ID (upper-cased), resistance, voltage, current and
    /// power in the order of [`OP_LABELS`].
    pub fn op_info<P: AsRef<[f64]>>(&self, port_voltages: &[P]) -> Result<OpInfo> {
        let v = port_voltages
            .first()
            .and_then(|port| port.as_ref().first().copied())
            .ok_or_else(|| {
                Error::InvalidParameter(format!("{}: missing port voltage", self.name))
            })?;

        let r = self.resistance();
        if r == 0.0 {
            return Err(Error::ZeroResistance {
                name: self.name.clone(),
            });
        }

        Ok(OpInfo::new()
            .with(OP_LABELS[0], self.name.to_uppercase())
            .with(OP_LABELS[1], r)
            .with(OP_LABELS[2], v)
            .with(OP_LABELS[3], v / r)
            .with(OP_LABELS[4], v * v / r))
    }

    /// Physical inputs of this device.
    pub fn params(&self) -> &DeviceParameters {
        &self.params
    }

    /// Physical constants used for the derivation.
    pub fn constants(&self) -> &PhysicalConstants {
        &self.constants
    }

    /// Derived electrokinetic coefficients.
    pub fn model(&self) -> &ConductanceModel {
        &self.model
    }

    /// Volumetric flow rate (m³/s) at `voltage`, driven together with the
    /// device's configured pressure.
    pub fn flow_rate(&self, voltage: f64) -> f64 {
        self.model.flow_rate(voltage, self.params.pressure)
    }

    /// Péclet number at `voltage` and the configured pressure.
    pub fn peclet_number(&self, voltage: f64) -> f64 {
        self.model.peclet_number(voltage, self.params.pressure)
    }

    /// Conductance relaxation time (s).
    pub fn relaxation_time(&self) -> f64 {
        self.params.relaxation_time
    }
}

impl Element for Mysistor {
    fn name(&self) -> &str {
        &self.name
    }

    fn nodes(&self) -> Vec<NodeId> {
        vec![self.node_pos, self.node_neg]
    }

    fn renumber_nodes(&mut self, map: &dyn Fn(NodeId) -> NodeId) {
        self.reassign_nodes(map(self.node_pos), map(self.node_neg));
    }

    fn is_nonlinear(&self) -> bool {
        false
    }

    fn is_symbolic(&self) -> bool {
        true
    }
}

impl Stamper for Mysistor {
    fn stamp(&self, mna: &mut MnaSystem) {
        mna.stamp_conductance(self.node_pos, self.node_neg, self.conductance());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mysistor_core::OpValue;

    fn device() -> Mysistor {
        Mysistor::new("m1", NodeId::new(1), NodeId::new(2), 1000.0).unwrap()
    }

    #[test]
    fn test_seed_resistance() {
        let m = device();
        assert_eq!(m.resistance(), 1000.0);
        assert!((m.conductance() - 0.001).abs() < 1e-15);
    }

    #[test]
    fn test_set_conductance() {
        let mut m = device();
        m.set_conductance(0.002).unwrap();
        assert!((m.resistance() - 500.0).abs() < 1e-9);
    }

    #[test]
    fn test_set_resistance_is_idempotent() {
        let mut m = device();
        for r in [1.0, 47.0, 1e3, 2.2e6] {
            m.set_resistance(r).unwrap();
            assert!((m.resistance() - r).abs() <= 1e-12 * r);
        }
    }

    #[test]
    fn test_round_trip() {
        let mut m = device();
        m.set_conductance(3.7e-4).unwrap();
        m.set_resistance(1.0 / m.resistance()).unwrap();
        assert!((m.resistance() - 3.7e-4).abs() < 1e-15);
    }

    #[test]
    fn test_duality_holds_after_any_sequence() {
        let mut m = device();
        let steps: [(bool, f64); 6] = [
            (true, 0.01),
            (false, 33.0),
            (true, 1e-9),
            (false, 0.125),
            (true, 5.0),
            (false, 7e5),
        ];
        for (is_g, x) in steps {
            if is_g {
                m.set_conductance(x).unwrap();
            } else {
                m.set_resistance(x).unwrap();
            }
            assert!((m.conductance() * m.resistance() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_rejects_non_positive_values() {
        let mut m = device();
        m.set_conductance(0.002).unwrap();

        for x in [0.0, -1.0] {
            assert!(matches!(m.set_conductance(x), Err(Error::InvalidValue { .. })));
        }
        for x in [0.0, -5.0] {
            assert!(matches!(m.set_resistance(x), Err(Error::InvalidValue { .. })));
        }

        assert!((m.conductance() - 0.002).abs() < 1e-15);
        assert!((m.resistance() - 500.0).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_bad_seed() {
        let err = Mysistor::new("M1", NodeId::new(1), NodeId::GROUND, 0.0).unwrap_err();
        assert!(matches!(err, Error::InvalidValue { .. }));
    }

    #[test]
    fn test_rejects_bad_params() {
        for params in [
            DeviceParameters {
                radius_ratio: 0.0,
                ..Default::default()
            },
            DeviceParameters {
                channel_length: 0.0,
                ..Default::default()
            },
        ] {
            let err = Mysistor::with_params("M1", NodeId::new(1), NodeId::GROUND, 1e3, params)
                .unwrap_err();
            assert!(matches!(err, Error::InvalidParameter(_)));
        }
    }

    #[test]
    fn test_cylinder_construction() {
        let params = DeviceParameters {
            radius_ratio: 1.0,
            ..Default::default()
        };
        let m = Mysistor::with_params("M1", NodeId::new(1), NodeId::GROUND, 1e3, params).unwrap();
        assert!(m.model().delta_g == 0.0);
    }

    #[test]
    fn test_terminal_current_is_zero() {
        let mut m = device();
        for (v, t) in [(0.0, 0.0), (2.0, 1e-3), (-7.5, 10.0)] {
            assert_eq!(m.terminal_current(v, t), 0.0);
        }
        m.set_conductance(1.0).unwrap();
        assert_eq!(m.terminal_current(1.0, 0.0), 0.0);
    }

    #[test]
    fn test_op_info() {
        let m = device();
        let info = m.op_info(&[[2.0]]).unwrap();

        assert_eq!(info.labels(), &OP_LABELS);
        let values = info.values();
        assert_eq!(values[0], OpValue::Text("M1".to_string()));
        assert_eq!(values[1].as_f64(), Some(1000.0));
        assert_eq!(values[2].as_f64(), Some(2.0));
        assert!((values[3].as_f64().unwrap() - 0.002).abs() < 1e-15);
        assert!((values[4].as_f64().unwrap() - 0.004).abs() < 1e-15);
    }

    #[test]
    fn test_op_info_requires_port_voltage() {
        let m = device();
        let empty: [Vec<f64>; 0] = [];
        assert!(matches!(m.op_info(&empty), Err(Error::InvalidParameter(_))));
        assert!(matches!(m.op_info(&[Vec::<f64>::new()]), Err(Error::InvalidParameter(_))));
    }

    #[test]
    fn test_reassign_nodes() {
        let mut m = device();
        let g = m.conductance();
        m.reassign_nodes(NodeId::new(4), NodeId::GROUND);

        assert_eq!(Element::nodes(&m), vec![NodeId::new(4), NodeId::GROUND]);
        assert_eq!(m.conductance(), g);
    }

    #[test]
    fn test_capability_flags() {
        let m = device();
        assert!(!m.is_nonlinear());
        assert!(m.is_symbolic());
    }

    #[test]
    fn test_stamp() {
        let mut mna = MnaSystem::new(2, 0);
        let m = device();
        Stamper::stamp(&m, &mut mna);

        let g = 0.001;
        assert!((mna.matrix[(0, 0)] - g).abs() < 1e-15);
        assert!((mna.matrix[(1, 1)] - g).abs() < 1e-15);
        assert!((mna.matrix[(0, 1)] + g).abs() < 1e-15);
        assert!((mna.matrix[(1, 0)] + g).abs() < 1e-15);
    }

    #[test]
    fn test_renumber_keeps_state() {
        let mut m = device();
        m.set_conductance(0.004).unwrap();
        let model = m.model().clone();

        m.renumber_nodes(&|n: NodeId| NodeId::new(n.as_u32() + 10));

        assert_eq!(Element::nodes(&m), vec![NodeId::new(11), NodeId::new(12)]);
        assert!((m.conductance() - 0.004).abs() < 1e-15);
        assert_eq!(m.model(), &model);
    }

    #[test]
    fn test_op_info_from_solution() {
        let m = device();
        let v = m.port_voltage(&[3.0, 1.0]).unwrap();
        let info = m.op_info(&[[v]]).unwrap();
        assert_eq!(info.values()[2].as_f64(), Some(2.0));

        // Node 2 is not covered by a one-entry solution
        assert_eq!(m.port_voltage(&[1.0]), None);
    }

    #[test]
    fn test_flow_uses_configured_pressure() {
        let at_rest = device();
        assert_eq!(at_rest.flow_rate(0.0), 0.0);
        assert!((at_rest.flow_rate(1.0) - at_rest.model().q_over_potential).abs() < 1e-30);

        let params = DeviceParameters {
            pressure: 1e5,
            ..Default::default()
        };
        let pushed = Mysistor::with_params("M2", NodeId::new(1), NodeId::GROUND, 1e3, params).unwrap();
        let expected = pushed.model().q_pressure * 1e5;
        assert!((pushed.flow_rate(0.0) - expected).abs() <= 1e-12 * expected.abs());
        assert!(
            (pushed.peclet_number(0.0) - pushed.model().peclet_over_q * expected).abs()
                <= 1e-12 * (pushed.model().peclet_over_q * expected).abs()
        );
    }

    #[test]
    fn test_identical_params_give_identical_models() {
        let a = device();
        let b = device();
        assert_eq!(a.model(), b.model());
        assert_eq!(a.model().g0, b.model().g0);
        assert_eq!(a.model().delta_g, b.model().delta_g);
    }
}
