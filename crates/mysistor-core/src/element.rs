//! Element trait shared by every device the solver owns.

use crate::NodeId;

/// A circuit element that connects nodes.
pub trait Element: std::fmt::Debug {
    /// Get the element's name (part ID).
    fn name(&self) -> &str;

    /// Get the nodes this element connects to.
    fn nodes(&self) -> Vec<NodeId>;

    /// Replace every terminal node through `map`.
    ///
    /// Called by the solver when it renumbers the circuit. Nothing but the
    /// node identifiers may change.
    fn renumber_nodes(&mut self, map: &dyn Fn(NodeId) -> NodeId);

    /// Whether the solver must Newton-iterate this element within a step.
    fn is_nonlinear(&self) -> bool {
        false
    }

    /// Whether the element is stamped as a conductance the solver may
    /// update between steps.
    fn is_symbolic(&self) -> bool {
        false
    }

    /// Voltage across the first port, `V(n1) - V(n2)`, read from a vector
    /// of node voltages.
    ///
    /// Returns `None` if the element has fewer than two nodes or the vector
    /// does not cover one of them.
    fn port_voltage(&self, solution: &[f64]) -> Option<f64> {
        match self.nodes().as_slice() {
            [pos, neg, ..] => Some(pos.voltage_in(solution)? - neg.voltage_in(solution)?),
            _ => None,
        }
    }
}
