//! The MNA system a device stamps into.
//!
//! The host solver owns sizing, assembly and the solve. Devices only ever
//! add conductance between two of their nodes, between steps restamping
//! after their conductance has been updated.

use nalgebra::{DMatrix, DVector};

use crate::node::NodeId;

/// Coefficient matrix and right-hand side of `A x = b`.
///
/// Rows `0..num_nodes` are node equations (ground excluded); any further
/// rows are branch-current equations added by the host solver.
#[derive(Debug, Clone)]
pub struct MnaSystem {
    /// Coefficient matrix.
    pub matrix: DMatrix<f64>,
    /// Right-hand side.
    pub rhs: DVector<f64>,
    num_nodes: usize,
}

impl MnaSystem {
    /// Zeroed system for `num_nodes` non-ground nodes and `num_branches`
    /// branch-current variables.
    pub fn new(num_nodes: usize, num_branches: usize) -> Self {
        let dim = num_nodes + num_branches;
        Self {
            matrix: DMatrix::zeros(dim, dim),
            rhs: DVector::zeros(dim),
            num_nodes,
        }
    }

    /// Number of node equations.
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Zero the matrix and RHS before a restamp.
    pub fn clear(&mut self) {
        self.matrix.fill(0.0);
        self.rhs.fill(0.0);
    }

    /// Add conductance `g` between two nodes.
    ///
    /// Ground terminals contribute nothing, so a device tied to ground only
    /// touches the diagonal of its other node.
    pub fn stamp_conductance(&mut self, node_pos: NodeId, node_neg: NodeId, g: f64) {
        let (i, j) = (node_pos.mna_index(), node_neg.mna_index());
        for idx in [i, j].into_iter().flatten() {
            self.matrix[(idx, idx)] += g;
        }
        if let (Some(i), Some(j)) = (i, j) {
            self.matrix[(i, j)] -= g;
            self.matrix[(j, i)] -= g;
        }
    }
}
