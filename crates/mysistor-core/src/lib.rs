//! Solver-facing interface for the Mysistor device model.
//!
//! This crate provides the small slice of a Modified Nodal Analysis (MNA)
//! simulator that a device model plugs into: node identifiers, the
//! conductance matrix a device stamps into, the element/stamper traits, and
//! operating-point reports. Node numbering, matrix assembly and the solve
//! itself belong to the host solver.

pub mod element;
pub mod mna;
pub mod node;
pub mod op;
pub mod stamp;
pub mod units;

pub use element::Element;
pub use mna::MnaSystem;
pub use node::NodeId;
pub use op::{OpInfo, OpValue};
pub use stamp::Stamper;
