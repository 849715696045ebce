//! Conductance traces recovered from transient waveforms.
//!
//! A Mysistor driven by an ideal voltage source `V1` at node `n1` carries
//! the whole source current, so its conductance at every timepoint is
//! `g(t) = -I(V1) / V(n1)`. The minus sign follows the source branch
//! convention: a source delivering power reports a negative current.

use crate::error::{Error, Result};

/// Recover `(t, g)` pairs from a driving source current and node voltage.
///
/// Timepoints where the drive voltage is zero or not finite carry no
/// conductance information and are skipped.
pub fn conductance_trace(
    times: &[f64],
    source_current: &[f64],
    drive_voltage: &[f64],
) -> Result<Vec<(f64, f64)>> {
    if times.len() != source_current.len() || times.len() != drive_voltage.len() {
        return Err(Error::InvalidParameter(format!(
            "waveform lengths differ: {} times, {} currents, {} voltages",
            times.len(),
            source_current.len(),
            drive_voltage.len()
        )));
    }

    Ok(times
        .iter()
        .zip(source_current)
        .zip(drive_voltage)
        .filter(|&(_, &v)| v != 0.0 && v.is_finite())
        .map(|((&t, &i), &v)| (t, -i / v))
        .collect())
}

/// Recover `(t, R)` pairs; the reciprocal of [`conductance_trace`].
///
/// Timepoints with zero current are skipped as well.
pub fn resistance_trace(
    times: &[f64],
    source_current: &[f64],
    drive_voltage: &[f64],
) -> Result<Vec<(f64, f64)>> {
    Ok(conductance_trace(times, source_current, drive_voltage)?
        .into_iter()
        .filter(|&(_, g)| g != 0.0)
        .map(|(t, g)| (t, 1.0 / g))
        .collect())
}
