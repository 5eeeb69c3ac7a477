//! High-level runtime engine settings and the stepping loop
//!
//! `Engine` selects the integration scheme and whether spatial gating of
//! the magnetic field participates in the loop. `run` drives a built
//! `Scenario` to its end time, writing one trajectory record per step.

use std::io::Write;

use log::info;

use crate::error::SimulationError;
use crate::simulation::integrator::Integrator;
use crate::simulation::scenario::Scenario;

#[derive(Debug, Clone)]
pub struct Engine {
    pub integrator: Integrator, // euler or euler-cromer
    pub spatial_gating: bool, // false = magnetic field stays at baseline everywhere
}

/// Run the scenario to its end time, one fixed step at a time
///
/// Per step, in order: compute the bunch average, write it as
/// "x y" on one line, advance time, re-derive the oscillating electric
/// field from its baseline, optionally gate the magnetic field on the
/// bunch average position, then advance every particle. The loop boundary
/// is the only point where the state is consistent, so any external
/// cancellation belongs between iterations, not inside one.
pub fn run<W: Write>(scenario: &mut Scenario, out: &mut W) -> Result<(), SimulationError> {
    // Split &mut Scenario into &mut fields in one destructuring step
    let Scenario {
        engine,
        parameters,
        field,
        bunch,
    } = scenario;

    let dt = parameters.dt;
    let mut t = 0.0;
    let mut steps: u64 = 0;

    info!(
        "run: {} particles, dt = {:.3e}, t_end = {:.3e}",
        bunch.len(),
        dt,
        parameters.t_end
    );

    while t <= parameters.t_end {
        // Record first, so the initial state appears in the output
        let avg = bunch.average_position()?;
        writeln!(out, "{} {}", avg.x, avg.y)?;

        t += dt;

        // Field modulations are re-derived from the saved baseline each
        // step; they never feed back on the live values
        field.oscillate_electric(t, parameters.period);
        if engine.spatial_gating {
            field.gate_magnetic(&avg);
        }

        bunch.advance(dt, field)?;
        steps += 1;
    }

    out.flush()?;
    info!("run complete: {} steps, t = {:.6e}", steps, t);

    Ok(())
}
