use std::time::Instant;

use crate::simulation::ensemble::Ensemble;
use crate::simulation::fields::ModulatedField;
use crate::simulation::integrator::Integrator;
use crate::simulation::vector::Vec3;

/// Helper to build a bunch of size `n` with deterministic positions
fn make_bunch(n: usize, integrator: Integrator) -> Ensemble {
    let mut bunch = Ensemble::new(
        1.67e-27,
        1.60e-19,
        Vec3::zeros(),
        Vec3::new(0.1, 0.0, 0.0),
        n,
        integrator,
    );

    // deterministic positions, no rand needed
    for (i, p) in bunch.particles.iter_mut().enumerate() {
        let i_f = i as f64;
        p.state.x = Vec3::new(
            (i_f * 0.37).sin() * 0.01,
            (i_f * 0.13).cos() * 0.01,
            0.0,
        );
    }

    bunch
}

/// Helper to build a cyclotron-like field with its baseline captured
fn make_field() -> ModulatedField {
    let mut field = ModulatedField::new(
        Vec3::zeros(),
        Vec3::new(0.0, 1.0e-7, 0.0),
        Vec3::new(0.0, 0.0, 1.0e-7),
        1.0,
    );
    field.capture_baseline();
    field
}

/// Benchmark a single advance step for both integrators over a range of n
pub fn bench_advance() {
    let ns = [1000, 2000, 4000, 8000, 16000, 32000];
    let steps = 10; // number of advance steps per timing (tune as needed)
    let dt = 1.0e-4;

    for n in ns {
        let mut field = make_field();

        // Euler
        let mut bunch_euler = make_bunch(n, Integrator::Euler);

        // Warm up
        bunch_euler.advance(dt, &mut field).unwrap();

        let t0 = Instant::now();
        for _ in 0..steps {
            bunch_euler.advance(dt, &mut field).unwrap();
        }
        let euler_per_step = t0.elapsed().as_secs_f64() / steps as f64;

        // Euler-Cromer
        let mut bunch_cromer = make_bunch(n, Integrator::EulerCromer);

        // Warm up
        bunch_cromer.advance(dt, &mut field).unwrap();

        let t1 = Instant::now();
        for _ in 0..steps {
            bunch_cromer.advance(dt, &mut field).unwrap();
        }
        let cromer_per_step = t1.elapsed().as_secs_f64() / steps as f64;

        println!(
            "N = {n:6}, euler step = {:8.6} s, euler-cromer step = {:8.6} s",
            euler_per_step, cromer_per_step
        );
    }
}

/// Benchmark advance across a denser sweep of n
/// Paste output directly into a spreadsheet to graph
pub fn bench_advance_curve() {
    println!("N,euler_ms,euler_cromer_ms");

    let dt = 1.0e-4;

    // Steps of 1000 to give a smoother graph
    for n in (1000..=64000).step_by(1000) {
        // Small n: average over a few steps to smooth noise
        let steps = if n <= 8000 { 10 } else { 3 };

        let mut field = make_field();

        let mut bunch_euler = make_bunch(n, Integrator::Euler);
        let t0 = Instant::now();
        for _ in 0..steps {
            bunch_euler.advance(dt, &mut field).unwrap();
        }
        let ms_euler = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        let mut bunch_cromer = make_bunch(n, Integrator::EulerCromer);
        let t1 = Instant::now();
        for _ in 0..steps {
            bunch_cromer.advance(dt, &mut field).unwrap();
        }
        let ms_cromer = t1.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6},{:.6}", n, ms_euler, ms_cromer);
    }
}
