use solarsim::simulation::forces::{ForceSet, NewtonianGravity};
use solarsim::simulation::integrator::euler_cromer_step;
use solarsim::simulation::params::{Parameters, AU, G};
use solarsim::simulation::projection::{screen_to_sim, sim_to_screen};
use solarsim::simulation::scenario::Scenario;
use solarsim::simulation::states::{Body, NVec2, System};
use solarsim::ScenarioConfig;

/// Build a simple 2-body System separated along the x-axis, no anchor
pub fn two_body_system(dist: f64, m1: f64, m2: f64) -> System {
    let b1 = Body::new(
        NVec2::new(-dist / 2.0, 0.0),
        NVec2::zeros(),
        m1,
        1.0,
        [1.0, 1.0, 1.0],
    );
    let b2 = Body::new(
        NVec2::new(dist / 2.0, 0.0),
        NVec2::zeros(),
        m2,
        1.0,
        [1.0, 1.0, 1.0],
    );
    System {
        bodies: vec![b1, b2],
        anchor: None,
        t: 0.0,
    }
}

/// Default physics parameters for tests
pub fn test_params() -> Parameters {
    Parameters::default()
}

/// Build a gravity term + ForceSet
pub fn gravity_set(p: &Parameters) -> ForceSet {
    ForceSet::new().with(NewtonianGravity { g: p.g })
}

// ==================================================================================
// Gravity tests
// ==================================================================================

#[test]
fn gravity_newton_third_law() {
    let sys = two_body_system(1.0e11, 2.0e30, 3.0e24);
    let p = test_params();

    let f_ab = sys.bodies[0].attraction(&sys.bodies[1], p.g);
    let f_ba = sys.bodies[1].attraction(&sys.bodies[0], p.g);

    let net = f_ab + f_ba;
    assert!(
        net.norm() <= 1e-9 * f_ab.norm(),
        "Forces not equal and opposite: {:?} vs {:?}",
        f_ab,
        f_ba
    );
}

#[test]
fn gravity_points_toward_other_body() {
    let sys = two_body_system(2.0e11, 1.0e30, 1.0e30);
    let p = test_params();

    let dx = sys.bodies[1].x - sys.bodies[0].x;
    let f = sys.bodies[0].attraction(&sys.bodies[1], p.g);

    assert!(dx.norm() > 0.0);
    assert!(f.dot(&dx) > 0.0, "Force is not toward the second body");
}

#[test]
fn gravity_inverse_square_law() {
    let sys_r = two_body_system(1.0e11, 1.0e30, 1.0e30);
    let sys_2r = two_body_system(2.0e11, 1.0e30, 1.0e30);
    let p = test_params();

    let f_r = sys_r.bodies[0].attraction(&sys_r.bodies[1], p.g);
    let f_2r = sys_2r.bodies[0].attraction(&sys_2r.bodies[1], p.g);

    let ratio = f_r.norm() / f_2r.norm();
    assert!((ratio - 4.0).abs() < 1e-9, "Expected ~4x, got {}", ratio);
}

#[test]
fn force_set_total_matches_pairwise_for_single_partner() {
    let sys = two_body_system(1.5e11, 1.98892e30, 5.9742e24);
    let p = test_params();
    let forces = gravity_set(&p);

    let mut total = vec![NVec2::zeros(); 2];
    forces.accumulate_forces(sys.t, &sys, &mut total);

    // With exactly one partner the accumulated total is the pairwise force
    let pairwise = sys.bodies[0].attraction(&sys.bodies[1], p.g);
    assert_eq!(total[0], pairwise);
    assert_eq!(total[1], -pairwise);
}

// ==================================================================================
// Integrator tests
// ==================================================================================

#[test]
fn orbit_history_grows_one_entry_per_step() {
    let mut scenario = Scenario::solar_system();
    let forces = gravity_set(&scenario.parameters);

    for _ in 0..4 {
        euler_cromer_step(&mut scenario.system, &forces, &scenario.parameters);
    }
    for b in &scenario.system.bodies {
        assert_eq!(b.orbit.len(), 4);
    }

    // Earlier entries never change once written
    let prefixes: Vec<Vec<NVec2>> = scenario
        .system
        .bodies
        .iter()
        .map(|b| b.orbit.clone())
        .collect();

    for _ in 0..6 {
        euler_cromer_step(&mut scenario.system, &forces, &scenario.parameters);
    }
    for (b, prefix) in scenario.system.bodies.iter().zip(prefixes.iter()) {
        assert_eq!(b.orbit.len(), 10);
        assert_eq!(&b.orbit[..4], &prefix[..]);
    }
}

#[test]
fn circular_orbit_returns_after_one_year() {
    // Heavy anchor at the origin, light body at 1 AU with circular-orbit speed
    let sun_mass = 1.989e30;
    let v_circ = (G * sun_mass / AU).sqrt();

    let sun = Body::new(NVec2::zeros(), NVec2::zeros(), sun_mass, 1.0, [1.0, 1.0, 1.0]);
    let planet = Body::new(
        NVec2::new(AU, 0.0),
        NVec2::new(0.0, v_circ),
        5.9742e24,
        1.0,
        [1.0, 1.0, 1.0],
    );
    let start = planet.x;

    let mut sys = System {
        bodies: vec![sun, planet],
        anchor: Some(0),
        t: 0.0,
    };
    let p = test_params();
    let forces = gravity_set(&p);

    // 365 one-day steps, roughly one orbital period
    for _ in 0..365 {
        euler_cromer_step(&mut sys, &forces, &p);
    }

    let drift = (sys.bodies[1].x - start).norm();
    assert!(
        drift < 0.05 * AU,
        "Planet drifted {} m ({} AU) from its starting point",
        drift,
        drift / AU
    );
}

#[test]
fn distance_to_anchor_uses_frame_start_positions() {
    let d = 2.5e11;
    let sun = Body::new(NVec2::zeros(), NVec2::zeros(), 1.98892e30, 1.0, [1.0, 1.0, 1.0]);
    let planet = Body::new(
        NVec2::new(d, 0.0),
        NVec2::new(0.0, 20.0e3),
        5.9742e24,
        1.0,
        [1.0, 1.0, 1.0],
    );

    let mut sys = System {
        bodies: vec![sun, planet],
        anchor: Some(0),
        t: 0.0,
    };
    let p = test_params();
    let forces = gravity_set(&p);

    euler_cromer_step(&mut sys, &forces, &p);

    // Distances are recorded from the snapshot, before any position moves
    let recorded = sys.bodies[1].distance_to_anchor;
    assert!(
        (recorded - d).abs() <= 1e-6 * d,
        "Expected pre-step distance {}, got {}",
        d,
        recorded
    );

    // The anchor itself is never measured against anything
    assert_eq!(sys.bodies[0].distance_to_anchor, 0.0);
}

#[test]
fn body_count_and_immutable_attributes_stable() {
    let mut scenario = Scenario::solar_system();
    let forces = gravity_set(&scenario.parameters);

    let initial: Vec<(f64, f64, [f32; 3])> = scenario
        .system
        .bodies
        .iter()
        .map(|b| (b.m, b.radius, b.color))
        .collect();

    for _ in 0..50 {
        euler_cromer_step(&mut scenario.system, &forces, &scenario.parameters);
    }

    assert_eq!(scenario.system.bodies.len(), initial.len());
    for (b, (m, radius, color)) in scenario.system.bodies.iter().zip(initial.iter()) {
        assert_eq!(b.m, *m);
        assert_eq!(b.radius, *radius);
        assert_eq!(b.color, *color);
    }
}

// ==================================================================================
// Projection tests
// ==================================================================================

#[test]
fn scale_transform_round_trip() {
    let p = test_params();
    let center = NVec2::new(750.0, 800.0);

    let points = [
        NVec2::zeros(),
        NVec2::new(AU, 0.0),
        NVec2::new(-2.27 * AU, 0.5 * AU),
        NVec2::new(1.23e9, -9.87e11),
    ];

    for sim in points {
        let screen = sim_to_screen(sim, p.scale, center);
        let back = screen_to_sim(screen, p.scale, center);
        assert!(
            (back - sim).norm() <= 1e-9 * (sim.norm() + 1.0),
            "Round trip lost {:?} -> {:?}",
            sim,
            back
        );
    }
}

// ==================================================================================
// Scenario tests
// ==================================================================================

#[test]
fn builtin_roster_has_sun_as_anchor() {
    let scenario = Scenario::solar_system();

    assert_eq!(scenario.system.bodies.len(), 6);
    assert_eq!(scenario.system.anchor, Some(0));

    // The anchor is the heaviest body and sits at the origin
    let sun = &scenario.system.bodies[0];
    assert!(scenario.system.bodies.iter().all(|b| b.m <= sun.m));
    assert_eq!(sun.x, NVec2::zeros());
}

#[test]
fn last_anchor_flag_wins() {
    let yaml = r#"
bodies:
  - x: [0.0, 0.0]
    v: [0.0, 0.0]
    m: 1.0e30
    radius: 10.0
    color: [1.0, 1.0, 0.0]
    anchor: true
  - x: [1.0e11, 0.0]
    v: [0.0, 3.0e4]
    m: 1.0e24
    radius: 5.0
    color: [0.0, 0.5, 1.0]
  - x: [2.0e11, 0.0]
    v: [0.0, 2.0e4]
    m: 1.0e24
    radius: 5.0
    color: [1.0, 0.0, 0.0]
    anchor: true
"#;
    let cfg: ScenarioConfig = serde_yaml::from_str(yaml).expect("scenario should parse");
    let scenario = Scenario::build_scenario(cfg);

    assert_eq!(scenario.system.anchor, Some(2));
    // Omitted parameters fall back to the built-in constants
    assert_eq!(scenario.parameters.timestep, solarsim::TIMESTEP);
}
