use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use tracing::info;

use crate::simulation::integrator::euler_cromer_step;
use crate::simulation::projection::sim_to_screen;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::NVec2;

/// Component tagging each circle with its body index into Scenario.system.bodies
#[derive(Component)]
struct BodyIndex(pub usize);

/// Start the Bevy 2D viewer and run until the window is closed.
///
/// The window is the only rendering context and is owned by the Bevy app;
/// it is created here and torn down when `run` returns. Physics advances
/// one fixed timestep per rendered frame.
pub fn run_viewer(scenario: Scenario) {
    App::new()
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(scenario)
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_bodies_system)
        .add_systems(
            Update,
            (physics_step_system, sync_transforms_system, draw_trails_system).chain(),
        )
        .run();
}

/// Startup system: spawn the camera and one colored circle per body
fn setup_bodies_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    info!(
        bodies = scenario.system.bodies.len(),
        "starting 2D viewer"
    );

    // 2D camera; simulation origin maps to the screen center
    commands.spawn(Camera2dBundle::default());

    for (i, body) in scenario.system.bodies.iter().enumerate() {
        let screen = sim_to_screen(body.x, scenario.parameters.scale, NVec2::zeros());
        let [r, g, b] = body.color;

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(body.radius as f32))),
                material: materials.add(ColorMaterial::from(Color::srgb(r, g, b))),
                transform: Transform::from_xyz(screen.x as f32, screen.y as f32, 1.0),
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }
}

/// Advance the physics by one fixed step each frame
fn physics_step_system(mut scenario: ResMut<Scenario>) {
    // Split &mut Scenario into &mut fields in one destructuring step
    let Scenario {
        system,
        parameters,
        forces,
    } = &mut *scenario;

    euler_cromer_step(system, forces, parameters);
}

/// Move each circle to its body's current screen-space position
fn sync_transforms_system(scenario: Res<Scenario>, mut query: Query<(&BodyIndex, &mut Transform)>) {
    let scale = scenario.parameters.scale;
    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(b) = scenario.system.bodies.get(*i) {
            let screen = sim_to_screen(b.x, scale, NVec2::zeros());
            transform.translation.x = screen.x as f32;
            transform.translation.y = screen.y as f32;
        }
    }
}

/// Draw each body's orbit trail as an open polyline once it has >= 2 points
fn draw_trails_system(mut gizmos: Gizmos, scenario: Res<Scenario>) {
    let scale = scenario.parameters.scale;
    for body in &scenario.system.bodies {
        if body.orbit.len() < 2 {
            continue;
        }
        let [r, g, b] = body.color;
        let points = body.orbit.iter().map(|p| {
            let screen = sim_to_screen(*p, scale, NVec2::zeros());
            Vec2::new(screen.x as f32, screen.y as f32)
        });
        gizmos.linestrip_2d(points, Color::srgb(r, g, b));
    }
}
