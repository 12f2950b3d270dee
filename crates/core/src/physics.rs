use bevy::prelude::{Plugin, App, Startup, ResMut, FixedUpdate, IntoSystemConfigs, IntoSystemSetConfigs, info};
use bevy_rapier2d::{prelude::{RapierPhysicsPlugin, NoUserData, RapierConfiguration, TimestepMode, PhysicsSet}, render::RapierDebugRenderPlugin};
use tj_util::constants::PHYSICS_STEP;

type RapierPlugin = RapierPhysicsPlugin<NoUserData>;

const PPM: f32 = 1.0;

// Stepped once per FixedUpdate tick, so dt has to match the FixedTime period.
fn configure_timestep(mut rapier_config: ResMut<RapierConfiguration>) {
    rapier_config.timestep_mode = TimestepMode::Fixed {
        dt: PHYSICS_STEP,
        substeps: 1,
    };
    info!("physics stepping every {PHYSICS_STEP}s");
}

#[derive(Debug, Default)]
pub struct PhysicsPlugin {
    pub debug_render: bool,
}

impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        app
        .add_plugins(RapierPlugin::pixels_per_meter(PPM).with_default_system_setup(false))
        .configure_sets(
            FixedUpdate,
            (
                PhysicsSet::SyncBackend,
                PhysicsSet::SyncBackendFlush,
                PhysicsSet::StepSimulation,
                PhysicsSet::Writeback,
            ).chain(),
        )
        .add_systems(
            FixedUpdate,
            (
                RapierPlugin::get_systems(PhysicsSet::SyncBackend).in_set(PhysicsSet::SyncBackend),
                RapierPlugin::get_systems(PhysicsSet::SyncBackendFlush).in_set(PhysicsSet::SyncBackendFlush),
                RapierPlugin::get_systems(PhysicsSet::StepSimulation).in_set(PhysicsSet::StepSimulation),
                RapierPlugin::get_systems(PhysicsSet::Writeback).in_set(PhysicsSet::Writeback),
            ),
        )
        .add_systems(Startup, configure_timestep);

        if self.debug_render {
            app.add_plugins(RapierDebugRenderPlugin::default());
        }
    }
}
