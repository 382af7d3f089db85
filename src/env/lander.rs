use bevy::prelude::*;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::components::{
    Action, FlightState, GroundComponent, HullComponent, SpatialComponent, TaskComponent,
    TerminationReason, ThrusterComponent,
};
use crate::env::{EnvError, EnvStatus, EpisodeState, Observation};
use crate::plugins::{spawn_scene, LanderPhysicsPlugin, SceneEntities};
use crate::resources::{ContactFlags, PhysicsConfig};

/// Craft position and heading for renderers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CraftPose {
    pub position: Vector2<f64>,
    pub angle: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StepInfo {
    pub landed: bool,
    pub crash: bool,
    pub steps: u32,
    pub termination: Option<TerminationReason>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepResult {
    pub observation: Observation,
    pub reward: f64,
    pub done: bool,
    pub info: StepInfo,
}

struct Simulation {
    app: App,
    scene: SceneEntities,
}

/// Snapshot of everything the reward and termination rules read after a step.
struct CraftReadout {
    spatial: SpatialComponent,
    altitude: f64,
    contacts: ContactFlags,
    task: TaskComponent,
}

/// Lunar lander environment: one craft, one ground edge, fixed time step.
pub struct LanderEnv {
    simulation: Option<Simulation>,
    episode: EpisodeState,
    config: PhysicsConfig,
}

impl Default for LanderEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl LanderEnv {
    pub fn new() -> Self {
        Self {
            simulation: None,
            episode: EpisodeState::default(),
            config: PhysicsConfig::default(),
        }
    }

    /// Rebuilds the world from scratch and returns the initial observation.
    pub fn reset(&mut self) -> Observation {
        let mut app = App::new();
        app.add_plugins(LanderPhysicsPlugin::with_config(self.config.clone()));
        let scene = spawn_scene(app.world_mut());

        let simulation = Simulation { app, scene };
        let readout = simulation.readout();
        let observation = Observation::from_state(&readout.spatial, &readout.contacts);

        self.simulation = Some(simulation);
        self.episode.begin();
        info!("Episode {} started", self.episode.episode);

        observation
    }

    /// Advances one time step with a raw action code.
    pub fn step(&mut self, action: u8) -> Result<StepResult, EnvError> {
        let action = Action::try_from(action)?;
        self.step_action(action)
    }

    pub fn step_action(&mut self, action: Action) -> Result<StepResult, EnvError> {
        let simulation = self
            .simulation
            .as_mut()
            .ok_or(EnvError::UninitializedState)?;

        simulation
            .app
            .world_mut()
            .get_mut::<ThrusterComponent>(simulation.scene.craft)
            .expect("spawn_scene always gives the craft a ThrusterComponent")
            .command = action;
        simulation.app.update();

        let readout = simulation.readout();
        let observation = Observation::from_state(&readout.spatial, &readout.contacts);
        let task = &readout.task;

        let mut reward = self.episode.advance(task.shaping(&observation));
        reward += task.fuel_reward(action);

        let termination = task.check_termination(&FlightState {
            position: readout.spatial.position,
            altitude: readout.altitude,
            left_contact: readout.contacts.left,
            right_contact: readout.contacts.right,
            speed: observation.speed(),
            angle: observation.angle,
            steps: self.episode.steps,
        });
        if let Some(reason) = termination {
            reward += task.terminal_reward(reason);
            info!(
                "Episode {} ended at step {}: {:?}",
                self.episode.episode, self.episode.steps, reason
            );
        }

        let done = termination.is_some();
        self.episode.record(reward, done);
        debug!(
            "Step {} action {:?} reward {:.4}",
            self.episode.steps, action, reward
        );

        Ok(StepResult {
            observation,
            reward,
            done,
            info: StepInfo {
                landed: termination == Some(TerminationReason::Landed),
                crash: termination == Some(TerminationReason::Crashed),
                steps: self.episode.steps,
                termination,
            },
        })
    }

    pub fn craft_pose(&self) -> Option<CraftPose> {
        let simulation = self.simulation.as_ref()?;
        let spatial = simulation
            .app
            .world()
            .get::<SpatialComponent>(simulation.scene.craft)?;

        Some(CraftPose {
            position: spatial.position,
            angle: spatial.angle,
        })
    }

    pub fn status(&self) -> EnvStatus {
        self.episode.status
    }

    pub fn episode(&self) -> &EpisodeState {
        &self.episode
    }
}

impl Simulation {
    /// # Panics
    /// If the scene lost one of the components `spawn_scene` always creates.
    fn readout(&self) -> CraftReadout {
        let world = self.app.world();
        let craft = world.entity(self.scene.craft);
        let spatial = craft
            .get::<SpatialComponent>()
            .expect("spawn_scene always gives the craft a SpatialComponent")
            .clone();
        let hull = craft
            .get::<HullComponent>()
            .expect("spawn_scene always gives the craft a HullComponent");
        let task = craft
            .get::<TaskComponent>()
            .expect("spawn_scene always gives the craft a TaskComponent")
            .clone();
        let ground = world
            .get::<GroundComponent>(self.scene.ground)
            .expect("spawn_scene always spawns the ground edge");

        CraftReadout {
            altitude: hull.clearance(&spatial, ground.height),
            spatial,
            contacts: *world.resource::<ContactFlags>(),
            task,
        }
    }
}
