use bevy::prelude::*;

use constants::scene_settings::INTRO_FRAME_LIMIT;

/// Scene lifecycle phases. `Waiting` holds until the rendering surface has
/// nonzero measured dimensions; the intro sweep then runs for a bounded
/// number of frames before idle orbit takes over for good.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum ScenePhase {
    #[default]
    Waiting,
    IntroSweep,
    IdleOrbit,
}

/// Frame counter driving the intro sweep. Non-decreasing, saturates at
/// [`INTRO_FRAME_LIMIT`]; never reset across phases.
#[derive(Resource, Default)]
pub struct FrameCounter {
    pub frame: u32,
}

/// Set once the host tears the scene down; gates every per-frame system.
#[derive(Resource, Default)]
pub struct SceneTeardown {
    pub done: bool,
}

/// Run condition: frame work only happens while the scene is alive.
pub fn scene_active(teardown: Res<SceneTeardown>) -> bool {
    !teardown.done
}

/// Advance the intro frame counter; the saturation tick performs the one-way
/// transition into idle orbit.
pub fn advance_frame_counter(
    mut counter: ResMut<FrameCounter>,
    mut next_phase: ResMut<NextState<ScenePhase>>,
) {
    if counter.frame < INTRO_FRAME_LIMIT {
        counter.frame += 1;
    } else {
        info!("Intro sweep finished, idle orbit takes over");
        next_phase.set(ScenePhase::IdleOrbit);
    }
}

#[derive(Component)]
pub struct FpsText;

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::state::app::StatesPlugin;

    fn phase_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_plugins(StatesPlugin)
            .init_state::<ScenePhase>()
            .init_resource::<FrameCounter>()
            .init_resource::<SceneTeardown>()
            .add_systems(
                Update,
                advance_frame_counter
                    .run_if(in_state(ScenePhase::IntroSweep).and(scene_active)),
            );
        app.insert_state(ScenePhase::IntroSweep);
        app
    }

    fn current_phase(app: &App) -> ScenePhase {
        *app.world().resource::<State<ScenePhase>>().get()
    }

    #[test]
    fn counter_saturates_and_hands_over_to_idle_orbit() {
        let mut app = phase_app();
        let mut previous = 0;
        for _ in 0..150 {
            app.update();
            let frame = app.world().resource::<FrameCounter>().frame;
            assert!(frame >= previous, "counter must be non-decreasing");
            assert!(frame <= INTRO_FRAME_LIMIT, "counter must saturate");
            previous = frame;
        }
        assert_eq!(app.world().resource::<FrameCounter>().frame, INTRO_FRAME_LIMIT);
        assert_eq!(current_phase(&app), ScenePhase::IdleOrbit);
    }

    #[test]
    fn sweep_is_active_exactly_while_in_intro_phase() {
        let mut app = phase_app();
        for _ in 0..INTRO_FRAME_LIMIT {
            app.update();
            assert_eq!(current_phase(&app), ScenePhase::IntroSweep);
        }
        // Saturation tick flips the state; the counter then stays frozen.
        app.update();
        app.update();
        assert_eq!(current_phase(&app), ScenePhase::IdleOrbit);
        let frame = app.world().resource::<FrameCounter>().frame;
        for _ in 0..10 {
            app.update();
            assert_eq!(app.world().resource::<FrameCounter>().frame, frame);
        }
    }
}
