//! Timing plugin - paces input polling and movement steps.

use bevy::prelude::*;

use crate::game::{GameSet, GameSettings, Pacer};

/// Plugin that owns the [`Pacer`] and advances it every frame.
pub struct TimingPlugin;

impl Plugin for TimingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Pacer>()
            .add_systems(Update, tick_pacer.in_set(GameSet::Clock));
    }
}

impl FromWorld for Pacer {
    fn from_world(world: &mut World) -> Self {
        let settings = world
            .get_resource::<GameSettings>()
            .cloned()
            .unwrap_or_default();
        Pacer::new(&settings)
    }
}

/// System to advance both timers by the frame time.
fn tick_pacer(time: Res<Time>, mut pacer: ResMut<Pacer>) {
    pacer.tick(time.delta());
}

/// Run condition: the input queue should be drained this frame.
pub fn poll_due(pacer: Res<Pacer>) -> bool {
    pacer.poll_due()
}

/// Run condition: the snake should move this frame.
pub fn step_due(pacer: Res<Pacer>) -> bool {
    pacer.step_due()
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use bevy::time::TimeUpdateStrategy;

    use super::*;

    #[derive(Resource, Default)]
    struct Counts {
        polls: u32,
        steps: u32,
    }

    fn count_polls(mut counts: ResMut<Counts>) {
        counts.polls += 1;
    }

    fn count_steps(mut counts: ResMut<Counts>) {
        counts.steps += 1;
    }

    fn run_frames(settings: GameSettings, frames: u32) -> Counts {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(settings)
            .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(
                10,
            )))
            .init_resource::<Counts>();
        GameSet::configure(&mut app);
        app.add_plugins(TimingPlugin).add_systems(
            Update,
            (
                count_polls.in_set(GameSet::Input).run_if(poll_due),
                count_steps.in_set(GameSet::Step).run_if(step_due),
            ),
        );

        for _ in 0..frames {
            app.update();
        }
        app.world_mut().remove_resource::<Counts>().unwrap_or_default()
    }

    #[test]
    fn classic_polls_exactly_when_it_steps() {
        let counts = run_frames(GameSettings::classic(), 101);
        assert_eq!(counts.polls, counts.steps);
        assert!(counts.steps >= 9, "got {} steps", counts.steps);
    }

    #[test]
    fn decoupled_polls_more_often_than_it_steps() {
        let settings = GameSettings {
            poll_rate: 50,
            ..GameSettings::decoupled()
        };
        let counts = run_frames(settings, 101);
        assert!(counts.steps >= 9, "got {} steps", counts.steps);
        assert!(
            counts.polls >= counts.steps * 4,
            "got {} polls, {} steps",
            counts.polls,
            counts.steps
        );
    }
}
