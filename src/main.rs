mod apple;
mod config;
mod game;
mod input;
mod rendering;
mod snake;
mod timing;

use bevy::{log::LogPlugin, prelude::*, window::WindowResolution};
use clap::Parser;

use apple::ApplePlugin;
use config::Options;
use game::{BOARD_BACKGROUND_COLOR, GameRng, GameSet, SCREEN_HEIGHT, SCREEN_WIDTH};
use input::InputPlugin;
use rendering::RenderingPlugin;
use snake::SnakePlugin;
use timing::TimingPlugin;

fn main() -> AppExit {
    let options = Options::parse();
    let settings = options.settings();

    let mut app = App::new();
    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    resolution: WindowResolution::new(SCREEN_WIDTH, SCREEN_HEIGHT)
                        .with_scale_factor_override(1.0),
                    title: "Snake".to_string(),
                    resizable: false,
                    ..default()
                }),
                ..default()
            })
            .set(LogPlugin {
                filter: "wgpu=error,naga=warn".to_string(),
                level: bevy::log::Level::INFO,
                ..default()
            }),
    )
    .insert_resource(ClearColor(BOARD_BACKGROUND_COLOR))
    .insert_resource(GameRng::new(options.seed));

    info!(
        variant = ?options.variant,
        speed = settings.speed,
        poll_rate = settings.poll_rate,
        seed = ?options.seed,
        "Starting snake"
    );
    app.insert_resource(settings);

    GameSet::configure(&mut app);
    app.add_plugins((
        TimingPlugin,
        InputPlugin,
        SnakePlugin,
        ApplePlugin,
        RenderingPlugin,
    ))
    .run()
}
