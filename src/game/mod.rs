//! Core game module containing shared components, resources, events, and constants.

mod components;
mod constants;
mod draw;
mod events;
mod resources;
mod sets;

pub use components::*;
pub use constants::*;
pub use draw::*;
pub use events::*;
pub use resources::*;
pub use sets::*;
