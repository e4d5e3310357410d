//! Navigation shell layout components.

mod app_bar;
mod home;
mod primary_draw;

pub use app_bar::PrimaryAppBar;
pub use home::{Home, HomeDocument};
pub use primary_draw::{PrimaryDraw, draw_variant};
