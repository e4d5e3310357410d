//! Reusable shell building blocks.
//!
//! - [`DrawerToggle`]: open/close control for the primary drawer
//! - [`PlaceholderRows`]: numbered filler content
//! - [`icons`]: SVG icon components

mod drawer_toggle;
mod icons;
mod placeholder;

pub use drawer_toggle::DrawerToggle;
pub use icons::*;
pub use placeholder::PlaceholderRows;
