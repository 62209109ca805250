//! Rendering layer
//!
//! Screen regions paint into off-screen [`Surface`]s and are composited
//! through a chain of [`Screen`] nodes. Glyphs come in two modes:
//! - ASCII: Classic roguelike characters
//! - Unicode: Rich unicode symbols

pub mod mode;
pub mod surface;
pub mod window;
pub mod node;
pub mod game_surface;

pub use mode::{RenderMode, detect_render_mode};
pub use surface::{Opacity, Surface};
pub use window::{SlidingWindow, Window, WindowError};
pub use node::{RenderError, Screen, ScreenHandle, WOOD};
pub use game_surface::GameSurface;
