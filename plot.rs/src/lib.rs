//! Minimal plotting of real-to-real point sets in a window.
//!
//! Figures are rendered by a single window running on a background thread,
//! laid out in a grid in the order they were shown.

mod figure;
pub use figure::*;

pub mod layout;

mod plot_window;
pub use plot_window::*;

pub use macroquad;
