//! Platform abstraction layer
//!
//! The host owns the window and the devices. The core only asks which
//! controls are held at the start of each frame.

pub mod headless;
pub mod input;

pub use headless::HeadlessHost;
pub use input::{Action, Control, Controls, HeldControls, poll};
