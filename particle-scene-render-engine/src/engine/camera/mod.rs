//! Camera systems for the particle scene.
//!
//! The intro sweep drives the camera for a bounded number of frames; the
//! orbit camera takes over afterwards with idle auto-rotation and manual
//! mouse control.

pub mod intro_sweep;
pub mod orbit_camera;
