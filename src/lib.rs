// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Camera controllers and input handling for real-time 3D viewers.
//!
//! Vantage provides the camera subsystem of a 3D application without
//! prescribing a renderer: a [`camera::Camera`] exposing lazily cached
//! view and projection matrices, two interchangeable controllers that
//! drive it, and an input layer that normalizes window events into
//! polled state plus broadcast signals.
//!
//! # Key entry points
//!
//! - [`camera::Camera`] - look-at settings, projection, cached matrices
//! - [`camera::OrbitCameraController`] - auto-rotating orbit around a
//!   fixed target
//! - [`camera::FlyCameraController`] - first-person free-look with
//!   scroll zoom and an enable/disable toggle
//! - [`input::InputPump`] - turns platform events into normalized state
//!   and signal emissions
//! - [`options::Options`] - runtime configuration with TOML presets
//!
//! # Frame model
//!
//! Everything runs single-threaded on the simulation loop, in a fixed
//! order each frame: platform events are fed to the [`input::InputPump`]
//! (which dispatches signals to subscribed controllers), each active
//! controller's `update(dt)` commits the final look-at, and only then
//! does the renderer read the camera matrices. Cameras and the pump are
//! shared through `Rc`, never across threads.

pub mod camera;
pub mod error;
pub mod input;
pub mod options;
#[cfg(feature = "viewer")]
pub mod platform;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use camera::{
    Camera, FlyCameraController, FlySettings, LookAtSettings,
    OrbitCameraController, OrbitSettings, Projection,
};
pub use error::VantageError;
pub use input::{
    Connection, InputEvent, InputPump, InputSource, Key, MouseButton,
    MouseButtons, MouseState, Signal,
};
pub use options::Options;
#[cfg(feature = "viewer")]
pub use viewer::Viewer;
