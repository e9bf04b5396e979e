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
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
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
// Tests assert on known-good fixtures
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

//! Click-to-focus 3D showroom.
//!
//! Vantage describes a small scene (a room and a clickable motorcycle),
//! picks objects under the pointer, and animates an orbit camera toward a
//! per-object "tripod" pose when one is clicked. Rendering and asset
//! decoding stay outside the crate; it owns the scene description, picking,
//! input interpretation, and the tweens that move the camera.
//!
//! # Key entry points
//!
//! - [`Showroom`] - top-level composition; feed it input and frame ticks
//! - [`animation::CameraRig`] - turns [`FocusTarget`]s into camera tweens
//! - [`scene::compose`] - builds the scene tree from [`Options`]
//! - [`options::Options`] - TOML-backed configuration
//!
//! # Flow
//!
//! A press and release without drag becomes a click. The click casts a ray
//! from the camera, hits are delivered nearest first, and the first node
//! that stops propagation shields everything behind it. A published focus
//! target goes straight to the rig, which tweens the camera eye and the
//! orbit target over the configured duration, re-orienting the camera on
//! every step.

pub mod animation;
pub mod camera;
pub mod error;
pub mod focus;
pub mod input;
pub mod options;
pub mod picking;
pub mod scene;
pub mod showroom;
pub mod util;
#[cfg(feature = "web")]
pub mod web;

pub use error::VantageError;
pub use focus::FocusTarget;
pub use input::{InputEvent, MouseButton};
pub use options::Options;
pub use showroom::{Showroom, ShowroomCommand};
