//! # Constellation Tool
//!
//! An interactive 3D viewer for a journal of shared memories. Each memory
//! becomes a star laid out on a Fibonacci sphere; explicit links and derived
//! relations (temporal proximity, shared emotion) become threads between
//! them. Supports three kinds of memories:
//! - **Human memories**: moments recorded by the person
//! - **Companion memories**: moments recorded by their companion
//! - **Dreams**: nocturnal entries threaded by recurring emotion
//!
//! ## Features
//! - Orbit camera with drag rotation, wheel zoom, and idle auto-orbit
//! - Hand-rolled perspective projection with painter's-algorithm depth order
//! - Galaxy and thread views that flatten the same layout
//! - Pointer hover and click-to-inspect hit-testing
//! - Kind and linked-only filters that never reshuffle the layout

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod camera;
pub mod constants;
pub mod demo;
pub mod edges;
pub mod layout;
pub mod projection;
pub mod scene;
pub mod types;
mod ui;

pub use scene::{ConstellationScene, FramePass, ProjectedEdge, ProjectedNode};
pub use types::*;
pub use ui::{ConstellationApp, DisplaySettings};

/// Runs the constellation application with default settings.
///
/// This function initializes the egui application window and starts the main
/// event loop. Previously persisted state is restored from eframe storage
/// when available.
///
/// # Returns
///
/// Returns `Ok(())` if the application runs successfully, or an
/// `eframe::Error` if initialization fails.
///
/// # Example
///
/// ```no_run
/// use constellation_tool::run_app;
///
/// fn main() -> Result<(), eframe::Error> {
///     run_app()
/// }
/// ```
pub fn run_app() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Memory Constellation",
        options,
        Box::new(|cc| {
            let app = cc
                .storage
                .and_then(|storage| storage.get_string("app_state"))
                .and_then(|json| match ConstellationApp::from_json(&json) {
                    Ok(app) => Some(app),
                    Err(err) => {
                        log::warn!("ignoring unreadable persisted state: {err}");
                        None
                    }
                })
                .unwrap_or_default();
            Ok(Box::new(app))
        }),
    )
}
