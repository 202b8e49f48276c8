//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop: one window, one GPU backend, one mounted sphere view.

mod core;
mod event_handler;
mod init;
mod render;
mod shutdown;

pub use core::WireSphereApp;
