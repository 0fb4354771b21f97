//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Coordinates config, renderer, scene animation, and live
//! reload.

mod core;
mod event_handler;
mod init;
mod reload;
mod render;
mod title;

pub use core::GyreApp;
