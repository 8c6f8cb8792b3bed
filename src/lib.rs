//! PRK Keymap Generator library
//!
//! This library provides the core of the keymap generator: resolving QMK pin
//! names, padding layer rows into a rectangular matrix, and rendering the
//! `keymap.rb` script loaded by PRK Firmware.

// Module declarations
pub mod app;
pub mod cli;
pub mod config;
pub mod constants;
pub mod firmware;
pub mod models;
pub mod services;
