//! # waveportal-cli
//!
//! Common CLI utilities for the `wave` binary.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]

#[macro_use]
extern crate tracing;

pub mod alert;
pub mod handler;
pub mod opts;
pub mod utils;
