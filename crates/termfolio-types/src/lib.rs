//! Foundation types for termfolio.
//!
//! This crate holds the platform-agnostic types shared by every termfolio
//! crate: the error enum, input events fed to the terminal session, and the
//! runtime configuration.

pub mod config;
pub mod error;
pub mod input;
