//! Core types and definitions for castfx.
//!
//! This crate defines the vocabulary shared by the scheduler and its hosts:
//! action descriptors, the narrow interfaces to engine-side collaborators
//! (subjects, visuals, curves), events, configuration and constants.
//! It has no dependency on any engine or runtime framework.

pub mod config;
pub mod constants;
pub mod descriptors;
pub mod error;
pub mod events;
pub mod interfaces;
pub mod state;
pub mod types;

pub use error::ScheduleError;
