//! Simulation core for Voidstrike, a vertically scrolling arcade shooter.
//!
//! Everything in the library is engine-agnostic: positions are world units
//! on a 540×960 field, time is milliseconds on a pausable simulation clock,
//! and all randomness comes through an injected `rand::Rng`.  The terminal
//! frontend in the binary is one possible host; tests drive the same API.

pub mod background;
pub mod clock;
pub mod compute;
pub mod config;
pub mod entities;
pub mod spawn;
