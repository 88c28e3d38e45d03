//! Water quality assessment against WHO-style limits for pH, turbidity,
//! and arsenic.
//!
//! [`engine`] is the pure core. [`form`], [`report`], [`config`],
//! [`oneshot`], and [`commands`] make up the terminal front end used by the
//! binary.

pub mod banner;
pub mod commands;
pub mod config;
pub mod consts;
pub mod engine;
pub mod form;
pub mod oneshot;
pub mod report;
