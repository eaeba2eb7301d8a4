//! Single-screen counter built on Model-View-Intent.
//!
//! - [`service`]: async capability the counter is fetched from
//! - [`ui`]: view state, reducer, observable store, controller and the terminal view
//! - [`config`]: TOML configuration and CLI overrides

pub mod config;
pub mod logging;
pub mod service;
pub mod ui;
