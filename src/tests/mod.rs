//! Test modules for the qupo GUI
//!
//! ## Test Categories
//!
//! - **Unit Tests**
//!   - `weights_test` - weight keys, snapshots and the updater
//!   - `models_test` - model catalog and solver set-up
//!   - `calculation_test` - calculation request building
//!   - `settings_test` - settings defaults and TOML loading
//!   - `components_test` - preview stepper behaviour
//!
//! - **Integration Tests**
//!   - `overview_test` - overview layout contract
//!   - `app_test` - weight store driving the overview layout
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test
//! cargo test overview_test
//! ```



#[cfg(test)]
pub mod calculation_test;



#[cfg(test)]
pub mod overview_test;
