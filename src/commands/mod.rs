//! Command implementations
//!
//! tgsend has a single command: resolve the input and send it.

pub mod send;

pub use send::run as send_run;
