//! Performance measurement

pub mod monitor;

pub use monitor::{NoopReporter, PerformanceMonitor};
