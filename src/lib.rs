#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod checker;
pub mod config;
pub mod models;
pub mod refs;
pub mod report;
pub mod scanner;

pub use checker::{CheckContext, run_check};
pub use config::{CheckConfig, ConfigOverrides};
pub use models::{CheckReport, MissingReference, Reference};
pub use report::{ReportFormat, render_report};
