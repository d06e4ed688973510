//! Scaffold for data jobs.
//!
//! The two binaries (`sample_job` and `sample_script`) are thin wrappers
//! around [`jobs`]; the numeric helpers live in [`utils`] and the local
//! compute session in [`session`] and [`dataframe`].

pub mod config;
pub mod dataframe;
pub mod jobs;
pub mod session;
pub mod utils;

pub use utils::{Scalar, UtilsError, add_numbers, mean};
