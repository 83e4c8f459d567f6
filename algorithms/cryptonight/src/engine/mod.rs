//! Execution Engine
//!
//! CPU dispatch, the hash pipeline and batch processing.

pub mod dispatcher;
pub mod parallel;
pub mod pipeline;

pub use dispatcher::get_active_backend_name;
