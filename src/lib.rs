//! Tree visualization of the AWS Systems Manager Parameter Store hierarchy.
//!
//! Flat parameter names such as `/Servers/Prod/DbHost` are collected from the
//! store and folded into a tree where shared prefixes become shared ancestors.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
