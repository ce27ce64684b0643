pub mod access;
pub mod config;
pub mod error;
pub mod harness;
pub mod insertion;
