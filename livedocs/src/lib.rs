//! `livedocs` - interactive documentation server
//!
//! Discovers markdown documents under a root directory, renders their
//! runnable code regions as editors with run controls, and serves the
//! resulting pages over HTTP.

pub mod build_info;
pub mod cli;
pub mod config;
pub mod error;
pub mod observability;
pub mod pipeline;
pub mod project;
pub mod server;
