#![doc = include_str!("../README.md")]

pub mod config;
pub mod grpc;
pub mod render;

pub use crate::config::Config;
