//! <center>
//! <img src="https://github.com/Arrow-air/tf-github/raw/main/src/templates/doc-banner-services.png" style="height:250px" />
//! </center>
//! <div align="center">
//!     <a href="https://github.com/Arrow-air/svc-agenda/releases">
//!         <img src="https://img.shields.io/github/v/release/Arrow-air/svc-agenda?include_prereleases" alt="GitHub release (latest by date including pre-releases)">
//!     </a>
//!     <a href="https://github.com/Arrow-air/svc-agenda/tree/main">
//!         <img src="https://github.com/arrow-air/svc-agenda/actions/workflows/rust_ci.yml/badge.svg?branch=main" alt="Rust Checks">
//!     </a>
//!     <a href="https://discord.com/invite/arrow">
//!         <img src="https://img.shields.io/discord/853833144037277726?style=plastic" alt="Arrow DAO Discord">
//!     </a>
//!     <br><br>
//! </div>
//!
//! Exposes svc-agenda grpc client functions

#[macro_use]
pub mod macros;

/// Client Library: Client Functions, Structs
pub mod client {
    #![allow(unused_qualifications)]
    tonic::include_proto!("grpc");
}

pub mod grpc;
pub mod prelude;
pub mod service;

#[cfg(feature = "mock")]
pub mod mock;

pub use grpc::{ClientConnect, GrpcClient};
pub use service::{Client, RpcError};
