//! Re-export of used objects

pub use super::client as agenda;
pub use super::grpc::{ClientConnect, GrpcClient};
pub use super::service::{Client as AgendaServiceClient, RpcError};
pub use agenda::rpc_service_client::RpcServiceClient;
