//! Typed client calls for the agenda service

use snafu::prelude::Snafu;

use crate::client::{ListSessionsRequest, ListSessionsResponse};

/// Errors that can be returned by remote calls
#[derive(Debug, Clone, Copy, Snafu, PartialEq)]
pub enum RpcError {
    #[snafu(display("Could not connect to the server."))]
    CouldNotConnect,

    #[snafu(display("The remote call failed."))]
    CallFailed,
}

/// Client calls provided for the agenda service
#[tonic::async_trait]
pub trait Client {
    /// Request all published sessions, returned in server order
    async fn list_sessions(
        &self,
        request: ListSessionsRequest,
    ) -> Result<ListSessionsResponse, RpcError>;
}

cfg_if::cfg_if! {
    if #[cfg(feature = "stub_client")] {
        use crate::client::rpc_service_client::RpcServiceClient;
        use crate::grpc::GrpcClient;
        use tonic::transport::Channel;

        #[tonic::async_trait]
        impl Client for GrpcClient<RpcServiceClient<Channel>> {
            async fn list_sessions(
                &self,
                _request: ListSessionsRequest,
            ) -> Result<ListSessionsResponse, RpcError> {
                grpc_info!("(list_sessions) (MOCK) {} client.", self.get_name());
                Ok(ListSessionsResponse {
                    sessions: crate::mock::session_list(),
                })
            }
        }
    } else {
        use crate::client::rpc_service_client::RpcServiceClient;
        use crate::grpc::{ClientConnect, GrpcClient};
        use tonic::transport::Channel;

        #[tonic::async_trait]
        impl Client for GrpcClient<RpcServiceClient<Channel>> {
            async fn list_sessions(
                &self,
                request: ListSessionsRequest,
            ) -> Result<ListSessionsResponse, RpcError> {
                grpc_info!("(list_sessions) {} client.", self.get_name());
                grpc_debug!("(list_sessions) request: {:?}.", request);

                let mut client = match self.get_client().await {
                    Ok(client) => client,
                    Err(e) => {
                        grpc_error!(
                            "(list_sessions) could not connect to {} server: {}.",
                            self.get_name(),
                            e
                        );
                        return Err(RpcError::CouldNotConnect);
                    }
                };

                match client.list_sessions(tonic::Request::new(request)).await {
                    Ok(response) => Ok(response.into_inner()),
                    Err(e) => {
                        grpc_error!(
                            "(list_sessions) {} server returned error: {}.",
                            self.get_name(),
                            e
                        );
                        Err(RpcError::CallFailed)
                    }
                }
            }
        }
    }
}
