//! gRPC client helpers implementation

use svc_agenda_client_grpc::prelude::*;
pub use tonic::transport::Channel;

/// Struct to hold all gRPC client connections
#[derive(Clone, Debug)]
pub struct GrpcClients {
    /// svc-agenda client
    pub agenda: GrpcClient<RpcServiceClient<Channel>>,
}

impl GrpcClients {
    /// Create new GrpcClients with defaults
    pub fn default(config: crate::config::Config) -> Self {
        GrpcClients {
            agenda: GrpcClient::<RpcServiceClient<Channel>>::new_client(
                &config.agenda_host_grpc,
                config.agenda_port_grpc,
                "agenda",
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_grpc_clients_default() {
        let config = crate::config::Config::default();
        let clients = GrpcClients::default(config);

        let agenda = &clients.agenda;
        println!("{:?}", agenda);
        assert_eq!(agenda.get_name(), "agenda");
        assert_eq!(agenda.get_address(), "http://localhost:5026");
    }
}
