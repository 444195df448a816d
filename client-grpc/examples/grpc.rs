//! gRPC client implementation

use svc_agenda_client_grpc::client::{ListSessionsRequest, Session};
use svc_agenda_client_grpc::grpc::get_endpoint_from_env;
use svc_agenda_client_grpc::prelude::*;
use tonic::transport::Channel;

/// Example svc-agenda-client-grpc
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (host, port) = get_endpoint_from_env("SERVER_HOSTNAME", "SERVER_PORT_GRPC");
    let connection = GrpcClient::<RpcServiceClient<Channel>>::new_client(&host, port, "agenda");
    println!("Connection created");
    println!(
        "NOTE: Ensure the server is running on {} or this example will fail.",
        connection.get_address()
    );

    let response = connection.list_sessions(ListSessionsRequest {}).await?;

    for session in response.sessions {
        let Session { id, title } = session;
        println!("Session: {} ({})", title.unwrap_or_default(), id);
    }

    Ok(())
}
