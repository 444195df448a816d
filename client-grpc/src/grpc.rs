//! gRPC client wrapper with lazy connection handling

use std::sync::Arc;
use tokio::sync::Mutex;
use tonic::transport::{Channel, Endpoint, Error};

use crate::client::rpc_service_client::RpcServiceClient;

/// Generic gRPC client, holds the server address and a cached connection
#[derive(Debug, Clone)]
pub struct GrpcClient<T> {
    inner: Arc<Mutex<Option<T>>>,
    address: String,
    name: String,
}

impl<T> GrpcClient<T> {
    /// Create a new client object with a server address to connect to
    pub fn new_client(server_host: &str, server_port: u16, name: &str) -> Self {
        let address = format!("http://{}:{}", server_host, server_port);
        grpc_info!("(new_client) {} client created for {}.", name, address);
        GrpcClient {
            inner: Arc::new(Mutex::new(None)),
            address,
            name: String::from(name),
        }
    }

    /// Get the client name
    pub fn get_name(&self) -> String {
        self.name.clone()
    }

    /// Get the address this client connects to
    pub fn get_address(&self) -> String {
        self.address.clone()
    }

    /// Drop the cached connection, the next call will dial again
    pub async fn invalidate(&self) {
        grpc_warn!("(invalidate) {} client connection invalidated.", self.name);
        let mut client = self.inner.lock().await;
        *client = None;
    }
}

/// Provides connected client stubs for the wrapped client type
#[tonic::async_trait]
pub trait ClientConnect<T> {
    /// Dial the server and return a new client stub
    async fn connect(&self) -> Result<T, Error>;

    /// Return the cached client stub, dialing the server first if needed
    async fn get_client(&self) -> Result<T, Error>;
}

#[tonic::async_trait]
impl ClientConnect<RpcServiceClient<Channel>> for GrpcClient<RpcServiceClient<Channel>> {
    async fn connect(&self) -> Result<RpcServiceClient<Channel>, Error> {
        grpc_debug!("(connect) {} client dialing {}.", self.name, self.address);

        // http scheme, the channel carries HTTP/2 frames in cleartext (h2c)
        let channel = Endpoint::from_shared(self.address.clone())?.connect().await?;
        Ok(RpcServiceClient::new(channel))
    }

    async fn get_client(&self) -> Result<RpcServiceClient<Channel>, Error> {
        let mut cached = self.inner.lock().await;
        match cached.as_ref() {
            Some(client) => Ok(client.clone()),
            None => {
                let client = self.connect().await?;
                *cached = Some(client.clone());
                Ok(client)
            }
        }
    }
}

/// Get host and port from environment variables, with local defaults
pub fn get_endpoint_from_env(env_host: &str, env_port: &str) -> (String, u16) {
    let host = std::env::var(env_host).unwrap_or_else(|_| String::from("localhost"));
    let port = std::env::var(env_port)
        .ok()
        .and_then(|port| port.parse().ok())
        .unwrap_or(5026);
    (host, port)
}
