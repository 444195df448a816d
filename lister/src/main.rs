//! Main function starting the session lister and initializing dependencies.

use log::{error, info};
use svc_agenda_client_grpc::client::ListSessionsRequest;
use svc_agenda_client_grpc::prelude::*;
use svc_agenda_lister::config::Config;
use svc_agenda_lister::grpc::GrpcClients;
use svc_agenda_lister::render;

#[tokio::main]
#[cfg(not(tarpaulin_include))]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Will use default config settings if no environment vars are found.
    let config = Config::try_from_env().unwrap_or_default();

    // Start Logger
    let log_cfg: &str = config.log_config.as_str();
    if let Err(e) = log4rs::init_file(log_cfg, Default::default()) {
        error!("(logger) could not parse {}: {}.", log_cfg, e);
        panic!();
    }

    let clients = GrpcClients::default(config);
    info!("(main) listing sessions from {}.", clients.agenda.get_address());

    let response = match clients.agenda.list_sessions(ListSessionsRequest {}).await {
        Ok(response) => response,
        Err(e) => {
            error!("(main) could not list sessions: {}", e);
            return Err(e.into());
        }
    };

    render::print_sessions(&response.sessions);

    info!("(main) successfully listed {} sessions.", response.sessions.len());
    Ok(())
}
