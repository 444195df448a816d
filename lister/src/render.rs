//! Output formatting for session records

use svc_agenda_client_grpc::client::Session;

/// Format one session record as a display line.
/// An unset title renders as the empty string, like the wire default.
pub fn session_line(session: &Session) -> String {
    format!(
        "Session: {} ({})",
        session.title.as_deref().unwrap_or_default(),
        session.id
    )
}

/// Print all session records to stdout, in server order
pub fn print_sessions(sessions: &[Session]) {
    for session in sessions {
        println!("{}", session_line(session));
    }
}
