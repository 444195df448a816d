//! Mock data generation functions

use crate::client::Session;

/// Build a session record
pub fn session(id: &str, title: Option<&str>) -> Session {
    Session {
        id: String::from(id),
        title: title.map(String::from),
    }
}

/// A small fixed agenda, as a server would return it
pub fn session_list() -> Vec<Session> {
    vec![
        session("s1", Some("Opening Keynote")),
        session("s2", Some("Platform Roadmap")),
        session("s3", None),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_fields() {
        let session = session("s1", Some("Opening Keynote"));
        assert_eq!(session.id, String::from("s1"));
        assert_eq!(session.title, Some(String::from("Opening Keynote")));
    }

    #[test]
    fn test_session_list_order() {
        let sessions = session_list();
        assert_eq!(sessions.len(), 3);
        assert_eq!(sessions[0].id, String::from("s1"));
        assert_eq!(sessions[1].id, String::from("s2"));
        assert_eq!(sessions[2].id, String::from("s3"));
        assert!(sessions[2].title.is_none());
    }
}
