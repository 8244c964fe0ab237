//! Board endpoint client.
//!
//! One GET against a third-party API returning the full board in a single
//! payload. No pagination, no auth, no retry.

use serde::Deserialize;
use tracing::debug;

use crate::errors::BoardError;
use crate::models::{Ticket, User};

/// Compiled-in board endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.quicksell.co/v1/internal/frontend-assignment";

/// Payload returned by the board endpoint.
#[derive(Debug, Deserialize)]
pub struct BoardData {
    pub tickets: Vec<Ticket>,
    pub users: Vec<User>,
}

/// Fetch the full board in one request.
pub async fn fetch_board(url: &str) -> Result<BoardData, BoardError> {
    let client = reqwest::Client::new();
    let resp = client
        .get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|source| BoardError::Request {
            url: url.to_string(),
            source,
        })?
        .error_for_status()
        .map_err(|source| BoardError::Status {
            url: url.to_string(),
            source,
        })?;

    let data: BoardData = resp.json().await.map_err(BoardError::Decode)?;
    debug!(
        tickets = data.tickets.len(),
        users = data.users.len(),
        "board fetched"
    );
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;

    // ── BoardData deserialization ────────────────────────────────────

    #[test]
    fn test_board_data_deserialize() {
        let json = r#"{
            "tickets": [
                {
                    "id": "CAM-1",
                    "title": "Update user profile page UI",
                    "tag": ["Feature Request"],
                    "userId": "usr-1",
                    "status": "Todo",
                    "priority": 4
                },
                {
                    "id": "CAM-2",
                    "title": "Add multi-language support",
                    "tag": ["Feature Request"],
                    "userId": "usr-2",
                    "status": "In progress",
                    "priority": 3
                }
            ],
            "users": [
                {"id": "usr-1", "name": "Anoop Sharma", "available": false},
                {"id": "usr-2", "name": "Yogesh", "available": true}
            ]
        }"#;
        let data: BoardData = serde_json::from_str(json).unwrap();
        assert_eq!(data.tickets.len(), 2);
        assert_eq!(data.users.len(), 2);
        assert_eq!(data.tickets[0].priority, Priority::Urgent);
        assert_eq!(data.users[1].name, "Yogesh");
    }

    #[test]
    fn test_board_data_empty_collections() {
        let json = r#"{"tickets": [], "users": []}"#;
        let data: BoardData = serde_json::from_str(json).unwrap();
        assert!(data.tickets.is_empty());
        assert!(data.users.is_empty());
    }

    #[test]
    fn test_board_data_missing_tickets_is_error() {
        let json = r#"{"users": []}"#;
        assert!(serde_json::from_str::<BoardData>(json).is_err());
    }

    #[test]
    fn test_default_endpoint_is_https() {
        assert!(DEFAULT_ENDPOINT.starts_with("https://"));
    }
}
