//! Network messages - communication between App and Network layers

use crate::error::FetchError;
use crate::models::Item;

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// GET the items collection
    FetchItems {
        id: u64,
        url: String,
    },
    /// Cancel a pending fetch
    CancelFetch(u64),
    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer.
///
/// Every fetch produces exactly one of these.
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    /// Items decoded from a 2xx response
    Items {
        id: u64,
        items: Vec<Item>,
        time_ms: u64,
    },
    /// The fetch failed
    Failed {
        id: u64,
        error: FetchError,
        time_ms: u64,
    },
    /// The fetch was cancelled before it settled
    Cancelled {
        id: u64,
    },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::Items { id, .. } => *id,
            NetworkResponse::Failed { id, .. } => *id,
            NetworkResponse::Cancelled { id } => *id,
        }
    }

    pub fn from_result(id: u64, result: Result<Vec<Item>, FetchError>, time_ms: u64) -> Self {
        match result {
            Ok(items) => NetworkResponse::Items { id, items, time_ms },
            Err(error) => NetworkResponse::Failed { id, error, time_ms },
        }
    }
}
