use crate::types::ClientRecord;

/// Filters a client collection against a free-text query.
///
/// Implementations never fail: input with no recognizable structure
/// degrades to plain text search, never to an error.
pub trait ClientSearch: Send + Sync {
    fn search(&self, records: &[ClientRecord], query: &str) -> Vec<ClientRecord>;
}
