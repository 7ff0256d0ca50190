/// Post identifiers are opaque strings assigned by the store.
pub type PostId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
