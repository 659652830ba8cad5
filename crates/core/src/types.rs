/// Backend primary keys are numeric.
pub type DbId = i64;

/// All server timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Currency amounts are whole rupiah.
pub type Amount = i64;
