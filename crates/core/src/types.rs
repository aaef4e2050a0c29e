/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Creation times are stored as milliseconds since the Unix epoch.
pub type EpochMillis = i64;

/// Current wall-clock time in epoch milliseconds.
pub fn now_millis() -> EpochMillis {
    chrono::Utc::now().timestamp_millis()
}
