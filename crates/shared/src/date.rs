use time::OffsetDateTime;

/// Current unix timestamp in seconds.
pub fn timestamp() -> i64 {
    OffsetDateTime::now_utc().unix_timestamp()
}
