use chrono::{DateTime, TimeZone, Utc};

/// Millis timestamps are exposed as RFC 3339 datetimes
pub(crate) fn to_datetime(timestamp_millis: i64) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(timestamp_millis)
        .single()
        .unwrap_or_else(|| Utc.timestamp_nanos(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_millis() {
        assert_eq!(
            to_datetime(1_000).to_rfc3339(),
            "1970-01-01T00:00:01+00:00"
        );
    }
}
