use chrono::Utc;

/// Current time as the catalog stores it: milliseconds since the epoch.
pub fn now_epoch_millis() -> i64 {
    Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_millis_not_seconds() {
        // 2001-09-09 in milliseconds; any current reading is past it.
        assert!(now_epoch_millis() > 1_000_000_000_000);
    }
}
