use chrono::Utc;

/// Id assignment for new accounts. Injectable so tests can use a
/// deterministic sequence instead of the wall clock.
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Default generator: millisecond epoch timestamp rendered as a decimal
/// string. Collisions within one millisecond are a theoretical non-goal for
/// a single-user store.
#[derive(Debug, Default)]
pub struct TimestampIds;

impl IdGenerator for TimestampIds {
    fn next_id(&mut self) -> String {
        Utc::now().timestamp_millis().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_ids_are_numeric_strings() {
        let id = TimestampIds.next_id();
        assert!(!id.is_empty());
        assert!(id.chars().all(|c| c.is_ascii_digit()));
    }
}
