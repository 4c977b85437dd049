//! Fixed values shared by every test.

/// Storage key prefix used by test sessions
pub static TEST_STORAGE_PREFIX: &str = "qualitrack";

/// Date treated as "today" by test sessions, as (year, month, day)
pub static TEST_TODAY: (i32, u32, u32) = (2026, 10, 19);
