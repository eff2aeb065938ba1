/// Property-based tests using proptest
/// Tests invariants that should hold for all inputs
use chrono::{DateTime, Timelike, Utc};
use event_leads_api::config::{Config, WritePolicy};
use event_leads_api::timezone::format_ict;
use proptest::prelude::*;

const ALLOWED_ORIGINS: &[&str] = &[
    "https://hubhoian.com",
    "https://www.hubhoian.com",
    "https://entrepreneursummer.com",
    "https://www.entrepreneursummer.com",
];

fn allow_list_config() -> Config {
    Config {
        supabase_url: "https://project.supabase.co".to_string(),
        supabase_service_role_key: "test_key".to_string(),
        port: 8080,
        cors_allowed_origins: ALLOWED_ORIGINS.iter().map(|s| s.to_string()).collect(),
        generate_timestamp: true,
        write_policy: WritePolicy::BestEffort,
    }
}

// Millisecond instants from 1970 through year 2100, the realistic input space
fn instant(millis: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(millis).unwrap()
}

// Property: ICT formatting always renders a fixed +07:00 offset
proptest! {
    #[test]
    fn ict_format_never_panics(millis in 0i64..4_102_444_800_000) {
        let _ = format_ict(instant(millis));
    }

    #[test]
    fn ict_format_carries_fixed_offset(millis in 0i64..4_102_444_800_000) {
        let formatted = format_ict(instant(millis));
        prop_assert!(formatted.ends_with("+07:00"), "missing offset: {}", formatted);
        // YYYY-MM-DDTHH:mm:ss.sss+07:00
        prop_assert_eq!(formatted.len(), 29);
    }

    #[test]
    fn ict_format_round_trips_to_same_instant(millis in 0i64..4_102_444_800_000) {
        let original = instant(millis);
        let formatted = format_ict(original);
        let parsed = DateTime::parse_from_rfc3339(&formatted).unwrap();
        prop_assert_eq!(parsed.with_timezone(&Utc), original);
    }

    #[test]
    fn ict_wall_clock_hour_is_shifted_by_seven(millis in 0i64..4_102_444_800_000) {
        let utc = instant(millis);
        let formatted = format_ict(utc);
        let ict_hour: u32 = formatted[11..13].parse().unwrap();
        prop_assert_eq!(ict_hour, (utc.hour() + 7) % 24);
    }
}

// Property: origin matching is exact string equality, nothing looser
proptest! {
    #[test]
    fn random_origins_never_match(origin in "[a-z:/.]{1,30}") {
        let config = allow_list_config();
        if !ALLOWED_ORIGINS.contains(&origin.as_str()) {
            prop_assert!(!config.origin_allowed(&origin));
        }
    }

    #[test]
    fn allowed_origin_with_suffix_never_matches(
        base in prop::sample::select(ALLOWED_ORIGINS.to_vec()),
        suffix in "[a-z./]{1,10}"
    ) {
        let config = allow_list_config();
        let origin = format!("{}{}", base, suffix);
        prop_assert!(!config.origin_allowed(&origin), "matched: {}", origin);
    }

    #[test]
    fn allowed_origin_with_prefix_never_matches(
        prefix in "[a-z]{1,10}",
        base in prop::sample::select(ALLOWED_ORIGINS.to_vec())
    ) {
        let config = allow_list_config();
        let origin = format!("{}{}", prefix, base);
        prop_assert!(!config.origin_allowed(&origin), "matched: {}", origin);
    }

    #[test]
    fn allow_list_members_always_match(
        base in prop::sample::select(ALLOWED_ORIGINS.to_vec())
    ) {
        let config = allow_list_config();
        prop_assert!(config.origin_allowed(base));
    }
}
