use bijux_portal_model::{humanize, is_recommended_project_id};
use proptest::prelude::*;
use proptest::test_runner::Config;

proptest! {
    #![proptest_config(Config::with_cases(128))]

    #[test]
    fn humanize_is_idempotent(raw in "[a-zA-Z_ -]{0,24}") {
        let once = humanize(&raw);
        prop_assert_eq!(humanize(&once), once.clone());
        prop_assert!(!once.contains('_'));
        prop_assert!(!once.contains('-'));
    }

    #[test]
    fn generated_ids_match_recommended_shape(
        prefix in "[A-Z]{2,4}",
        year in 2000_u32..2100,
        month in 1_u32..13,
        day in 1_u32..29
    ) {
        let id = format!("{prefix}-{year:04}-{month:02}-{day:02}");
        prop_assert!(is_recommended_project_id(&id));
        let lowered = id.to_lowercase();
        prop_assert!(!is_recommended_project_id(&lowered));
    }
}
