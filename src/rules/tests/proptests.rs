use crate::cico::cico;
use crate::rules::tests::utils::{arb_duties, arb_leg, single};
use crate::rules::{
    MAX_DUTIES, MAX_TRANSPORTS, Rule, evaluate, has_max_sectors, is_early, is_late, max_duty,
    max_transports, reduced_rest,
};
use chrono::{NaiveDate, TimeDelta};
use proptest::prelude::*;
use proptest::proptest;

proptest! {
    #[test]
    fn test_evaluation_is_idempotent(duties in arb_duties()) {
        let first = evaluate(&duties);
        let second = evaluate(&duties);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_rules_do_not_depend_on_earlier_calls(a in arb_duties(), b in arb_duties()) {
        let fresh = evaluate(&b);
        let _ = evaluate(&a);
        prop_assert_eq!(fresh, evaluate(&b));
    }

    #[test]
    fn test_reduced_rest_matches_gap(duties in arb_duties()) {
        for ds in duties.windows(2) {
            let gap = ds[1].first_leg().dep_utc - ds[0].last_leg().arr_utc;
            prop_assert_eq!(gap < TimeDelta::hours(9), reduced_rest(&ds[0], &ds[1]));
        }
    }

    #[test]
    fn test_reduced_rest_around_nine_hours(seconds in 0..(18 * 3600i64)) {
        let first = single("2024-03-01 06:00", "2024-03-01 10:00");
        let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap().and_hms_opt(10, 0, 0).unwrap()
            + TimeDelta::seconds(seconds);
        let end = start + TimeDelta::hours(1);
        let second = single(
            &start.format("%Y-%m-%d %H:%M:%S").to_string(),
            &end.format("%Y-%m-%d %H:%M:%S").to_string(),
        );
        prop_assert_eq!(seconds < 9 * 3600, reduced_rest(&first, &second));
    }

    #[test]
    fn test_early_and_late_ignore_date(days in 0..3650i64, minute in 0..1440i64) {
        let dep = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap()
            + TimeDelta::days(days)
            + TimeDelta::minutes(minute);
        let arr = dep + TimeDelta::minutes(30);
        let duty = single(
            &dep.format("%Y-%m-%d %H:%M").to_string(),
            &arr.format("%Y-%m-%d %H:%M").to_string(),
        );
        prop_assert_eq!(minute < 9 * 60, is_early(&duty));
        prop_assert_eq!(minute >= 21 * 60, is_late(&duty));
    }

    #[test]
    fn test_count_rules(duties in arb_duties()) {
        let transports: usize = duties.iter().map(|d| d.transports()).sum();
        prop_assert_eq!(duties.len() <= MAX_DUTIES, max_duty(&duties));
        prop_assert_eq!(transports <= MAX_TRANSPORTS, max_transports(&duties));
        for d in &duties {
            prop_assert_eq!(d.legs().len() <= 3 && d.transports() == 1, has_max_sectors(d));
        }
    }

    #[test]
    fn test_catalogue_agrees_with_aircraft_change_total(duties in arb_duties()) {
        let changes: usize = duties.iter().map(|d| d.aircraft_changes().count()).sum();
        let verdict = Rule::MaxAircraftChanges.check(&duties);
        prop_assert_eq!(changes <= 2, verdict.is_compliant());
    }

    #[test]
    fn test_cico_brackets_leg(leg in arb_leg(0)) {
        let (check_in, check_out) = cico(&leg);
        prop_assert_eq!(leg.dep_lt - check_in, TimeDelta::hours(1));
        prop_assert_eq!(check_out - leg.arr_lt, TimeDelta::minutes(30));
    }
}
