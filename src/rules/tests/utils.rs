use crate::duty::Duty;
use crate::leg::Leg;
use crate::time::LocalTime;
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use proptest::prelude::Strategy;
use proptest::prop_oneof;
use proptest::strategy::Just;
use std::sync::Arc;

pub fn id(s: &str) -> Arc<str> {
    Arc::from(s)
}

/// Local wall-clock stamp, `YYYY-MM-DD HH:MM` or `YYYY-MM-DD HH:MM:SS`.
pub fn at(s: &str) -> LocalTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M"))
        .unwrap()
}

fn make_leg(designator: &str, dep_lt: &str, arr_lt: &str, utc_offset: i64, is_transport: bool) -> Leg {
    let dep_lt = at(dep_lt);
    let arr_lt = at(arr_lt);
    let offset = TimeDelta::hours(utc_offset);
    Leg {
        flight_designator: id(designator),
        rotation: None,
        is_transport,
        day: 0,
        dep_utc: (dep_lt - offset).and_utc(),
        dep_lt,
        arr_utc: (arr_lt - offset).and_utc(),
        arr_lt,
    }
}

/// Operating leg between two stations that share `utc_offset` hours.
pub fn leg(designator: &str, dep_lt: &str, arr_lt: &str, utc_offset: i64) -> Leg {
    make_leg(designator, dep_lt, arr_lt, utc_offset, false)
}

pub fn transport(designator: &str, dep_lt: &str, arr_lt: &str, utc_offset: i64) -> Leg {
    make_leg(designator, dep_lt, arr_lt, utc_offset, true)
}

/// Leg whose arrival station sits in another time zone than its departure.
pub fn leg_across(
    designator: &str,
    dep_lt: &str,
    dep_offset: i64,
    arr_lt: &str,
    arr_offset: i64,
) -> Leg {
    let mut l = make_leg(designator, dep_lt, arr_lt, dep_offset, false);
    l.arr_utc = (l.arr_lt - TimeDelta::hours(arr_offset)).and_utc();
    l
}

pub fn duty(legs: Vec<Leg>) -> Duty {
    Duty::new(legs).unwrap()
}

/// Single operating leg duty on UTC.
pub fn single(dep_lt: &str, arr_lt: &str) -> Duty {
    duty(vec![leg("XX001", dep_lt, arr_lt, 0)])
}

/// Single operating leg duty on day `day` of March 2024, `HH:MM` times.
pub fn on_day(day: u32, dep: &str, arr: &str) -> Duty {
    single(
        &format!("2024-03-{:02} {}", day, dep),
        &format!("2024-03-{:02} {}", day, arr),
    )
}

pub fn arb_designator() -> impl Strategy<Value = Arc<str>> {
    prop_oneof![
        Just(Arc::from("LH_1")),
        Just(Arc::from("LH_2")),
        Just(Arc::from("LH_3")),
    ]
}

type LegParams = (Arc<str>, i64, i64, i64, bool);

fn arb_leg_params() -> impl Strategy<Value = LegParams> {
    (arb_designator(), 0..240i64, 30..600i64, -12..=14i64, proptest::bool::ANY)
}

/// `start` minutes into March 2024, plus up to 240 ground and 600 block minutes.
fn build_leg(start: i64, (designator, ground, block, offset, is_transport): LegParams) -> Leg {
    let origin = NaiveDate::from_ymd_opt(2024, 3, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let dep_utc = origin + TimeDelta::minutes(start + ground);
    let arr_utc = dep_utc + TimeDelta::minutes(block);
    Leg {
        flight_designator: designator,
        rotation: None,
        is_transport,
        day: 0,
        dep_utc: dep_utc.and_utc(),
        dep_lt: dep_utc + TimeDelta::hours(offset),
        arr_utc: arr_utc.and_utc(),
        arr_lt: arr_utc + TimeDelta::hours(offset),
    }
}

/// Leg in a station between UTC-12 and UTC+14.
pub fn arb_leg(start: i64) -> impl Strategy<Value = Leg> {
    arb_leg_params().prop_map(move |params| build_leg(start, params))
}

/// Chronological duty sequence: 1 to 6 duties of 1 to 3 legs, rests of 4 to 16 hours.
pub fn arb_duties() -> impl Strategy<Value = Vec<Duty>> {
    let shape = (1..=3usize, 240..960i64, proptest::collection::vec(arb_leg_params(), 3));
    proptest::collection::vec(shape, 1..=6).prop_map(|shape| {
        let mut start = 0i64;
        let mut duties = Vec::new();
        for (count, rest, params) in shape {
            let mut legs = Vec::new();
            for p in params.into_iter().take(count) {
                legs.push(build_leg(start, p));
                start += 840;
            }
            start += rest;
            duties.push(Duty::new(legs).unwrap());
        }
        duties
    })
}
