use super::*;
use crate::{error::ErrorKind, MAX_YEAR};

fn date(year: i32, month: u8, day: u8) -> CalendarDate {
    CalendarDate::new(year, month, day)
}

fn datetime(date: CalendarDate, hour: u8, minute: u8) -> DateTime {
    DateTime::new(date, Time::new(hour, minute, 0, 0))
}

const ALL_UNITS: [Unit; 9] = [
    Unit::Microsecond,
    Unit::Millisecond,
    Unit::Second,
    Unit::Minute,
    Unit::Hour,
    Unit::Day,
    Unit::Week,
    Unit::Month,
    Unit::Year,
];

#[test]
fn month_wrap_clamps_the_day() {
    let shifted = date(2021, 1, 31).shift(&[ShiftOffset::Months(1)]).unwrap();
    assert_eq!(shifted, date(2021, 2, 28));
    let shifted = date(2020, 1, 31).shift(&[ShiftOffset::Months(1)]).unwrap();
    assert_eq!(shifted, date(2020, 2, 29));
    let shifted = date(2021, 3, 31).shift(&[ShiftOffset::Months(-1)]).unwrap();
    assert_eq!(shifted, date(2021, 2, 28));
}

#[test]
fn month_interpolation_across_years() {
    let shifted = date(2021, 3, 15).shift(&[ShiftOffset::Months(-5)]).unwrap();
    assert_eq!(shifted, date(2020, 10, 15));
    let shifted = date(2021, 1, 15).shift(&[ShiftOffset::Months(-1)]).unwrap();
    assert_eq!(shifted, date(2020, 12, 15));
    let shifted = date(2021, 11, 15).shift(&[ShiftOffset::Months(14)]).unwrap();
    assert_eq!(shifted, date(2023, 1, 15));
    let shifted = date(2021, 6, 1).shift(&[ShiftOffset::Months(-24)]).unwrap();
    assert_eq!(shifted, date(2019, 6, 1));
}

#[test]
fn month_entries_are_summed() {
    let offsets = [ShiftOffset::Months(1), ShiftOffset::Months(2)];
    assert_eq!(ShiftPlan::resolve(&offsets).unwrap(), ShiftPlan::Months(3));
    assert_eq!(date(2021, 1, 31).shift(&offsets).unwrap(), date(2021, 4, 30));

    let cancelled = [ShiftOffset::Months(5), ShiftOffset::Months(-5)];
    assert_eq!(resolve(&cancelled).unwrap(), ShiftPlan::Noop);
}

#[test]
fn months_with_other_units_are_ambiguous() {
    let err = date(2021, 1, 1)
        .shift(&[ShiftOffset::Months(1), ShiftOffset::Days(5)])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AmbiguousShift);
    assert!(err.message().contains("days"));

    let err = ShiftPlan::resolve(&[
        ShiftOffset::Hours(1),
        ShiftOffset::Months(1),
        ShiftOffset::Years(1),
        ShiftOffset::Hours(2),
    ])
    .unwrap_err();
    assert_eq!(
        err.message(),
        "months cannot be combined with hours, years in one shift"
    );

    // Zero valued entries still make the request ambiguous.
    assert!(date(2021, 1, 1)
        .shift(&[ShiftOffset::Months(0), ShiftOffset::Seconds(0)])
        .is_err());
}

#[test]
fn zero_shift_is_identity() {
    let targets = [date(2021, 1, 31), date(2020, 2, 29), date(0, 1, 1)];
    for target in targets {
        assert_eq!(target.shift(&[]).unwrap(), target);
        for unit in ALL_UNITS {
            let offset = ShiftOffset::new(0, unit).unwrap();
            assert_eq!(target.shift(&[offset]).unwrap(), target, "{unit}");

            let dt = datetime(target, 13, 45);
            assert_eq!(dt.shift(&[offset]).unwrap(), dt, "{unit}");
        }
    }

    for unit in ALL_UNITS {
        let offset = ShiftOffset::new(0, unit).unwrap();
        let ts = Timestamp::epoch();
        assert_eq!(ts.shift(&[offset]).unwrap(), ts, "{unit}");
    }

    // An invalid date is returned untouched by a no-op.
    let invalid = date(2021, 2, 30);
    assert_eq!(invalid.shift(&[ShiftOffset::Days(0)]).unwrap(), invalid);
}

#[test]
fn compound_shifts() {
    let shifted = date(2021, 12, 31).shift(&[ShiftOffset::Days(1)]).unwrap();
    assert_eq!(shifted, date(2022, 1, 1));

    let shifted = date(2021, 1, 1)
        .shift(&[ShiftOffset::Weeks(2), ShiftOffset::Days(-1)])
        .unwrap();
    assert_eq!(shifted, date(2021, 1, 14));

    // Days are applied before years.
    let shifted = date(2020, 2, 28)
        .shift(&[ShiftOffset::Years(1), ShiftOffset::Days(1)])
        .unwrap();
    assert_eq!(shifted, date(2021, 2, 28));
    let shifted = date(2020, 2, 29)
        .shift(&[ShiftOffset::Years(1), ShiftOffset::Days(1)])
        .unwrap();
    assert_eq!(shifted, date(2021, 3, 1));
}

#[test]
fn sub_day_offsets_floor_dates() {
    let start = date(2021, 1, 1);
    assert_eq!(start.shift(&[ShiftOffset::Hours(25)]).unwrap(), date(2021, 1, 2));
    assert_eq!(start.shift(&[ShiftOffset::Hours(23)]).unwrap(), start);
    assert_eq!(start.shift(&[ShiftOffset::Seconds(-1)]).unwrap(), date(2020, 12, 31));
    assert_eq!(
        start
            .shift(&[ShiftOffset::Minutes(1_440), ShiftOffset::Hours(-24)])
            .unwrap(),
        start
    );
}

#[test]
fn year_shifts_clamp_or_reject() {
    let leap_day = date(2020, 2, 29);
    assert_eq!(leap_day.shift(&[ShiftOffset::Years(1)]).unwrap(), date(2021, 2, 28));
    assert_eq!(leap_day.shift(&[ShiftOffset::Years(4)]).unwrap(), date(2024, 2, 29));
    assert_eq!(leap_day.shift(&[ShiftOffset::Years(-100)]).unwrap(), date(1920, 2, 29));

    let err = leap_day
        .shift_with_overflow(&[ShiftOffset::Years(1)], ArithmeticOverflow::Reject)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidDate);
    assert_eq!(
        leap_day
            .shift_with_overflow(&[ShiftOffset::Years(4)], ArithmeticOverflow::Reject)
            .unwrap(),
        date(2024, 2, 29)
    );

    assert_eq!(
        date(2021, 1, 31)
            .shift_with_overflow(&[ShiftOffset::Months(1)], ArithmeticOverflow::Reject)
            .unwrap_err()
            .kind(),
        ErrorKind::InvalidDate
    );
}

#[test]
fn invalid_targets_are_balanced_first() {
    let invalid = date(2021, 2, 30);
    assert_eq!(invalid.shift(&[ShiftOffset::Days(1)]).unwrap(), date(2021, 3, 3));
    assert_eq!(invalid.shift(&[ShiftOffset::Months(1)]).unwrap(), date(2021, 4, 2));
    assert_eq!(date(2021, 13, 1).shift(&[ShiftOffset::Years(1)]).unwrap(), date(2023, 1, 1));
}

#[test]
fn results_stay_within_the_supported_years() {
    assert_eq!(
        CalendarDate::zero()
            .shift(&[ShiftOffset::Days(-1)])
            .unwrap_err()
            .kind(),
        ErrorKind::Range
    );
    let last = date(MAX_YEAR, 12, 31);
    assert!(last.shift(&[ShiftOffset::Days(1)]).is_err());
    assert!(last.shift(&[ShiftOffset::Years(1)]).is_err());
    assert!(last.shift(&[ShiftOffset::Months(1)]).is_err());
    assert_eq!(
        ShiftPlan::resolve(&[ShiftOffset::Days(i64::MAX), ShiftOffset::Days(1)])
            .unwrap_err()
            .kind(),
        ErrorKind::Range
    );
    assert!(date(2021, 1, 1).shift(&[ShiftOffset::Years(i64::MAX)]).is_err());

    // Intermediate values may leave the range as long as the result does not.
    let shifted = date(2021, 1, 1)
        .shift(&[ShiftOffset::Days(-800_000), ShiftOffset::Years(3_000)])
        .unwrap();
    assert!(shifted.is_valid());
}

#[test]
fn shifted_dates_are_valid() {
    let starts = [date(2020, 1, 31), date(2021, 2, 28), date(1999, 12, 31)];
    let offsets = [
        [ShiftOffset::Days(31), ShiftOffset::Years(1)],
        [ShiftOffset::Weeks(-9), ShiftOffset::Hours(7)],
        [ShiftOffset::Years(-1), ShiftOffset::Seconds(86_399)],
    ];
    for start in starts {
        for offsets in offsets {
            assert!(start.shift(&offsets).unwrap().is_valid());
        }
        for months in -25..=25 {
            assert!(start.shift(&[ShiftOffset::Months(months)]).unwrap().is_valid());
        }
    }
}

#[test]
fn date_time_shifts() {
    let start = datetime(date(2021, 1, 31), 23, 30);
    assert_eq!(
        start.shift(&[ShiftOffset::Minutes(45)]).unwrap(),
        datetime(date(2021, 2, 1), 0, 15)
    );
    assert_eq!(
        start.shift(&[ShiftOffset::Months(1)]).unwrap(),
        datetime(date(2021, 2, 28), 23, 30)
    );
    assert_eq!(
        start.shift(&[ShiftOffset::Hours(-48)]).unwrap(),
        datetime(date(2021, 1, 29), 23, 30)
    );

    let noon = datetime(date(2020, 2, 29), 12, 0);
    assert_eq!(
        noon.shift(&[ShiftOffset::Years(1), ShiftOffset::Hours(12)])
            .unwrap(),
        datetime(date(2021, 3, 1), 0, 0)
    );

    let offset = ShiftOffset::new(250, Unit::Millisecond).unwrap();
    let shifted = noon.shift(&[offset]).unwrap();
    assert_eq!(shifted.time(), Time::new(12, 0, 0, 250_000));
}

#[test]
fn timestamp_shifts() {
    let start = Timestamp::epoch();
    let shifted = start
        .shift(&[ShiftOffset::Days(1), ShiftOffset::Hours(-1)])
        .unwrap();
    assert_eq!(shifted.diff(&start, Unit::Hour).unwrap(), 23.0);

    let delta = Timestamp::from_unit(1.5, Unit::Second).unwrap();
    let shifted = start
        .shift(&[ShiftOffset::Timestamp(delta), ShiftOffset::Seconds(1)])
        .unwrap();
    assert_eq!(shifted.diff(&start, Unit::Millisecond).unwrap(), 2_500.0);

    for offset in [
        ShiftOffset::Weeks(1),
        ShiftOffset::Months(1),
        ShiftOffset::Years(-1),
    ] {
        let err = start.shift(&[offset]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(err.message().contains(offset.unit_name()));
    }

    // Shifting a Timestamp agrees with shifting its DateTime.
    let dt = DateTime::from_timestamp(&start).unwrap();
    let offsets = [ShiftOffset::Days(-3), ShiftOffset::Minutes(90)];
    assert_eq!(
        DateTime::from_timestamp(&start.shift(&offsets).unwrap()).unwrap(),
        dt.shift(&offsets).unwrap()
    );
}

#[test]
fn offsets_from_units() {
    assert_eq!(ShiftOffset::new(3, Unit::Week).unwrap(), ShiftOffset::Weeks(3));
    assert_eq!(ShiftOffset::new(-2, Unit::Year).unwrap(), ShiftOffset::Years(-2));
    assert_eq!(
        ShiftOffset::new(7, Unit::Microsecond).unwrap(),
        ShiftOffset::Timestamp(Timestamp::from_microseconds(7).unwrap())
    );
    assert!(ShiftOffset::new(0, Unit::Month).unwrap().is_zero());
    assert!(!ShiftOffset::Timestamp(Timestamp::epoch()).is_zero());
}
