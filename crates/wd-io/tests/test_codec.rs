//! End-to-end tests of the date-array codec against `HolidayCalendar`.

use std::path::PathBuf;
use std::sync::Arc;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use wd_core::Error;
use wd_io::{load_file, save_file, StreamDateReader, StreamDateWriter};
use wd_time::{Date, HolidayCalendar, RandomDates, SilentObserver, WeekdaySet};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn read_all(bytes: &[u8]) -> Result<Vec<Date>, Error> {
    let mut reader = StreamDateReader::new(bytes);
    let mut out = Vec::new();
    while let Some(d) = reader.read()? {
        out.push(d);
    }
    Ok(out)
}

fn encode(cal: &HolidayCalendar) -> Vec<u8> {
    let mut writer = StreamDateWriter::new(Vec::new());
    cal.save(&mut writer).unwrap();
    writer.into_inner()
}

fn decode(bytes: &[u8], weekend: WeekdaySet) -> HolidayCalendar {
    HolidayCalendar::builder()
        .with_weekend(weekend)
        .with_observer(Arc::new(SilentObserver))
        .load(&mut StreamDateReader::new(bytes))
        .unwrap()
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("wd-io-{}-{name}.json", std::process::id()))
}

// ─── Reader ───────────────────────────────────────────────────────────────────

#[test]
fn reads_loosely_formatted_array_in_order() {
    let input = "[ \"2001-12-21\",\"2000-12-23\"\r\n,\"2015-12-24\"\r\n,\"2000-11-25\"\n\t ,   \"2000-12-26\"\n]\n";
    assert_eq!(
        read_all(input.as_bytes()).unwrap(),
        vec![
            date(2001, 12, 21),
            date(2000, 12, 23),
            date(2015, 12, 24),
            date(2000, 11, 25),
            date(2000, 12, 26),
        ]
    );
}

#[test]
fn reads_leading_blank_lines() {
    let input = "\r\n[ \"2001-12-21\"\r\n\r\n,\"2000-12-23\"\r\n]\r\n";
    assert_eq!(
        read_all(input.as_bytes()).unwrap(),
        vec![date(2001, 12, 21), date(2000, 12, 23)]
    );
}

#[test]
fn reader_errors_surface_through_load() {
    let mut cal = HolidayCalendar::new();
    let err = cal
        .load(&mut StreamDateReader::new(&br#"["2024-01-02","2024-02-30"]"#[..]))
        .unwrap_err();
    assert_eq!(err, Error::Syntax("invalid date literal `2024-02-30`".into()));
    // Dates read before the failure are kept.
    assert!(cal.contains(date(2024, 1, 2)));
}

// ─── Writer ───────────────────────────────────────────────────────────────────

#[test]
fn writes_dates_verbatim_including_duplicates() {
    let mut writer = StreamDateWriter::new(Vec::new());
    for d in [
        date(2001, 12, 21),
        date(2015, 12, 21),
        date(2003, 12, 21),
        date(2011, 12, 21),
        date(2001, 12, 21),
    ] {
        writer.write(d).unwrap();
    }
    writer.commit().unwrap();
    assert_eq!(
        String::from_utf8(writer.into_inner()).unwrap(),
        r#"["2001-12-21","2015-12-21","2003-12-21","2011-12-21","2001-12-21"]"#
    );
}

#[test]
fn empty_calendar_encodes_as_empty_array() {
    assert_eq!(encode(&HolidayCalendar::new()), b"[]");
    let cal = decode(b"[]", WeekdaySet::default());
    assert_eq!(cal.holiday_count(), 0);
}

#[test]
fn saved_calendar_is_sorted() {
    let cal = HolidayCalendar::builder()
        .with_holidays([date(2015, 12, 21), date(2001, 12, 21), date(2011, 12, 21)])
        .build();
    assert_eq!(
        encode(&cal),
        br#"["2001-12-21","2011-12-21","2015-12-21"]"#
    );
}

// ─── Round trip ───────────────────────────────────────────────────────────────

#[test]
fn random_calendar_round_trips() {
    let mut original = HolidayCalendar::builder()
        .with_observer(Arc::new(SilentObserver))
        .build();
    original.load(&mut RandomDates::seeded(1089, 2015)).unwrap();
    assert!(original.holiday_count() > 600);

    let restored = decode(&encode(&original), original.weekend());
    assert_eq!(restored, original);
}

#[test]
fn round_trip_with_custom_weekend() {
    let mut rng = StdRng::seed_from_u64(99);
    let weekend: WeekdaySet = wd_time::Weekday::ALL
        .into_iter()
        .filter(|_| rng.gen_bool(0.4))
        .collect();
    let mut original = HolidayCalendar::builder()
        .with_weekend(weekend)
        .with_observer(Arc::new(SilentObserver))
        .build();
    original.load(&mut RandomDates::seeded(1500, 7)).unwrap();

    let restored = decode(&encode(&original), weekend);
    assert_eq!(restored.holidays(), original.holidays());
}

proptest! {
    #[test]
    fn any_date_list_survives_the_wire(offsets in prop::collection::vec(0i32..80_000, 0..50)) {
        let dates: Vec<Date> = offsets.iter().map(|n| Date::MIN + *n).collect();
        let mut writer = StreamDateWriter::new(Vec::new());
        for d in &dates {
            writer.write(*d).unwrap();
        }
        writer.commit().unwrap();
        prop_assert_eq!(read_all(&writer.into_inner()).unwrap(), dates);
    }
}

#[test]
fn extreme_years_round_trip() {
    // 0001-01-01 is a Monday, 9999-12-31 a Friday.
    let original = HolidayCalendar::builder()
        .with_holidays([Date::MAX, date(1899, 12, 25), Date::MIN])
        .build();
    let bytes = encode(&original);
    assert_eq!(bytes, br#"["0001-01-01","1899-12-25","9999-12-31"]"#);
    assert_eq!(decode(&bytes, WeekdaySet::default()), original);
}

// ─── Files ────────────────────────────────────────────────────────────────────

#[test]
fn file_save_then_load() {
    let path = temp_path("save-load");
    let original = HolidayCalendar::builder()
        .with_holidays([date(2024, 12, 25), date(2024, 12, 26), date(2025, 1, 1)])
        .build();
    assert_eq!(save_file(&original, &path).unwrap(), 3);

    let mut restored = HolidayCalendar::new();
    assert_eq!(load_file(&mut restored, &path).unwrap(), 3);
    assert_eq!(restored, original);
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn missing_file_is_an_io_error() {
    let mut cal = HolidayCalendar::new();
    let err = load_file(&mut cal, temp_path("does-not-exist")).unwrap_err();
    assert!(matches!(err, Error::Io(_)), "unexpected error {err:?}");
}
