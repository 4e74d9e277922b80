use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::rpg;

// 2026-07-04 is a Saturday, 2026-07-06 a Monday, 2026-07-08 a Wednesday.

#[test]
fn test_assess_weekend_residential_full_working_day() {
    // WA, slightly disturbing, Sat 07:00-15:00 (8 h):
    // T_R = 16, k_R = 6 (weekend window [6,9)), duration surcharge 3,
    // base 60, adjustment 10*log10(8/16) = -3.01
    rpg()
        .args([
            "--test",
            "assess",
            "--type",
            "s",
            "--zone",
            "wa",
            "--start",
            "2026-07-04 07:00",
            "--end",
            "2026-07-04 15:00",
        ])
        .assert()
        .success()
        .stdout(contains("General residential area (WA)"))
        .stdout(contains("slightly disturbing"))
        .stdout(contains("8.00 h"))
        .stdout(contains("16 h"))
        .stdout(contains("Rest-time surcharge (k_R):   6.00 dB"))
        .stdout(contains("Duration surcharge:          3.00 dB"))
        .stdout(contains("54.01 dB(A)"))
        .stdout(contains("79.01 dB(A)"));
}

#[test]
fn test_assess_industrial_with_impulse() {
    // GI, not disturbing, Mon 10:00-22:00 (12 h), impulse:
    // k_R = 0, no duration surcharge, base 70, adjustment -1.25
    rpg()
        .args([
            "--test",
            "assess",
            "--type",
            "n",
            "--zone",
            "gi",
            "--start",
            "2026-07-06 10:00",
            "--end",
            "2026-07-06 22:00",
            "--impulse",
        ])
        .assert()
        .success()
        .stdout(contains("Industrial area (GI)"))
        .stdout(contains("Impulse surcharge (k_I):     4.00 dB"))
        .stdout(contains("Rest-time surcharge (k_R):   0.00 dB"))
        .stdout(contains("Duration surcharge:          0.00 dB"))
        .stdout(contains("67.25 dB(A)"))
        .stdout(contains("97.25 dB(A)"));
}

#[test]
fn test_assess_evening_start_crossing_midnight() {
    // WR, disturbing, Wed 21:00 - Thu 02:00 (5 h): 21:00 is still day,
    // so T_R = 16; weekday window [20,22) gives k_R = 6; base 70
    rpg()
        .args([
            "--test",
            "assess",
            "--type",
            "d",
            "--zone",
            "wr",
            "--start",
            "2026-07-08 21:00",
            "--end",
            "2026-07-09 02:00",
        ])
        .assert()
        .success()
        .stdout(contains("5.00 h"))
        .stdout(contains("16 h"))
        .stdout(contains("Rest-time surcharge (k_R):   6.00 dB"))
        .stdout(contains("69.05 dB(A)"))
        .stdout(contains("89.05 dB(A)"));
}

#[test]
fn test_assess_night_start_uses_short_period() {
    // Start 23:00 -> night, T_R = 8; no k_R (outside windows)
    rpg()
        .args([
            "--test",
            "assess",
            "--type",
            "d",
            "--zone",
            "wr",
            "--start",
            "2026-07-06 23:00",
            "--end",
            "2026-07-07 03:00",
        ])
        .assert()
        .success()
        .stdout(contains("Rest-time surcharge (k_R):   0.00 dB"))
        .stdout(contains("73.01 dB(A)"))
        .stdout(contains("93.01 dB(A)"));
}

#[test]
fn test_assess_json_output() {
    rpg()
        .args([
            "--test",
            "assess",
            "--type",
            "s",
            "--zone",
            "wa",
            "--start",
            "2026-07-04 07:00",
            "--end",
            "2026-07-04 15:00",
            "--json",
        ])
        .assert()
        .success()
        .stdout(contains("\"allowed_average_level\""))
        .stdout(contains("\"allowed_peak_level\""))
        .stdout(contains("\"rest_time_surcharge\": 6.0"));
}

#[test]
fn test_assess_rejects_end_before_start() {
    rpg()
        .args([
            "--test",
            "assess",
            "--type",
            "n",
            "--zone",
            "gi",
            "--start",
            "2026-07-06 12:00",
            "--end",
            "2026-07-06 10:00",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid time range"));
}

#[test]
fn test_assess_rejects_equal_start_and_end() {
    rpg()
        .args([
            "--test",
            "assess",
            "--type",
            "n",
            "--zone",
            "gi",
            "--start",
            "2026-07-06 12:00",
            "--end",
            "2026-07-06 12:00",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid time range"));
}

#[test]
fn test_assess_rejects_unparseable_timestamp() {
    rpg()
        .args([
            "--test",
            "assess",
            "--type",
            "n",
            "--zone",
            "gi",
            "--start",
            "06.07.2026 12:00",
            "--end",
            "2026-07-06 14:00",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid date/time format"));
}

#[test]
fn test_assess_rejects_unknown_zoning() {
    rpg()
        .args([
            "--test",
            "assess",
            "--type",
            "n",
            "--zone",
            "xy",
            "--start",
            "2026-07-06 12:00",
            "--end",
            "2026-07-06 14:00",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid zoning code"));
}

#[test]
fn test_assess_rejects_unknown_event_type() {
    rpg()
        .args([
            "--test",
            "assess",
            "--type",
            "loud",
            "--zone",
            "gi",
            "--start",
            "2026-07-06 12:00",
            "--end",
            "2026-07-06 14:00",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid event type"));
}

#[test]
fn test_assess_accepts_html_datetime_form_and_long_names() {
    rpg()
        .args([
            "--test",
            "assess",
            "--type",
            "slightly-disturbing",
            "--zone",
            "general-residential",
            "--start",
            "2026-07-04T07:00",
            "--end",
            "2026-07-04T15:00",
        ])
        .assert()
        .success()
        .stdout(contains("54.01 dB(A)"))
        .stdout(contains("07.2026").not());
}
