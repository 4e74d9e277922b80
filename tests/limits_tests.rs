use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::rpg;

#[test]
fn test_limits_prints_full_table() {
    rpg()
        .args(["--test", "limits"])
        .assert()
        .success()
        .stdout(contains("Immission thresholds"))
        .stdout(contains("Industrial area (GI)"))
        .stdout(contains("Commercial area (GE)"))
        .stdout(contains("Core area (MK)"))
        .stdout(contains("General residential area (WA)"))
        .stdout(contains("Pure residential area (WR)"))
        .stdout(contains("Spa area (KUR)"))
        .stdout(contains("45"))
        .stdout(contains("Peak addend: +30 / +25 / +20 dB"));
}

#[test]
fn test_limits_single_zoning_row() {
    rpg()
        .args(["--test", "limits", "--zone", "wr"])
        .assert()
        .success()
        .stdout(contains("Pure residential area (WR)"))
        .stdout(contains("Industrial area (GI)").not())
        .stdout(contains("50"))
        .stdout(contains("55"))
        .stdout(contains("70"));
}

#[test]
fn test_limits_rejects_unknown_zoning() {
    rpg()
        .args(["--test", "limits", "--zone", "zz"])
        .assert()
        .failure()
        .stderr(contains("Invalid zoning code"));
}
