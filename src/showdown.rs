// Acceptance battery of illustrative hand comparisons.
//
// Each check names two hands and the expected ordering of the first against
// the second. The battery is run by the binary when no hands are given.

use std::cmp::Ordering;

use tracing::{info, instrument, warn};

use crate::cards::{compare_hands, HandError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Check {
    pub name: &'static str,
    pub hand: &'static str,
    pub other: &'static str,
    pub expected: Ordering,
}

const fn beats(name: &'static str, hand: &'static str, other: &'static str) -> Check {
    Check {
        name,
        hand,
        other,
        expected: Ordering::Greater,
    }
}

const fn ties(name: &'static str, hand: &'static str, other: &'static str) -> Check {
    Check {
        name,
        hand,
        other,
        expected: Ordering::Equal,
    }
}

pub const CHECKS: &[Check] = &[
    beats("higher straight flush", "As Ks Qs Js 10s", "6s 5s 4s 3s 2s"),
    beats("higher four of a kind", "6c 6d 6s 6h 2c", "5s 5d 5c 5h Ah"),
    beats("higher full house triplet", "3c 3d 3s 2h 2s", "2c 2d 2s Ah As"),
    beats("higher flush", "9s 8s 6s 4s 2s", "9s 7s 6s 4s 2s"),
    beats("higher straight", "Ah Kc Qd Jc 10h", "6s 5c 4c 3d 2h"),
    beats("six high straight over wheel", "6s 5c 4c 3d 2h", "5c 4c 3d 2h Ah"),
    beats("higher three of a kind", "7s 7c 7d 2h 3d", "6s 6c 6d Ah 2d"),
    beats("three of a kind kickers", "6s 6c 6d Ah 2d", "6s 6c 6d Qh Jd"),
    beats("higher two pair", "6s 6c 2h 2s 9d", "5s 5c 4h 4s 9d"),
    beats("higher pair", "6s 6c 2h 3s 9d", "5s 5c 4h 6s 9d"),
    beats("high card kickers", "As 7d 5c 4d 3h", "As 7d 5c 4d 2h"),
    beats("straight flush over four of a kind", "As Ks Qs Js 10s", "6c 6d 6s 6h 2c"),
    beats("four of a kind over full house", "6c 6d 6s 6h 2c", "3c 3d 3s 2h 2s"),
    beats("full house over flush", "3c 3d 3s 2h 2s", "9s 8s 6s 4s 2s"),
    beats("flush over straight", "9s 8s 6s 4s 2s", "Ah Kc Qd Jc 10h"),
    beats("straight over three of a kind", "Ah Kc Qd Jc 10h", "7s 7c 7d 2h 3d"),
    beats("three of a kind over two pair", "7s 7c 7d 2h 3d", "6s 6c 2h 2s 9d"),
    beats("two pair over pair", "6s 6c 2h 2s 9d", "6s 6c 2h 3s 9d"),
    beats("pair over high card", "6s 6c 2h 3s 9d", "As 7d 5c 4d 3h"),
    ties("same straight flush", "2d 3d 4d 5d 6d", "6d 5d 4d 3d 2d"),
];

/// The result of running one [`Check`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub check: Check,
    pub actual: Result<Ordering, HandError>,
}

impl CheckOutcome {
    pub fn passed(&self) -> bool {
        self.actual.as_ref() == Ok(&self.check.expected)
    }
}

impl Check {
    pub fn run(self) -> CheckOutcome {
        CheckOutcome {
            check: self,
            actual: compare_hands(self.hand, self.other),
        }
    }
}

/// Runs every check in [`CHECKS`] and logs each outcome.
#[instrument(skip_all, fields(checks = CHECKS.len()))]
pub fn run_battery() -> Vec<CheckOutcome> {
    let outcomes: Vec<CheckOutcome> = CHECKS.iter().map(|check| check.run()).collect();

    for outcome in &outcomes {
        let check = &outcome.check;
        match &outcome.actual {
            _ if outcome.passed() => info!(name = check.name, "Check passed"),
            Ok(ordering) => warn!(
                name = check.name,
                hand = check.hand,
                other = check.other,
                expected = ?check.expected,
                actual = ?ordering,
                "Check failed"
            ),
            Err(error) => warn!(name = check.name, %error, "Check could not build hands"),
        }
    }

    let failed = outcomes.iter().filter(|o| !o.passed()).count();
    info!(passed = outcomes.len() - failed, failed, "Battery finished");

    outcomes
}
