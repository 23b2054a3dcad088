//! Answer verification
//!
//! Checks a candidate list of waits against its readings and reports the
//! first position where it goes wrong. The reference answer comes from
//! [`days_until_warmer`], so verification stays linear in the series length.

use crate::error::Violation;
use crate::finder::days_until_warmer;

/// Check that `answer` holds the correct wait for every reading in `temps`
///
/// Returns the violation at the lowest offending position, classified as
/// precisely as the answer allows.
pub fn verify<T: Ord>(temps: &[T], answer: &[usize]) -> Result<(), Violation> {
    if temps.len() != answer.len() {
        return Err(Violation::LengthMismatch {
            readings: temps.len(),
            answer: answer.len(),
        });
    }

    let expected = days_until_warmer(temps);
    let first_wrong = expected
        .iter()
        .zip(answer)
        .position(|(want, got)| want != got);

    match first_wrong {
        None => Ok(()),
        Some(index) => Err(classify(temps, index, answer[index], expected[index])),
    }
}

fn classify<T: Ord>(temps: &[T], index: usize, wait: usize, expected: usize) -> Violation {
    if wait == 0 {
        return Violation::MissedWarmer {
            index,
            warmer: index + expected,
            expected,
        };
    }

    let target = match index.checked_add(wait) {
        Some(target) if target < temps.len() => target,
        _ => return Violation::OutOfRange { index, wait },
    };

    if temps[target] <= temps[index] {
        return Violation::NotWarmer { index, target };
    }

    // The target is warmer but not the first warmer day.
    Violation::SkippedWarmer {
        index,
        earlier: index + expected,
        expected,
    }
}
