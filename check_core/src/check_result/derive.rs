//! Pairwise derivation: fill every missing representation from the ones
//! that were supplied. Supplied values are never overwritten.

use super::normalize::Normalized;
use super::unity::{comparison_unity_check, reciprocal};
use super::CheckResult;

pub(super) fn derive(input: &Normalized) -> CheckResult {
    let mut unity_check = input.unity_check;
    let mut factor_of_safety = input.factor_of_safety;
    let mut is_ok = input.is_ok;

    if let Some((provided, required)) = input.pair {
        let computed = comparison_unity_check(provided, required, input.operator);
        unity_check.get_or_insert(computed);
        factor_of_safety.get_or_insert(reciprocal(computed));
        is_ok.get_or_insert(input.operator.passes(computed));
    } else {
        match (unity_check, factor_of_safety) {
            (Some(uc), None) => factor_of_safety = Some(reciprocal(uc)),
            (None, Some(fos)) => unity_check = Some(reciprocal(fos)),
            _ => {}
        }
    }

    // No provided/required to give the operator meaning here.
    if is_ok.is_none() {
        is_ok = unity_check.map(|uc| uc <= 1.0);
    }

    CheckResult {
        provided: input.pair.map(|(provided, _)| provided),
        required: input.pair.map(|(_, required)| required),
        operator: input.operator,
        unity_check,
        factor_of_safety,
        is_ok,
    }
}
