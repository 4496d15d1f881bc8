//! Contract tests for the expansion queries.
//!
//! These pin the observable behavior external callers rely on: the worked
//! scenarios (sevenths, sixths), group structure for prime and composite
//! denominators, ordering, and input rejection.

use reptend_engine::{
    compute_expansions, compute_single_expansion, divide, rotate, EngineError,
};

#[test]
fn one_seventh_is_the_canonical_cycle() {
    let record = compute_single_expansion(1, 7).unwrap();
    assert_eq!(record.digits, "142857");
    assert_eq!(record.position, 1);
    assert_eq!(record.cycle_start, Some(1));
}

#[test]
fn two_sevenths_is_a_rotation_of_the_canonical_cycle() {
    let record = compute_single_expansion(2, 7).unwrap();
    assert_eq!(record.digits, "285714");
    assert_eq!(record.position, 3);
    assert_eq!(rotate("142857", record.position).unwrap(), record.digits);
}

#[test]
fn one_sixth_repeats_from_its_second_digit() {
    let record = compute_single_expansion(1, 6).unwrap();
    assert_eq!(record.digits, "16");
    assert_eq!(record.cycle_start, Some(2));
}

#[test]
fn halves_and_fifths_terminate_with_a_single_digit() {
    for denominator in [2u64, 5] {
        let record = compute_single_expansion(1, denominator).unwrap();
        assert_eq!(record.digits.len(), 1);
        assert_eq!(record.cycle_start, None);
    }
}

#[test]
fn full_reptend_prime_yields_one_group_of_all_rotations() {
    // 10 is a primitive root mod 17: one 16-digit cycle covers all numerators.
    let expansions = compute_expansions(17, None).unwrap();
    assert!(expansions.prime);
    assert_eq!(expansions.by_expansion.len(), 1);
    let (digits, members) = expansions.by_expansion.iter().next().unwrap();
    assert_eq!(digits.len(), 16);
    assert_eq!(members.len(), 16);

    // Positions are a permutation of 1..=16: sixteen distinct rotations.
    let mut positions: Vec<usize> = members.iter().map(|m| m.position).collect();
    positions.sort_unstable();
    assert_eq!(positions, (1..=16).collect::<Vec<usize>>());
}

#[test]
fn forty_firsts_partition_into_eight_orbits_of_five() {
    // 10 has multiplicative order 5 mod 41, so the 40 numerators split into
    // eight groups of five 5-digit cycles.
    let expansions = compute_expansions(41, None).unwrap();
    assert!(expansions.prime);
    assert_eq!(expansions.by_expansion.len(), 8);
    let mut total = 0usize;
    for (digits, members) in &expansions.by_expansion {
        assert_eq!(digits.len(), 5);
        assert_eq!(members.len(), 5);
        total += members.len();
    }
    assert_eq!(total, 40);
    assert_eq!(expansions.by_numerator[&1].digits, "02439");
}

#[test]
fn composite_denominator_groups_have_position_one() {
    let expansions = compute_expansions(6, None).unwrap();
    assert!(!expansions.prime);
    assert!(expansions.by_expansion.len() > 1);
    for members in expansions.by_expansion.values() {
        for member in members {
            assert_eq!(member.position, 1);
        }
    }
}

#[test]
fn prime_group_sizes_sum_to_denominator_minus_one() {
    for denominator in [3u64, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41] {
        let expansions = compute_expansions(denominator, None).unwrap();
        let total: usize = expansions
            .by_expansion
            .values()
            .map(|members| members.len())
            .sum();
        assert_eq!(total, (denominator - 1) as usize, "denominator {denominator}");
    }
}

#[test]
fn every_member_rotation_matches_direct_division() {
    let expansions = compute_expansions(13, None).unwrap();
    for (digits, members) in &expansions.by_expansion {
        for member in members {
            let rotated = rotate(digits, member.position).unwrap();
            let direct = divide(member.numerator, 13).unwrap();
            assert_eq!(rotated, direct.digits, "numerator {}", member.numerator);
        }
    }
}

#[test]
fn rotations_within_a_group_are_distinct() {
    let expansions = compute_expansions(7, None).unwrap();
    let (digits, members) = expansions.by_expansion.iter().next().unwrap();
    let mut rotations: Vec<String> = members
        .iter()
        .map(|m| rotate(digits, m.position).unwrap())
        .collect();
    rotations.sort();
    rotations.dedup();
    assert_eq!(rotations.len(), members.len());
}

#[test]
fn grouping_is_idempotent() {
    let first = compute_expansions(123, None).unwrap();
    let second = compute_expansions(123, None).unwrap();
    assert_eq!(first, second);
}

#[test]
fn explicit_numerators_restrict_the_result() {
    // The group seed is the smallest requested numerator, so 3 leads its
    // own canonical sequence and 5 is a rotation of it.
    let expansions = compute_expansions(7, Some(&[5, 3])).unwrap();
    assert_eq!(expansions.by_numerator.len(), 2);
    assert_eq!(expansions.by_numerator[&3].digits, "428571");
    assert_eq!(expansions.by_numerator[&3].position, 1);
    assert_eq!(expansions.by_numerator[&5].digits, "428571");
    assert_eq!(expansions.by_numerator[&5].expansion, "714285");
}

#[test]
fn invalid_denominators_are_rejected() {
    assert_eq!(
        compute_expansions(1, None).unwrap_err(),
        EngineError::DenominatorTooSmall(1)
    );
    assert_eq!(
        compute_expansions(0, None).unwrap_err(),
        EngineError::DenominatorTooSmall(0)
    );
}

#[test]
fn out_of_range_numerators_are_rejected_not_coerced() {
    assert_eq!(
        compute_expansions(7, Some(&[1, 9])).unwrap_err(),
        EngineError::NumeratorOutOfRange {
            numerator: 9,
            denominator: 7
        }
    );
    assert_eq!(
        compute_expansions(7, Some(&[0])).unwrap_err(),
        EngineError::NumeratorOutOfRange {
            numerator: 0,
            denominator: 7
        }
    );
}
