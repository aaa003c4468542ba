//! Tests for the eleven-test validator and generator
//!
//! The validator and the generator encode the rule independently; the
//! cross-check section asserts they agree.

use elfproef::core::checksum::{
    Body, BodyError, Bsn, BsnError, Resolution, check_generated, complete, generate, generate_with, parse_digits,
    validate, weighted_sum,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::common::{FAILING, VALID};

// =============================================================================
// Validator
// =============================================================================

#[test]
fn valid_fixtures_pass() {
    for (candidate, sum) in VALID {
        assert!(validate(candidate), "{candidate} should be valid");
        assert_eq!(weighted_sum(&parse_digits(candidate).unwrap()), *sum);
    }
}

#[test]
fn failing_fixtures_fail_with_hand_computed_sum() {
    for (candidate, sum, remainder) in FAILING {
        assert!(!validate(candidate), "{candidate} should be invalid");
        assert_eq!(
            Bsn::parse(candidate),
            Err(BsnError::Checksum {
                sum: *sum,
                remainder: *remainder
            })
        );
    }
}

#[test]
fn ascending_digits_match_manual_outcome() {
    let outcome = 9 * 1 + 8 * 2 + 7 * 3 + 6 * 4 + 5 * 5 + 4 * 6 + 3 * 7 + 2 * 8 + (-1) * 9;
    assert_eq!(outcome, 147);
    assert_eq!(validate("123456789"), outcome % 11 == 0);
}

#[test]
fn all_zero_rejected_at_every_accepted_length() {
    assert!(!validate("0000000"));
    assert!(!validate("00000000"));
    assert!(!validate("000000000"));
}

#[test]
fn lengths_six_and_ten_always_rejected() {
    // Digit content that would otherwise pass
    assert!(!validate("123456"));
    assert!(!validate("1234567820"));
    assert!(!validate("000000"));
    assert!(!validate("0000000000"));
}

#[test]
fn validate_is_idempotent_and_leaves_input_alone() {
    let candidate = String::from("111222333");
    let first = validate(&candidate);
    let second = validate(&candidate);
    assert_eq!(first, second);
    assert_eq!(candidate, "111222333");
}

#[test]
fn parse_and_validate_agree_on_fixtures() {
    let candidates = VALID
        .iter()
        .map(|(c, _)| *c)
        .chain(FAILING.iter().map(|(c, _, _)| *c))
        .chain(["", "abc", "12345678a", " 123456782", "0000000"]);
    for candidate in candidates {
        assert_eq!(validate(candidate), Bsn::parse(candidate).is_ok(), "{candidate:?}");
    }
}

// =============================================================================
// Generator
// =============================================================================

#[test]
fn generated_shape() {
    for _ in 0..1_000 {
        let bsn = generate();
        assert_eq!(bsn.len(), 9, "{bsn}");
        assert!(bsn.bytes().all(|b| b.is_ascii_digit()), "{bsn}");
        assert!(check_generated(&bsn), "{bsn} fails the generator's own rule");
    }
}

#[test]
fn plain_path_fixture() {
    let generated = complete(Body::new([1, 1, 1, 1, 1, 1, 1, 1]).unwrap());
    // 9+8+7+6+5+4+3+2 = 44, 44 % 11 = 0
    assert_eq!(generated.resolution, Resolution::Direct);
    assert_eq!(generated.check, 0);
    assert_eq!(generated.to_string(), "111111110");
    assert!(!generated.was_perturbed());
}

#[test]
fn remainder_ten_fixture() {
    // 44 + 2*(6-1) = 54, 54 % 11 = 10
    let generated = complete(Body::new([1, 1, 1, 1, 1, 1, 1, 6]).unwrap());
    assert!(generated.was_perturbed());
    assert_eq!(generated.body[7], 7);
    assert_eq!(generated.check, 1);
}

#[test]
fn remainder_ten_with_nine_fixture() {
    // 4*9 + (8+7+6+5+4+3) + 9*2 = 87, 87 % 11 = 10
    let generated = complete(Body::new([4, 1, 1, 1, 1, 1, 1, 9]).unwrap());
    assert_eq!(generated.resolution, Resolution::Perturbed { original: 9 });
    assert_eq!(generated.body[7], 8);
    assert_eq!(generated.check, 8);
}

#[test]
fn bodies_outside_the_digit_range_never_reach_the_generator() {
    // 2*3 + 255*2 = 516, 516 % 11 = 10; nudging 255 would overflow
    assert!(matches!(
        Body::new([0, 0, 0, 0, 0, 0, 2, 255]),
        Err(BodyError::DigitOutOfRange { digit: 255, .. })
    ));
    // A two-digit value would print a 10-character identifier
    assert!(matches!(
        Body::new([0, 0, 0, 0, 0, 0, 0, 12]),
        Err(BodyError::DigitOutOfRange { position: 7, digit: 12 })
    ));
}

#[test]
fn all_zero_body_is_rejected_before_completion() {
    // Would complete to 000000000, which only the generator's own rule accepts
    assert!(check_generated("000000000"));
    assert!(!validate("000000000"));
    assert_eq!(Body::new([0; 8]), Err(BodyError::AllZero));
}

#[test]
fn zero_digits_are_allowed_in_a_body() {
    let generated = complete(Body::new([0, 0, 0, 0, 0, 0, 0, 1]).unwrap());
    assert_eq!(generated.to_string(), "000000012");
    assert!(validate(&generated.to_string()));
}

// =============================================================================
// Cross-check between the two conventions
// =============================================================================

#[test]
fn validator_accepts_large_generated_sample() {
    let mut rng = StdRng::seed_from_u64(0x000e_1f9f);
    let mut not_fixed = 0;
    for _ in 0..100_000 {
        let bsn = generate_with(&mut rng);
        assert!(check_generated(&bsn), "{bsn}");
        assert!(validate(&bsn), "validator rejects generated {bsn}");
        assert!(Bsn::parse(&bsn).is_ok(), "parse rejects generated {bsn}");
        let body: [u8; 8] = std::array::from_fn(|i| bsn.as_bytes()[i] - b'0');
        if complete(Body::new(body).unwrap()).to_string() != bsn {
            not_fixed += 1;
        }
    }
    // Completing an already perturbed body takes the direct path, so every
    // identifier must be a fixed point of `complete`.
    assert_eq!(not_fixed, 0);
}

#[test]
fn generator_rule_and_validator_agree_on_nine_digits() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..10_000 {
        let digits: String = (0..9)
            .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
            .collect();
        if digits == "000000000" {
            continue;
        }
        assert_eq!(check_generated(&digits), validate(&digits), "{digits}");
    }
}
