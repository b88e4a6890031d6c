//! Property-based tests using proptest.
//!
//! Sums must agree with plain integer arithmetic whether operands arrive as
//! numbers or as their decimal text.

use addend::*;
use proptest::prelude::*;

// Small enough that any six of them sum without overflow
fn small_int() -> impl Strategy<Value = i64> {
    -1_000_000_000_000i64..1_000_000_000_000i64
}

proptest! {
    #[test]
    fn pair_of_numbers_sums(a in small_int(), b in small_int()) {
        prop_assert_eq!(add([a, b]), Number::Int(a + b));
    }

    #[test]
    fn pair_of_numeric_strings_sums(a in small_int(), b in small_int()) {
        prop_assert_eq!(add([a.to_string(), b.to_string()]), Number::Int(a + b));
    }

    #[test]
    fn mixed_pair_sums(a in small_int(), b in small_int()) {
        prop_assert_eq!(add!(a, b.to_string()), Number::Int(a + b));
    }

    #[test]
    fn sequence_matches_running_total(xs in prop::collection::vec(small_int(), 0..6)) {
        let expected: i64 = xs.iter().sum();
        prop_assert_eq!(add(xs.clone()), Number::Int(expected));

        let as_text: Vec<String> = xs.iter().map(|x| x.to_string()).collect();
        prop_assert_eq!(add(as_text), Number::Int(expected));
    }

    #[test]
    fn sum_is_order_independent(xs in prop::collection::vec(small_int(), 0..6)) {
        let mut reversed = xs.clone();
        reversed.reverse();
        prop_assert_eq!(add(xs), add(reversed));
    }

    #[test]
    fn strict_and_lenient_agree_on_numeric_input(xs in prop::collection::vec(small_int(), 0..6)) {
        let strict = sum(xs.clone(), &SumContext::strict()).unwrap();
        prop_assert_eq!(strict, add(xs));
    }

    #[test]
    fn parsed_list_matches_direct_sum(xs in prop::collection::vec(small_int(), 0..6)) {
        let src = xs.iter().map(|x| x.to_string()).collect::<Vec<_>>().join(", ");
        let parsed = parse_operands(&src).unwrap();
        prop_assert_eq!(add(parsed), add(xs));
    }

    #[test]
    fn any_non_numeric_text_poisons_the_sum(
        xs in prop::collection::vec(small_int(), 0..4),
        junk in "[a-zA-Z]{1,8}",
    ) {
        prop_assume!(junk != "Infinity");
        let mut operands: Vec<Operand> = xs.into_iter().map(Operand::from).collect();
        operands.push(Operand::text(junk));
        prop_assert!(add(operands).is_nan());
    }
}
