// Integration tests for the calculator engine

use proptest::prelude::*;
use rpnc::calculator::{CalcError, Calculator, Number};

fn calculator_with(literals: &[&str]) -> Calculator {
    let mut calc = Calculator::new();
    for literal in literals {
        calc.push(literal).expect("literal should parse");
    }
    calc
}

#[test]
fn test_pop_on_empty_stack_yields_zero() {
    let mut calc = Calculator::new();
    assert_eq!(calc.pop(), Number::Int(0));
    assert!(calc.is_empty());
}

#[test]
fn test_push_then_pop() {
    let mut calc = Calculator::new();
    calc.push("42").unwrap();
    assert_eq!(calc.pop(), Number::Int(42));
    assert_eq!(calc.pop(), Number::Int(0));
}

#[test]
fn test_arithmetic_table() {
    let cases = [
        ("5", "3", '+', Number::Int(8)),
        ("5", "3", '-', Number::Int(2)),
        ("5", "3", '*', Number::Int(15)),
        ("6", "2", '/', Number::Real(3.0)),
        ("2", "3", '^', Number::Int(8)),
        ("7", "3", '%', Number::Int(1)),
    ];

    for (a, b, op, expected) in cases {
        let mut calc = calculator_with(&[a, b]);
        calc.apply_operator(op).unwrap();
        assert_eq!(calc.stack(), &[expected], "{} {} {}", a, b, op);
    }
}

#[test]
fn test_division_by_zero_is_infinite() {
    let mut calc = calculator_with(&["1", "0"]);
    calc.apply_operator('/').unwrap();

    match calc.top() {
        Some(Number::Real(v)) => assert!(v.is_infinite() && v.is_sign_positive()),
        other => panic!("Expected +inf, got {:?}", other),
    }
}

#[test]
fn test_round_and_negate() {
    let mut calc = calculator_with(&["3.14159"]);
    calc.apply_operator('r').unwrap();
    assert_eq!(calc.stack(), &[Number::Int(3)]);

    calc.apply_operator('n').unwrap();
    assert_eq!(calc.stack(), &[Number::Int(-3)]);
}

#[test]
fn test_swap_exchanges_top_two() {
    let mut calc = calculator_with(&["1", "2", "3"]);
    calc.swap();
    assert_eq!(
        calc.stack(),
        &[Number::Int(1), Number::Int(3), Number::Int(2)]
    );

    let mut single = calculator_with(&["1"]);
    single.swap();
    assert_eq!(single.stack(), &[Number::Int(1)]);
}

#[test]
fn test_binary_operator_on_short_stack_is_refused() {
    for op in ['+', '-', '*', '/', '^', '%'] {
        for literals in [&[][..], &["5"][..]] {
            let mut calc = calculator_with(literals);
            let before = calc.stack().to_vec();

            let err = calc.apply_operator(op).unwrap_err();
            assert!(
                matches!(err, CalcError::InsufficientOperands { needed: 2, .. }),
                "{} on depth {}",
                op,
                literals.len()
            );
            assert!(!err.is_reportable());
            assert_eq!(calc.stack(), before.as_slice());
        }
    }
}

#[test]
fn test_push_variants() {
    let mut calc = Calculator::new();
    for literal in ["5", "3.14", "2+3j", "1e6", "-7", "0", "(1-2j)"] {
        calc.push(literal).unwrap();
    }

    assert_eq!(calc.depth(), 7);
    assert_eq!(calc.stack()[0], Number::Int(5));
    assert_eq!(calc.stack()[1], Number::Real(3.14));
    assert!(calc.stack()[2].is_complex());
    assert_eq!(calc.stack()[3], Number::Real(1e6));
    assert_eq!(calc.stack()[4], Number::Int(-7));
    assert_eq!(calc.stack()[5], Number::Int(0));
    assert_eq!(calc.stack()[6].to_string(), "(1-2j)");
}

#[test]
fn test_invalid_literals_leave_stack_unchanged() {
    let mut calc = calculator_with(&["1"]);
    for literal in ["invalid", "[1,2,3]", "", "1..2", "--3"] {
        let err = calc.push(literal).unwrap_err();
        assert!(matches!(err, CalcError::InvalidLiteral { .. }));
        assert!(err.is_reportable());
    }

    assert_eq!(calc.stack(), &[Number::Int(1)]);
    assert_eq!(calc.history().len(), 1);
}

#[test]
fn test_modulo_of_complex_keeps_operands() {
    let mut calc = calculator_with(&["2+3j", "2"]);
    let err = calc.apply_operator('%').unwrap_err();

    assert!(matches!(err, CalcError::UnsupportedOperands { op: '%', .. }));
    assert_eq!(calc.depth(), 2);
    assert_eq!(calc.top(), Some(&Number::Int(2)));
}

#[test]
fn test_round_with_precision_matches_stored_value() {
    let cases = [("4.35", '1', 4.3), ("0.15", '1', 0.1), ("2.675", '2', 2.67)];
    for (literal, places, expected) in cases {
        let mut calc = calculator_with(&[literal]);
        calc.push_char(places);
        calc.apply_operator('r').unwrap();
        assert_eq!(
            calc.stack(),
            &[Number::Real(expected)],
            "{} r{}",
            literal,
            places
        );
    }
}

#[test]
fn test_history_walks_back_and_forth() {
    let mut calc = calculator_with(&["1", "2.50", "3e2"]);

    calc.recall_previous();
    calc.recall_previous();
    assert_eq!(calc.buffer(), "2.50");

    calc.recall_previous();
    calc.recall_previous();
    assert_eq!(calc.buffer(), "1");

    calc.recall_next();
    assert_eq!(calc.buffer(), "2.50");
}

proptest! {
    #[test]
    fn prop_integer_arithmetic_matches_i64(a in -1_000_000i64..1_000_000, b in -1_000_000i64..1_000_000) {
        for (op, expected) in [('+', a + b), ('-', a - b), ('*', a * b)] {
            let mut calc = Calculator::new();
            calc.push(&a.to_string()).unwrap();
            calc.push(&b.to_string()).unwrap();
            calc.apply_operator(op).unwrap();
            prop_assert_eq!(calc.stack(), &[Number::Int(expected)]);
        }
    }

    #[test]
    fn prop_failed_push_is_a_no_op(depth in 0usize..5, word in "[k-mo-z]{1,8}") {
        let mut calc = Calculator::new();
        for n in 0..depth {
            calc.push(&n.to_string()).unwrap();
        }
        let before = calc.stack().to_vec();

        prop_assert!(calc.push(&word).is_err());
        prop_assert_eq!(calc.stack(), before.as_slice());
        prop_assert_eq!(calc.history().len(), depth);
    }

    #[test]
    fn prop_extra_pops_yield_zero(values in proptest::collection::vec(-100i64..100, 0..6)) {
        let mut calc = Calculator::new();
        for v in &values {
            calc.push(&v.to_string()).unwrap();
        }
        for v in values.iter().rev() {
            prop_assert_eq!(calc.pop(), Number::Int(*v));
        }
        prop_assert_eq!(calc.pop(), Number::Int(0));
    }

    #[test]
    fn prop_recall_returns_literal_text(v in -1.0e6f64..1.0e6) {
        let text = format!("{:.3}", v);
        let mut calc = Calculator::new();
        calc.push(&text).unwrap();
        calc.recall_previous();
        prop_assert_eq!(calc.buffer(), text.as_str());
    }
}
