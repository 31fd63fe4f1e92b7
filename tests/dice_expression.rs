use dice_expression::*;
use rand::{rngs::StdRng, SeedableRng};

#[test]
fn test_bounds_of_mixed_expression() {
    let expr = build("2d20 - 7 + 9").unwrap();
    assert_eq!(expr.min(), 4);
    assert_eq!(expr.max(), 42);
}

#[test]
fn test_constant_only_roll() {
    let mut expr = build("1000 - 200 - 20").unwrap();
    assert_eq!(
        expr.roll(),
        RollResult {
            roll: 780,
            dice: vec![1000, -200, -20]
        }
    );
}

#[test]
fn test_per_term_values() {
    let mut expr = build("1 - 2D6 + 20").unwrap();
    for _ in 0..100 {
        let result = expr.roll();
        assert_eq!(result.dice.len(), 3);
        assert_eq!(result.dice[0], 1);
        assert!((-12..=-2).contains(&result.dice[1]));
        assert_eq!(result.dice[2], 20);
        assert_eq!(result.roll, result.dice.iter().sum::<Int>());
    }
}

#[test]
fn test_invalid_expression() {
    let err = build("ssss").unwrap_err();
    assert!(matches!(err, Error::InvalidExpression { ref input, .. } if input == "ssss"));
    assert!(err.to_string().contains("'ssss'"));
}

#[test]
fn test_missing_input() {
    assert_eq!(build("").unwrap_err(), Error::MissingInput);
    assert_eq!(
        DiceExpression::from_input(None).unwrap_err(),
        Error::MissingInput
    );
    assert_eq!(
        build("").unwrap_err().to_string(),
        "the input expression has not been passed"
    );
}

#[cfg(feature = "serde")]
#[test]
fn test_invalid_type() {
    let err = DiceExpression::from_json(&serde_json::json!(456)).unwrap_err();
    assert_eq!(err, Error::InvalidType { found: "number" });
}

#[test]
fn test_zero_dice_are_accepted() {
    let mut expr = build("0d6 + 3").unwrap();
    assert_eq!((expr.min(), expr.max()), (3, 3));
    assert_eq!(
        expr.roll(),
        RollResult {
            roll: 3,
            dice: vec![0, 3]
        }
    );
}

#[test]
fn test_single_sided_die() {
    let mut expr = build("1d1").unwrap();
    assert_eq!(expr.evaluate(), 1);
    assert_eq!((expr.min(), expr.max()), (1, 1));
}

#[test]
fn test_d6_range() {
    let mut expr = build("1d6").unwrap();
    for _ in 0..1000 {
        assert!((1..=6).contains(&expr.evaluate()));
    }
}

#[test]
fn test_evaluate_constants() {
    assert_eq!(build("7-4").unwrap().evaluate(), 3);
}

#[test]
fn test_seeded_roller_is_reproducible() {
    let mut a = DiceExpression::with_roller("2d10 + d6 - 7 + 2", StdRng::seed_from_u64(9)).unwrap();
    let mut b = DiceExpression::with_roller("2d10 + d6 - 7 + 2", StdRng::seed_from_u64(9)).unwrap();
    let a: Vec<_> = (0..50).map(|_| a.evaluate()).collect();
    let b: Vec<_> = (0..50).map(|_| b.evaluate()).collect();
    assert_eq!(a, b);
    assert!(a.iter().all(|x| (-2..=21).contains(x)));
}

#[test]
fn test_percentile_dice() {
    let mut expr = build("d%").unwrap();
    assert_eq!((expr.min(), expr.max()), (1, 100));
    assert_eq!(expr.terms()[0].sides(), 100);
    assert!((1..=100).contains(&expr.evaluate()));
}

#[test]
fn test_display_is_normalized() {
    let expr = build(" 2d10 + D6 -  7+2 ").unwrap();
    assert_eq!(expr.to_string(), "2d10+1d6-7+2");
}
