//! Serialization of expressions and results

#![cfg(feature = "serde")]

use sop_logic::{minimize_truth_table, simplify, Expression, SimplifyConfig, TruthTable};

#[test]
fn test_expression_as_wire_string() {
    let expr = Expression::parse("A#B+AB#").unwrap();
    assert_eq!(serde_json::to_string(&expr).unwrap(), "\"A#B+AB#\"");

    let back: Expression = serde_json::from_str("\"A#B+AB#\"").unwrap();
    assert_eq!(back, expr);
}

#[test]
fn test_malformed_expression_is_rejected() {
    assert!(serde_json::from_str::<Expression>("\"A++B\"").is_err());
}

#[test]
fn test_simplification_fields() {
    let result = simplify("AB#+AB+A#B").unwrap();
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["original"], "AB#+AB+A#B");
    assert_eq!(value["reduced"], "A+B");
    assert_eq!(value["passes"], 2);
    assert_eq!(value["reached_fixed_point"], true);
    assert_eq!(
        value["trace"][0]["applied"]["identity"],
        "complement-pair-merge"
    );
}

#[test]
fn test_minimized_round_trip() {
    let table = TruthTable::from_output_str("0000").unwrap();
    let result = minimize_truth_table(&table, &SimplifyConfig::default());
    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"constant\":false"));

    let back: sop_logic::Minimized = serde_json::from_str(&json).unwrap();
    assert_eq!(back, result);
}
