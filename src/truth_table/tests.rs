//! Tests for truth-table construction

use super::*;

#[test]
fn test_from_rows_any_order() {
    let ordered =
        TruthTable::from_rows([("00", '0'), ("01", '1'), ("10", '1'), ("11", '0')]).unwrap();
    let shuffled =
        TruthTable::from_rows([("11", '0'), ("01", '1'), ("00", '0'), ("10", '1')]).unwrap();
    assert_eq!(ordered, shuffled);
    assert_eq!(ordered.outputs(), &[false, true, true, false]);
}

#[test]
fn test_from_rows_owned_patterns() {
    let rows: Vec<(String, char)> = vec![("0".to_string(), '1'), ("1".to_string(), '0')];
    let table = TruthTable::from_rows(rows).unwrap();
    assert_eq!(table.num_vars(), 1);
    assert_eq!(table.minterms().collect::<Vec<_>>(), vec![0]);
}

#[test]
fn test_from_rows_errors() {
    let empty: [(&str, char); 0] = [];
    assert_eq!(TruthTable::from_rows(empty), Err(TruthTableError::Empty));

    assert_eq!(
        TruthTable::from_rows([("00", '0'), ("1", '1')]),
        Err(TruthTableError::InconsistentWidth {
            row: 1,
            expected: 2,
            found: 1
        })
    );

    assert_eq!(
        TruthTable::from_rows([("0", '0'), ("x", '1')]),
        Err(TruthTableError::InvalidBit {
            row: 1,
            column: 0,
            value: 'x'
        })
    );

    // The output bit is the last column
    assert_eq!(
        TruthTable::from_rows([("0", '0'), ("1", '2')]),
        Err(TruthTableError::InvalidBit {
            row: 1,
            column: 1,
            value: '2'
        })
    );

    assert_eq!(
        TruthTable::from_rows([("0", '0'), ("0", '1')]),
        Err(TruthTableError::DuplicatePattern {
            pattern: "0".to_string()
        })
    );

    assert_eq!(
        TruthTable::from_rows([("00", '0'), ("01", '1'), ("11", '1')]),
        Err(TruthTableError::MissingPattern {
            pattern: "10".to_string()
        })
    );

    assert!(matches!(
        TruthTable::from_rows([("", '0')]),
        Err(TruthTableError::VariableCount { count: 0, .. })
    ));
}

#[test]
fn test_from_outputs() {
    let table = TruthTable::from_outputs(3, &[false; 8]).unwrap();
    assert_eq!(table.num_rows(), 8);

    assert_eq!(
        TruthTable::from_outputs(2, &[true, false, true]),
        Err(TruthTableError::RowCount {
            num_vars: 2,
            expected: 4,
            found: 3
        })
    );
    assert!(matches!(
        TruthTable::from_outputs(0, &[true]),
        Err(TruthTableError::VariableCount { count: 0, max: 26 })
    ));
    assert!(matches!(
        TruthTable::from_outputs(27, &[]),
        Err(TruthTableError::VariableCount { count: 27, .. })
    ));
}

#[test]
fn test_from_output_str() {
    let table = TruthTable::from_output_str("01101001").unwrap();
    assert_eq!(table.num_vars(), 3);
    assert_eq!(table.minterms().collect::<Vec<_>>(), vec![1, 2, 4, 7]);

    assert_eq!(TruthTable::from_output_str(""), Err(TruthTableError::Empty));
    assert!(matches!(
        TruthTable::from_output_str("011"),
        Err(TruthTableError::RowCount { found: 3, .. })
    ));
    // A single row means zero variables
    assert!(matches!(
        TruthTable::from_output_str("1"),
        Err(TruthTableError::VariableCount { count: 0, .. })
    ));
    assert!(matches!(
        TruthTable::from_output_str("01a1"),
        Err(TruthTableError::InvalidBit { row: 2, .. })
    ));
}

#[test]
fn test_from_packed() {
    // XOR: 000 011 101 110
    let table = TruthTable::from_packed("000011101110", 3).unwrap();
    assert_eq!(table.outputs(), &[false, true, true, false]);

    assert_eq!(
        TruthTable::from_packed("00001", 3),
        Err(TruthTableError::PackedLength {
            length: 5,
            row_width: 3
        })
    );
    assert!(matches!(
        TruthTable::from_packed("01", 1),
        Err(TruthTableError::VariableCount { count: 0, .. })
    ));
    assert_eq!(TruthTable::from_packed("", 3), Err(TruthTableError::Empty));
}

#[test]
fn test_from_fn() {
    let table = TruthTable::from_fn(2, |x| x[0] && !x[1]).unwrap();
    assert_eq!(table.minterms().collect::<Vec<_>>(), vec![2]);
    assert!(TruthTable::from_fn(0, |_| true).is_err());
}

#[test]
fn test_queries() {
    let table = TruthTable::from_output_str("0001").unwrap();
    assert_eq!(table.output(3), Some(true));
    assert_eq!(table.output(4), None);
    assert_eq!(table.pattern(2), vec![true, false]);
    assert_eq!(
        table.variables().map(|v| v.letter()).collect::<String>(),
        "AB"
    );

    let rows: Vec<(Vec<bool>, bool)> = table.rows().collect();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[3], (vec![true, true], true));
}

#[test]
fn test_constant_output() {
    assert_eq!(
        TruthTable::from_output_str("0000").unwrap().constant_output(),
        Some(false)
    );
    assert_eq!(
        TruthTable::from_output_str("11").unwrap().constant_output(),
        Some(true)
    );
    assert_eq!(
        TruthTable::from_output_str("0100").unwrap().constant_output(),
        None
    );
}

#[test]
fn test_display() {
    let table = TruthTable::from_output_str("0110").unwrap();
    assert_eq!(table.to_string(), "AB|Q\n00|0\n01|1\n10|1\n11|0\n");
}
