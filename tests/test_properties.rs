//! Exhaustive property checks over small truth tables
//!
//! Every function of up to three variables is generated, simplified and
//! checked against its table by brute-force evaluation.

use sop_logic::{Expression, SimplifyConfig, TraceEntry, TruthTable};

/// Every truth table over `num_vars` variables
fn all_tables(num_vars: usize) -> impl Iterator<Item = TruthTable> {
    let rows = 1usize << num_vars;
    (0..1u64 << rows).map(move |bits| {
        let outputs: Vec<bool> = (0..rows).map(|row| (bits >> row) & 1 == 1).collect();
        TruthTable::from_outputs(num_vars, &outputs).unwrap()
    })
}

fn matches_table(expr: &Expression, table: &TruthTable) -> bool {
    table
        .outputs()
        .iter()
        .enumerate()
        .all(|(row, &output)| expr.evaluate_row(table.num_vars(), row) == output)
}

#[test]
fn test_generated_sop_is_exact() {
    for num_vars in 1..=3 {
        for table in all_tables(num_vars) {
            let sop = table.to_sop();
            assert!(matches_table(&sop, &table), "{}", table);

            let ones = table.minterms().count();
            if ones == 0 || ones == table.num_rows() {
                assert!(sop.is_constant());
            } else {
                assert_eq!(sop.num_terms(), ones);
                assert!(sop.terms().iter().all(|t| t.len() == num_vars));
            }
        }
    }
}

#[test]
fn test_simplification_is_sound() {
    for extended_catalog in [true, false] {
        let config = SimplifyConfig {
            extended_catalog,
            ..Default::default()
        };
        for num_vars in 1..=3 {
            for table in all_tables(num_vars) {
                let result = table.to_sop().simplify_with_config(&config);
                assert!(
                    matches_table(result.reduced(), &table),
                    "{} reduced to {}",
                    table,
                    result.reduced()
                );
                assert!(result.reached_fixed_point());
            }
        }
    }
}

#[test]
fn test_simplification_is_idempotent() {
    for table in all_tables(3) {
        let once = table.to_sop().simplify();
        let twice = once.reduced().simplify();
        assert_eq!(twice.reduced(), once.reduced(), "{}", table);
        if !once.reduced().is_constant() {
            assert_eq!(twice.passes(), 0, "{}", table);
        }
    }
}

#[test]
fn test_literal_count_never_grows() {
    for table in all_tables(3) {
        let result = table.to_sop().simplify();
        assert!(result.reduced().literal_count() <= result.original().literal_count());
        assert!(result.passes() <= result.original().literal_count());
        for entry in result.trace() {
            if let TraceEntry::Applied(record) = entry {
                assert!(record.produced.literal_count() < record.consumed.literal_count());
            }
        }
    }
}

#[test]
fn test_simplification_is_deterministic() {
    for table in all_tables(3).step_by(7) {
        let sop = table.to_sop();
        let first = sop.simplify();
        let second = sop.simplify();
        assert_eq!(first.reduced().to_string(), second.reduced().to_string());
        assert_eq!(first.passes(), second.passes());
        assert_eq!(first.log_lines(), second.log_lines());
    }
}

#[test]
fn test_two_variable_results_are_minimal() {
    // Every two-variable function has a minimal SOP of at most 4 literals
    for table in all_tables(2) {
        let result = table.to_sop().simplify();
        assert!(
            result.reduced().literal_count() <= 4,
            "{} reduced to {}",
            table,
            result.reduced()
        );
    }
}
