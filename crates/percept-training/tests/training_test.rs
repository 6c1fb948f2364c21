//! Integration tests for the reset-by-error perceptron trainer.

use percept_training::{
    train, train_function, Bipolar, HyperParams, TargetFunction, Termination, TraceLanguage, TrainingExample,
    TruthTable, WeightVector, DEFAULT_MAX_UPDATES,
};

const BIASES: [Bipolar; 2] = [Bipolar::Positive, Bipolar::Negative];

fn weight_grid() -> Vec<WeightVector> {
    let values = [-5.0, -2.5, -0.7, 0.0, 1.3, 2.5, 5.0];
    let mut grid = Vec::new();
    for &w0 in &values {
        for &w1 in &values {
            for &w2 in &values {
                grid.push(WeightVector::new(w0, w1, w2));
            }
        }
    }
    grid
}

/// Does `weights` classify every row of `table` correctly?
fn separates(table: &TruthTable, weights: &WeightVector) -> bool {
    table.iter().all(|row| {
        let net = weights.net(row.inputs());
        percept_training::bipolar_step(net) == row.desired
    })
}

#[test]
fn test_trace_matches_reference_for_and() {
    let params = HyperParams::new(0.1, WeightVector::zeros());
    let outcome = train_function(TargetFunction::And, Bipolar::Positive, &params, TraceLanguage::English);
    assert_eq!(outcome.trace, include_str!("fixtures/and_positive_bias_default.en.txt"));
}

#[test]
fn test_trace_matches_reference_for_or_in_both_languages() {
    let params = HyperParams::new(0.5, WeightVector::new(1.0, 1.0, 1.0));

    let english = train_function(TargetFunction::Or, Bipolar::Negative, &params, TraceLanguage::English);
    assert_eq!(english.trace, include_str!("fixtures/or_negative_bias_alpha_half.en.txt"));

    let spanish = train_function(TargetFunction::Or, Bipolar::Negative, &params, TraceLanguage::Spanish);
    assert_eq!(spanish.trace, include_str!("fixtures/or_negative_bias_alpha_half.es.txt"));

    assert_eq!(english.update_count, spanish.update_count);
    assert_eq!(english.final_weights, spanish.final_weights);
}

#[test]
fn test_training_is_deterministic() {
    let params = HyperParams::new(0.37, WeightVector::new(2.0, -3.0, 0.25));
    let first = train_function(TargetFunction::And, Bipolar::Negative, &params, TraceLanguage::English);
    let second = train_function(TargetFunction::And, Bipolar::Negative, &params, TraceLanguage::English);
    assert_eq!(first, second);
}

#[test]
fn test_and_and_or_converge_from_bounded_starts() {
    let alphas = [0.05, 0.1, 0.5, 1.0, 2.0];
    for function in TargetFunction::ALL {
        for bias in BIASES {
            let table = TruthTable::build(function, bias);
            for &alpha in &alphas {
                for start in weight_grid() {
                    let params = HyperParams::new(alpha, start);
                    let outcome = train(function.name(), &table, &params, TraceLanguage::English);

                    assert_eq!(
                        outcome.termination,
                        Termination::Converged,
                        "{function} bias={bias} alpha={alpha} start={start}"
                    );
                    assert!(outcome.update_count <= DEFAULT_MAX_UPDATES);
                    assert_eq!(outcome.iterations, outcome.update_count + 1);
                    assert!(separates(&table, &outcome.final_weights));
                }
            }
        }
    }
}

#[test]
fn test_retraining_from_converged_weights_is_a_no_op() {
    for function in TargetFunction::ALL {
        for bias in BIASES {
            let params = HyperParams::new(0.3, WeightVector::new(0.4, -1.1, 0.9));
            let first = train_function(function, bias, &params, TraceLanguage::English);
            assert!(first.converged());

            let again = HyperParams::new(0.3, first.final_weights);
            let second = train_function(function, bias, &again, TraceLanguage::English);
            assert_eq!(second.update_count, 0);
            assert_eq!(second.iterations, 1);
            assert_eq!(second.final_weights, first.final_weights);
            assert_eq!(second.trace.matches("Result: Correct").count(), 4);
        }
    }
}

#[test]
fn test_update_count_never_exceeds_cap() {
    use Bipolar::{Negative as N, Positive as P};
    let xnor = TruthTable::from_rows([
        TrainingExample::new(N, P, P, P),
        TrainingExample::new(N, P, N, N),
        TrainingExample::new(N, N, P, N),
        TrainingExample::new(N, N, N, P),
    ]);

    for cap in [1, 2, 7, 100, 1_000] {
        let params = HyperParams::new(0.2, WeightVector::zeros()).with_max_updates(cap);
        let outcome = train("XNOR", &xnor, &params, TraceLanguage::English);
        assert_eq!(outcome.termination, Termination::CapReached);
        assert_eq!(outcome.update_count, cap);
    }

    for cap in [1, 2, 3, 50] {
        let params = HyperParams::new(0.1, WeightVector::new(-5.0, 5.0, -5.0)).with_max_updates(cap);
        let outcome = train_function(TargetFunction::Or, Bipolar::Positive, &params, TraceLanguage::English);
        assert!(outcome.update_count <= cap);
    }
}

#[test]
fn test_every_update_restarts_from_first_example() {
    let params = HyperParams::new(0.1, WeightVector::zeros());
    let outcome = train_function(TargetFunction::And, Bipolar::Positive, &params, TraceLanguage::English);

    let lines: Vec<&str> = outcome.trace.lines().collect();
    for (idx, line) in lines.iter().enumerate() {
        if line.starts_with("==> Start of iteration No.") {
            assert!(lines[idx + 1].starts_with("Example 1: "), "scan did not restart after: {line}");
        }
    }
}

#[test]
fn test_outcome_serializes_for_json_output() {
    let params = HyperParams::new(0.5, WeightVector::new(1.0, 1.0, 1.0));
    let outcome = train_function(TargetFunction::Or, Bipolar::Negative, &params, TraceLanguage::English);

    let value = serde_json::to_value(&outcome).unwrap();
    assert_eq!(value["function_name"], "OR");
    assert_eq!(value["update_count"], 2);
    assert_eq!(value["iterations"], 3);
    assert_eq!(value["termination"], "converged");
    assert_eq!(value["final_weights"]["w0"], -1.0);
}
