// ABOUTME: Serialization contract tests for evaluation results and supporting types
// ABOUTME: Frontends consume these JSON shapes for score displays and rule traces
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FuzzyStride

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fuzzystride::{InputField, RunInput, TrainingEvaluator, TrainingStatus};

#[test]
fn test_evaluation_result_serializes_the_full_trace() {
    let engine = TrainingEvaluator::standard().unwrap();
    let result = engine
        .evaluate(RunInput {
            heart_rate: 150.0,
            pacing: 5.0,
            distance: 15.0,
        })
        .unwrap();

    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(value["status"], "normal");
    assert!((value["crisp_value"].as_f64().unwrap() - 0.55).abs() < 1e-9);

    assert_eq!(value["input"]["heart_rate"], 150.0);
    assert_eq!(value["input"]["pacing"], 5.0);
    assert_eq!(value["input"]["distance"], 15.0);

    let fired = value["fired_rules"].as_array().unwrap();
    assert_eq!(fired.len(), 1);
    assert_eq!(fired[0]["index"], 14);
    assert!((fired[0]["strength"].as_f64().unwrap() - 0.5).abs() < 1e-12);
    assert!(fired[0]["description"]
        .as_str()
        .unwrap()
        .starts_with("Rule 14: IF Distance is Medium"));

    assert!((value["peaks"]["normal"].as_f64().unwrap() - 0.5).abs() < 1e-12);
    assert_eq!(value["peaks"]["overtraining"], 0.0);

    assert_eq!(value["aggregate"].as_array().unwrap().len(), 101);
}

#[test]
fn test_run_input_round_trips() {
    let input = RunInput {
        heart_rate: 171.5,
        pacing: 4.2,
        distance: 21.1,
    };
    let json = serde_json::to_string(&input).unwrap();
    let back: RunInput = serde_json::from_str(&json).unwrap();
    assert_eq!(back, input);
}

#[test]
fn test_run_input_deserializes_from_plain_json() {
    let input: RunInput =
        serde_json::from_str(r#"{"heart_rate":150,"pacing":5.0,"distance":15}"#).unwrap();
    assert_eq!(input.heart_rate, 150.0);
    assert_eq!(input.pacing, 5.0);
    assert_eq!(input.distance, 15.0);
}

#[test]
fn test_enums_serialize_snake_case() {
    assert_eq!(
        serde_json::to_string(&TrainingStatus::Undertraining).unwrap(),
        "\"undertraining\""
    );
    assert_eq!(
        serde_json::to_string(&InputField::HeartRate).unwrap(),
        "\"heart_rate\""
    );
    let status: TrainingStatus = serde_json::from_str("\"overtraining\"").unwrap();
    assert_eq!(status, TrainingStatus::Overtraining);
}
