//! End-to-end tests from sensor packages to formatted summaries.

use std::fs;
use std::process;

use workouts::{
    SensorPackage, Training, WorkoutError, WorkoutKind, config::OutputFormat, demo_packages,
    load_packages, read_package, render, render_all, summarize, summarize_all,
};

#[test]
fn demo_packages_produce_reference_messages() {
    let messages: Vec<String> = summarize_all(&demo_packages())
        .into_iter()
        .map(|result| result.expect("demo package should be valid").message())
        .collect();

    assert_eq!(
        messages,
        vec![
            "Training type: Swimming; Duration: 1.000 h.; Distance: 0.994 km; \
             Avg. speed: 1.000 km/h; Calories burned: 336.000."
                .to_string(),
            "Training type: Running; Duration: 1.000 h.; Distance: 9.750 km; \
             Avg. speed: 9.750 km/h; Calories burned: 699.750."
                .to_string(),
            "Training type: SportsWalking; Duration: 1.000 h.; Distance: 5.850 km; \
             Avg. speed: 5.850 km/h; Calories burned: 157.500."
                .to_string(),
        ]
    );
}

#[test]
fn summary_is_stable_across_calls() {
    let workout = read_package("WLK", &[12000.0, 1.25, 82.5, 176.0]).unwrap();
    let first = workout.summary();
    let second = workout.summary();
    assert_eq!(first, second);
    assert_eq!(first.message(), second.message());
}

#[test]
fn malformed_codes_are_unknown_kinds() {
    for code in ["", "swm", "SWIM", "RUN ", "W L K", "123"] {
        assert_eq!(
            summarize(code, &[1.0, 1.0, 1.0]),
            Err(WorkoutError::UnknownWorkoutKind(code.to_string())),
            "code {code:?}"
        );
    }
}

#[test]
fn wrong_parameter_counts_are_arity_mismatches() {
    let err = summarize("RUN", &[15000.0, 1.0, 75.0, 180.0]).unwrap_err();
    assert_eq!(
        err,
        WorkoutError::ArityMismatch {
            kind: WorkoutKind::Running,
            expected: 3,
            actual: 4,
        }
    );

    let err = summarize("SWM", &[720.0, 1.0, 80.0]).unwrap_err();
    assert_eq!(
        err,
        WorkoutError::ArityMismatch {
            kind: WorkoutKind::Swimming,
            expected: 5,
            actual: 3,
        }
    );
}

#[test]
fn error_messages_name_the_problem() {
    let err = summarize("WLK", &[9000.0, 1.0, 75.0, 0.0]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid input for height: expected a positive number, got 0"
    );

    let err = summarize("WLK", &[9000.0]).unwrap_err();
    assert_eq!(err.to_string(), "SportsWalking expects 4 parameters, got 1");
}

#[test]
fn packages_load_from_json_file() {
    let path = std::env::temp_dir().join(format!("workouts-packages-{}.json", process::id()));
    fs::write(
        &path,
        r#"[
            {"workout_type": "RUN", "data": [15000, 1, 75]},
            {"workout_type": "SWM", "data": [720, 1, 80, 25, 40]}
        ]"#,
    )
    .unwrap();

    let packages = load_packages(&path);
    let _ = fs::remove_file(&path);
    let packages = packages.unwrap();

    assert_eq!(
        packages,
        vec![
            SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
            SensorPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        ]
    );
}

#[test]
fn summary_serializes_to_json() {
    let summary = summarize("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
    let value = serde_json::to_value(summary).unwrap();
    assert_eq!(value["training_type"], "Swimming");
    assert!((value["speed"].as_f64().unwrap() - 1.0).abs() < 1e-9);
    assert!((value["calories"].as_f64().unwrap() - 336.0).abs() < 1e-9);
}

#[test]
fn malformed_package_file_is_a_package_file_error() {
    let path = std::env::temp_dir().join(format!("workouts-bad-{}.json", process::id()));
    fs::write(&path, r#"[{"workout_type": "RUN"}]"#).unwrap();

    let result = load_packages(&path);
    let _ = fs::remove_file(&path);

    assert!(matches!(result, Err(WorkoutError::PackageFile(_))));
}

#[test]
fn missing_package_file_is_an_io_error() {
    let path = std::env::temp_dir().join("workouts-no-such-dir/packages.json");
    assert!(matches!(load_packages(&path), Err(WorkoutError::Io(_))));
}

#[test]
fn render_text_and_json() {
    let summary = summarize("RUN", &[15000.0, 1.0, 75.0]).unwrap();

    assert_eq!(render(&summary, OutputFormat::Text).unwrap(), summary.message());

    let line = render(&summary, OutputFormat::Json).unwrap();
    assert!(!line.contains('\n'));
    let value: serde_json::Value = serde_json::from_str(&line).unwrap();
    assert_eq!(value["training_type"], "Running");
    assert!((value["distance"].as_f64().unwrap() - 9.75).abs() < 1e-9);
}

#[test]
fn render_all_processes_every_package_and_counts_rejections() {
    let packages = vec![
        SensorPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorPackage::new("RUN", vec![15000.0, 1.0, 0.0]),
        SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ];

    let report = render_all(&packages, OutputFormat::Json).unwrap();
    assert_eq!(report.rejected, 1);
    assert_eq!(report.lines.len(), 2);

    let kinds: Vec<String> = report
        .lines
        .iter()
        .map(|line| {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            value["training_type"].as_str().unwrap().to_string()
        })
        .collect();
    assert_eq!(kinds, vec!["Swimming", "SportsWalking"]);

    let report = render_all(&demo_packages(), OutputFormat::Text).unwrap();
    assert_eq!(report.rejected, 0);
    assert_eq!(report.lines.len(), 3);
    assert!(report.lines[1].starts_with("Training type: Running;"));
}
