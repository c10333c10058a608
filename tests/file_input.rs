use std::fs;

use rr_model::{
    InputError, RoundRobin, SimConfig, SimError,
    input::{load_processes, load_specs},
    simulate_specs,
};

#[test]
fn json_file_runs_like_the_builtin_example() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("processes.json");
    fs::write(
        &path,
        r#"[
            {"nome": "P1", "chegada": 0, "execucao": 5},
            {"nome": "P2", "chegada": 1, "execucao": 3},
            {"nome": "P3", "chegada": 2, "execucao": 6}
        ]"#,
    )
    .unwrap();

    let specs = load_specs(&path).unwrap();
    let result = simulate_specs(&specs, 2, false).unwrap();
    assert_eq!(
        result.execution_order,
        ["P1", "P2", "P3", "P1", "P2", "P3", "P1", "P3"]
    );
}

#[test]
fn csv_file_with_english_headers() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("processes.csv");
    fs::write(&path, "NAME,arrival,burst\nA,0,3\nB,0,1\n").unwrap();

    let specs = load_specs(&path).unwrap();
    let result = simulate_specs(&specs, 2, true).unwrap();
    assert_eq!(result.execution_order, ["A", "B", "A"]);
    assert_eq!(result.timeline.unwrap(), ["A", "A", "B", "A"]);
}

#[test]
fn validated_file_feeds_the_simulator() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("processes.CSV");
    fs::write(&path, "name,arrival,burst\nlate,4,1\nA,0,2\n").unwrap();

    let procs = load_processes(&path).unwrap();
    let result = RoundRobin::new(procs, SimConfig::default()).simulate();
    assert_eq!(result.execution_order, ["A", "late"]);
    assert_eq!(result.total_ticks, 5);
}

#[test]
fn missing_file_reports_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.csv");

    let err = load_specs(&path).unwrap_err();
    assert!(matches!(err, InputError::Io { .. }));
    assert!(err.to_string().contains("absent.csv"));
}

#[test]
fn bad_quantum_from_caller() {
    let err = simulate_specs(&[], -1, false).unwrap_err();
    assert_eq!(err, SimError::InvalidQuantum(-1));
}
