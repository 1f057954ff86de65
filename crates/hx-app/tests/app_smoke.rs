use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use hx_app::*;
use hx_core::{Tolerances, nearly_equal};
use hx_engine::{CalculationRequest, SolverKind};
use hx_results::CalculationStore;

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("{}_{}", prefix, nanos));
    dir
}

#[test]
fn run_save_list_delete() {
    let store = CalculationStore::new(unique_temp_dir("hx_app_store")).unwrap();
    let request = CalculationRequest::default();

    let response = run_calculation(&store, &request, &RunOptions::default()).unwrap();
    let id = response.id.expect("saved run must have an id");
    assert_eq!(response.result.solver, SolverKind::Analytical);

    let listed = list_calculations(&store).unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, id);

    let loaded = get_calculation(&store, &id).unwrap();
    assert_eq!(loaded.name(), request.name);

    assert!(delete_calculation(&store, &id).unwrap());
    assert!(!delete_calculation(&store, &id).unwrap());
    assert!(matches!(
        get_calculation(&store, &id),
        Err(AppError::CalculationNotFound(_))
    ));
}

#[test]
fn unsaved_run_leaves_store_empty() {
    let store = CalculationStore::new(unique_temp_dir("hx_app_nosave")).unwrap();
    let options = RunOptions {
        solver: SolverKind::Numerical,
        save: false,
    };
    let response = run_calculation(&store, &CalculationRequest::default(), &options).unwrap();
    assert!(response.id.is_none());
    assert_eq!(response.result.solver, SolverKind::Numerical);
    assert!(list_calculations(&store).unwrap().is_empty());
}

#[test]
fn invalid_request_surfaces_engine_error() {
    let store = CalculationStore::new(unique_temp_dir("hx_app_invalid")).unwrap();
    let mut request = CalculationRequest::default();
    request.material.porosity = 1.0;

    let err = run_calculation(&store, &request, &RunOptions::default()).unwrap_err();
    assert!(matches!(err, AppError::Engine(_)));
    assert!(err.to_string().contains("material.porosity"));
    assert!(list_calculations(&store).unwrap().is_empty());
}

#[test]
fn request_files_roundtrip_and_fill_defaults() {
    let dir = unique_temp_dir("hx_app_requests");
    fs::create_dir_all(&dir).unwrap();

    let mut request = CalculationRequest::default();
    request.name = "Pellet cooler".to_string();
    request.parameters.steps = 40;

    for file in ["bed.yaml", "bed.json"] {
        let path = dir.join(file);
        save_request(&path, &request).unwrap();
        assert_eq!(load_request(&path).unwrap(), request);
    }

    let partial = dir.join("partial.yaml");
    fs::write(&partial, "name: Partial\nparameters:\n  height: 3.5\n").unwrap();
    let loaded = load_request(&partial).unwrap();
    assert_eq!(loaded.name, "Partial");
    assert_eq!(loaded.parameters.height, 3.5);
    assert_eq!(loaded.parameters.steps, 100);
    assert_eq!(loaded.material, CalculationRequest::default().material);

    assert!(matches!(
        load_request(&dir.join("missing.yaml")),
        Err(AppError::RequestFileRead { .. })
    ));
}

#[test]
fn summary_reports_outlets_and_efficiency() {
    let store = CalculationStore::new(unique_temp_dir("hx_app_summary")).unwrap();
    let options = RunOptions {
        solver: SolverKind::Numerical,
        save: false,
    };
    let result = run_calculation(&store, &CalculationRequest::default(), &options)
        .unwrap()
        .result;

    let summary = summarize(&result);
    let tol = Tolerances::default();
    assert_eq!(summary.sample_count, 101);
    assert!(nearly_equal(summary.bed_height, 2.0, tol));
    assert!(nearly_equal(
        summary.gas_outlet_temperature,
        result.gas_temperatures[100],
        tol
    ));
    assert!(nearly_equal(summary.efficiency, result.efficiency, tol));
    assert!(summary.max_temperature_difference >= 1.0);
}

#[test]
fn calculation_ids_parse_from_text() {
    let store = CalculationStore::new(unique_temp_dir("hx_app_ids")).unwrap();
    let id = run_calculation(&store, &CalculationRequest::default(), &RunOptions::default())
        .unwrap()
        .id
        .unwrap();
    assert_eq!(parse_calculation_id(&format!(" {id} ")).unwrap(), id);
    assert!(matches!(
        parse_calculation_id("not-an-id"),
        Err(AppError::InvalidInput(_))
    ));
}
