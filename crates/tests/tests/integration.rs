//! Integration tests for the georadar front end.
//!
//! These tests drive the full path:
//! Input text → Directive table → Config → Scene objects

use std::io::Write;
use std::path::{Path, PathBuf};

use georadar_config::{ConfigurationError, ModelConfig, RunArgs};
use georadar_directives::{
    DirectiveErrorKind, DirectiveTable, InputError, Scene, SceneObject, SnapshotTrigger,
};
use georadar_foundation::Precision;
use georadar_tests::{TestHarness, resolve};

/// A-scan of a buried cylinder in a half-space.
const CYLINDER: &str = r#"
Title and domain commands are handled elsewhere.
#title: A-scan from a metal cylinder buried in a dielectric half-space
#domain: 0.240 0.210 0.002
#dx_dy_dz: 0.002 0.002 0.002
#time_window: 3e-9

#material: 6 0 1 0 half_space

#waveform: ricker 1 1.5e9 my_ricker
#hertzian_dipole: z 0.100 0.170 0 my_ricker
#rx: 0.140 0.170 0

#box: 0 0 0 0.240 0.170 0.002 half_space
#cylinder: 0.120 0.080 0 0.120 0.080 0.002 0.010 pec

#geometry_view: 0 0 0 0.240 0.210 0.002 0.002 0.002 0.002 cylinder_half_space n
"#;

// ============================================================================
// Directive-text path
// ============================================================================

#[test]
fn test_cylinder_scene_in_group_order() {
    let harness = TestHarness::from_input(CYLINDER, 1);

    // Groups come out in directive order, not text order
    assert_eq!(
        harness.kinds(),
        vec![
            "waveform",
            "hertzian_dipole",
            "rx",
            "material",
            "geometry_view"
        ]
    );
}

#[test]
fn test_single_use_commands_are_unrecognized() {
    let harness = TestHarness::from_input(CYLINDER, 1);
    let unrecognized = harness.table().unrecognized();
    assert_eq!(
        unrecognized,
        vec!["title", "domain", "dx_dy_dz", "time_window", "box", "cylinder"]
    );
}

#[test]
fn test_every_model_gets_the_same_parsed_scene() {
    let harness = TestHarness::from_input(CYLINDER, 3);
    let models = harness.models();
    assert_eq!(models.len(), 3);

    let first = harness.scene_objects(&models[0]);
    for model in &models[1..] {
        assert_eq!(harness.scene_objects(model), first);
    }
}

#[test]
fn test_b_scan_output_paths() {
    let harness = TestHarness::with_args(
        CYLINDER,
        RunArgs::new(3)
            .with_input_file("user_models/cylinder_Bscan_2D.in")
            .with_output_file("results/cylinder_Bscan_2D"),
    );
    let paths: Vec<PathBuf> = harness
        .models()
        .iter()
        .map(|m| m.output_file_path().to_path_buf())
        .collect();
    assert_eq!(
        paths,
        vec![
            PathBuf::from("results/cylinder_Bscan_2D1.out"),
            PathBuf::from("results/cylinder_Bscan_2D2.out"),
            PathBuf::from("results/cylinder_Bscan_2D3.out"),
        ]
    );
}

#[test]
fn test_single_model_has_no_suffix() {
    let harness = TestHarness::with_args(
        CYLINDER,
        RunArgs::new(1).with_input_file("user_models/cylinder_Ascan_2D.in"),
    );
    let models = harness.models();
    assert_eq!(models.len(), 1);
    assert_eq!(
        models[0].output_file_path(),
        Path::new("user_models/cylinder_Ascan_2D.out")
    );
    assert_eq!(models[0].namespace().number_model_runs, 2);
}

#[test]
fn test_task_runs_one_model() {
    let harness = TestHarness::with_args(
        CYLINDER,
        RunArgs::new(10).with_input_file("scan.in").with_task(4),
    );
    let models = harness.models();
    assert_eq!(models.len(), 1);
    assert_eq!(models[0].number(), 4);
    assert_eq!(models[0].output_file_path(), Path::new("scan4.out"));
}

#[test]
fn test_mpi_range_is_one_based() {
    let harness = TestHarness::with_args(
        CYLINDER,
        RunArgs::new(3).with_input_file("scan.in").with_mpi(),
    );
    let numbers: Vec<usize> = harness.models().iter().map(ModelConfig::number).collect();
    assert_eq!(numbers, vec![2, 3, 4]);
}

#[test]
fn test_single_precision_run() {
    let harness = TestHarness::with_args(
        CYLINDER,
        RunArgs::new(1)
            .with_input_file("scan.in")
            .with_precision("single"),
    );
    assert_eq!(harness.precision().precision(), Precision::Single);
    assert_eq!(harness.precision().kernel_complex(), "complex<float>");
}

// ============================================================================
// Dispersive and output directives
// ============================================================================

#[test]
fn test_dispersive_materials_and_snapshots() {
    let input = "
#material: 3 0.01 1 0 soil
#material: 5 0.02 1 0 wet_soil
#add_dispersion_debye: 2 0.1 1e-9 0.2 2e-9 soil wet_soil
#snapshot: 0 0 0 1 1 1 0.1 0.1 0.1 100 snap_iter
#snapshot: 0 0 0 1 1 1 0.1 0.1 0.1 1.5e-9 snap_time
";
    let harness = TestHarness::from_input(input, 1);
    let objects = harness.try_parse().unwrap();

    let triggers: Vec<SnapshotTrigger> = objects
        .iter()
        .filter_map(|o| match o {
            SceneObject::Snapshot(s) => Some(s.trigger),
            _ => None,
        })
        .collect();
    assert_eq!(
        triggers,
        vec![
            SnapshotTrigger::Iterations(100),
            SnapshotTrigger::Time(1.5e-9)
        ]
    );

    let debye = objects
        .iter()
        .find_map(|o| match o {
            SceneObject::DebyeDispersion(d) => Some(d),
            _ => None,
        })
        .unwrap();
    assert_eq!(debye.er_delta, vec![0.1, 0.2]);
    assert_eq!(debye.tau, vec![1e-9, 2e-9]);
    let ids: Vec<&str> = debye.material_ids.iter().map(|id| id.as_str()).collect();
    assert_eq!(ids, vec!["soil", "wet_soil"]);
}

#[test]
fn test_third_pml_cfs_fails() {
    let pml = "constant forward 0 0 constant forward 1 1 quartic forward 0 none";
    let input = format!("#pml_cfs: {pml}\n#pml_cfs: {pml}\n#pml_cfs: {pml}\n");
    let harness = TestHarness::from_input(&input, 1);
    let err = harness.try_parse().unwrap_err();
    assert_eq!(err.directive, "pml_cfs");
    assert!(matches!(
        err.kind,
        DirectiveErrorKind::TooManyInstances { max: 2, found: 3 }
    ));
}

#[test]
fn test_malformed_directive_reports_tokens() {
    let harness = TestHarness::from_input("#material: 6 0 1 half_space", 1);
    let err = harness.try_parse().unwrap_err();
    assert_eq!(err.directive, "material");
    assert_eq!(err.tokens, vec!["6", "0", "1", "half_space"]);
    assert_eq!(
        err.to_string(),
        "'#material: 6 0 1 half_space' requires exactly five parameters"
    );
}

// ============================================================================
// Pre-built scenes (API path)
// ============================================================================

#[test]
fn test_prebuilt_scenes_bypass_table() {
    let table = DirectiveTable::from_input(CYLINDER).unwrap();
    let parsed = georadar_directives::parse_scene(&table).unwrap();
    let scenes = vec![parsed.clone(), Scene::new()];

    let harness = TestHarness::with_args(
        "",
        RunArgs::new(2)
            .with_output_file("api_run")
            .with_scenes(scenes),
    );
    let models = harness.models();
    assert_eq!(harness.scene_objects(&models[0]), parsed.objects);
    assert!(harness.scene_objects(&models[1]).is_empty());
    assert_eq!(
        harness.simulation().input_file(),
        std::path::Path::new("api_run")
    );
}

#[test]
fn test_scene_list_survives_json() {
    let table = DirectiveTable::from_input(CYLINDER).unwrap();
    let scene = georadar_directives::parse_scene(&table).unwrap();
    let args = RunArgs::new(1)
        .with_output_file("api_run")
        .with_scenes(vec![scene]);

    let json = serde_json::to_value(&args).unwrap();
    assert_eq!(json["scenes"][0]["objects"][0]["kind"], "waveform");

    let back: RunArgs = serde_json::from_value(json).unwrap();
    assert_eq!(back.scenes.len(), 1);
    assert_eq!(back.scenes[0].len(), 5);
}

// ============================================================================
// Failure modes
// ============================================================================

#[test]
fn test_missing_paths() {
    assert_eq!(
        resolve(RunArgs::new(1)).unwrap_err(),
        ConfigurationError::MissingPaths
    );
}

#[test]
fn test_restart_with_one_model_is_rejected() {
    let err = resolve(RunArgs::new(1).with_input_file("a.in").with_restart(2)).unwrap_err();
    assert!(matches!(err, ConfigurationError::EmptyModelRange { .. }));
}

#[test]
fn test_missing_colon_is_reported() {
    let err = DirectiveTable::from_input("#material: 6 0 1 0 a\n#rx 0 0 0\n").unwrap_err();
    assert!(matches!(err, InputError::MissingColon { line_number: 2, .. }));
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(CYLINDER.as_bytes()).unwrap();

    let table = DirectiveTable::load(file.path()).unwrap();
    assert_eq!(table.instances("material"), ["6 0 1 0 half_space"]);

    let args = RunArgs::new(2).with_input_file(file.path());
    let sim = resolve(args).unwrap();
    assert_eq!(sim.input_file(), file.path());
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = DirectiveTable::load(dir.path().join("absent.in")).unwrap_err();
    assert!(matches!(err, InputError::Io { .. }));
}
