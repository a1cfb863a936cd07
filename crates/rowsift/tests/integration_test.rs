//! Integration tests for Rowsift.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use rowsift::{output, RowsiftError, RunConfig, Rowsift};

const RULES: &str = "column,required,pattern,type\n\
                     id,true,,int\n\
                     code,false,^[A-Z]+$,\n\
                     qty,false,,INT\n";

/// Helper to lay out a rules file and an input file in a temp directory.
fn setup(rules: &str, input: impl AsRef<[u8]>) -> (TempDir, RunConfig) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(dir.path().join("rules.csv"), rules).expect("Failed to write rules");
    fs::write(dir.path().join("raw.csv"), input).expect("Failed to write input");

    let config = RunConfig {
        rules: dir.path().join("rules.csv"),
        input: dir.path().join("raw.csv"),
        output_dir: dir.path().join("out"),
        ..RunConfig::default()
    };
    (dir, config)
}

fn read(path: impl AsRef<Path>) -> String {
    fs::read_to_string(path).expect("Failed to read output")
}

// =============================================================================
// Full Runs
// =============================================================================

#[test]
fn test_run_splits_rows() {
    let input = "id,code,qty\n\
                 1,ABC,7\n\
                 ,abc,12x\n\
                 \"  3 \",XYZ,\n\
                 4,A1,5,extra\n";
    let (_dir, config) = setup(RULES, input);

    let report = Rowsift::with_config(config.clone()).run().expect("Run failed");

    assert_eq!(read(config.clean_path()), "id,code,qty\n1,ABC,7\n\"  3 \",XYZ,\n");
    assert_eq!(read(config.reject_path()), "id,code,qty\n,abc,12x\n4,A1,5,extra\n");
    assert_eq!(
        read(config.audit_path()),
        "Row 2: Column 1 required. Column 2 invalid format. Column 3 not integer.\n\
         Row 4: Column 2 invalid format.\n"
    );
    assert_eq!(
        read(config.stats_path()),
        "Total Rows,Valid Rows,Invalid Rows,Rejection Rate (%)\n4,2,2,50.0\n"
    );

    assert_eq!(report.statistics.total_rows, 4);
    assert_eq!(report.rule_count, 3);
    assert_eq!(report.violations_by_column["code"], 2);
    assert_eq!(report.violations_by_column["id"], 1);
    assert_eq!(report.violations_by_column["qty"], 1);
}

#[test]
fn test_output_dir_is_created() {
    let (dir, mut config) = setup(RULES, "id,code,qty\n1,A,1\n");
    config.output_dir = dir.path().join("nested").join("deeper");

    Rowsift::with_config(config.clone()).run().expect("Run failed");
    assert!(config.clean_path().exists());
    assert!(config.stats_path().exists());
}

#[test]
fn test_all_rejected_is_not_an_error() {
    let (_dir, config) = setup(RULES, "id,code,qty\n,,\nx,,\n");
    let report = Rowsift::with_config(config.clone()).run().expect("Run failed");

    assert_eq!(report.statistics.invalid_rows, 2);
    assert_eq!(report.statistics.rejection_rate, 100.0);
    assert_eq!(read(config.clean_path()), "id,code,qty\n");
}

#[test]
fn test_header_only_input() {
    let (_dir, config) = setup(RULES, "id,code,qty\n");
    let report = Rowsift::with_config(config.clone()).run().expect("Run failed");

    assert_eq!(report.statistics.total_rows, 0);
    assert_eq!(report.statistics.rejection_rate, 0.0);
    assert_eq!(read(config.audit_path()), "");
    assert_eq!(
        read(config.stats_path()),
        "Total Rows,Valid Rows,Invalid Rows,Rejection Rate (%)\n0,0,0,0.0\n"
    );
}

#[test]
fn test_empty_rules_accept_everything() {
    let (_dir, config) = setup("column,required,pattern,type\n", "a,b\n,\n1,2\n");
    let report = Rowsift::with_config(config.clone()).run().expect("Run failed");

    assert_eq!(report.statistics.total_rows, 2);
    assert_eq!(report.statistics.valid_rows, 2);
    assert_eq!(read(config.clean_path()), "a,b\n,\n1,2\n");
}

#[test]
fn test_parallel_run_matches_sequential() {
    let mut input = String::from("id,code,qty\n");
    for i in 0..300 {
        match i % 5 {
            0 => input.push_str(&format!(",X{},1\n", i)),
            1 => input.push_str(&format!("{},ABC,{}q\n", i, i)),
            _ => input.push_str(&format!("{},ABC,{}\n", i, i)),
        }
    }

    let (_a, sequential) = setup(RULES, &input);
    let (_b, mut parallel) = setup(RULES, &input);
    parallel.parallel = true;

    let seq_report = Rowsift::with_config(sequential.clone()).run().expect("Run failed");
    let par_report = Rowsift::with_config(parallel.clone()).run().expect("Run failed");

    assert_eq!(read(sequential.clean_path()), read(parallel.clean_path()));
    assert_eq!(read(sequential.reject_path()), read(parallel.reject_path()));
    assert_eq!(read(sequential.audit_path()), read(parallel.audit_path()));
    assert_eq!(seq_report.statistics, par_report.statistics);
}

#[test]
fn test_summary_file() {
    let (_dir, mut config) = setup(RULES, "id,code,qty\n1,A,1\n");
    config.summary_file = Some("report.json".to_string());

    Rowsift::with_config(config.clone()).run().expect("Run failed");

    let json: serde_json::Value =
        serde_json::from_str(&read(config.summary_path().unwrap())).expect("Invalid JSON");
    assert_eq!(json["statistics"]["total_rows"], 1);
    assert_eq!(json["rule_count"], 3);
    assert!(json["input"]["hash"].as_str().unwrap().starts_with("sha256:"));
}

#[test]
fn test_latin1_row_passes_through_unchanged() {
    let rules = "column,required,pattern,type\nid,true,,int\nname,true,,\n";
    let input: &[u8] = b"id,name\n1,Ann\n2,Jos\xe9\n3,Bob\n";
    let (_dir, config) = setup(rules, input);

    let report = Rowsift::with_config(config.clone()).run().expect("Run failed");

    assert_eq!(fs::read(config.clean_path()).unwrap(), input);
    assert_eq!(read(config.reject_path()), "id,name\n");
    assert_eq!(read(config.audit_path()), "");
    assert_eq!(report.statistics.total_rows, 3);
    assert_eq!(report.statistics.valid_rows, 3);
    assert_eq!(report.statistics.invalid_rows, 0);
}

#[test]
fn test_statistics_file_reads_back() {
    let (_dir, config) = setup(RULES, "id,code,qty\n1,A,1\nq,A,1\nr,A,1\n");
    let report = Rowsift::with_config(config.clone()).run().expect("Run failed");

    let stats = output::read_statistics(config.stats_path()).expect("Read failed");
    assert_eq!(stats, report.statistics);
}

// =============================================================================
// Fatal Errors
// =============================================================================

#[test]
fn test_bad_pattern_aborts_before_output() {
    let rules = "column,required,pattern,type\nid,true,(oops,\n";
    let (_dir, config) = setup(rules, "id\n1\n");

    let err = Rowsift::with_config(config.clone()).run().unwrap_err();
    assert!(matches!(err, RowsiftError::InvalidPattern { line: 2, .. }));
    assert!(!config.output_dir.exists());
}

#[test]
fn test_missing_rules_file() {
    let (dir, mut config) = setup(RULES, "id\n1\n");
    config.rules = dir.path().join("nope.csv");

    let err = Rowsift::with_config(config.clone()).run().unwrap_err();
    match err {
        RowsiftError::Io { path, .. } => assert_eq!(path, config.rules),
        other => panic!("unexpected error: {other}"),
    }
    assert!(!config.output_dir.exists());
}

#[test]
fn test_missing_input_file() {
    let (dir, mut config) = setup(RULES, "id\n1\n");
    config.input = dir.path().join("missing.csv");

    let err = Rowsift::with_config(config).run().unwrap_err();
    assert!(err.to_string().contains("missing.csv"));
}
