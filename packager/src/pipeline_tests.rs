//! End-to-end tests for the package assembly pipeline.

use super::*;
use crate::error::PackagerError;
use rstest::{fixture, rstest};
use std::fs::{self, File};
use tempfile::TempDir;

const METADATA_JSON: &str = r#"{
    "title": "HTA Workshop 2025",
    "date": "February 15-16, 2025",
    "venue": "PGIMER Chandigarh",
    "organizer": "PGIMER Chandigarh",
    "target_audience": "PG Residents & Faculty"
}"#;

const REQUIRED_CONTENT_FILES: [&str; 7] = [
    "README.md",
    "01_Lectures/01_Foundations_of_HTA.md",
    "02_Quizzes/hta_questions.csv",
    "03_Presentations/01_Foundations_of_HTA_presentation.pptx",
    "04_Infographics/hta_concept_flow.png",
    "05_Admin_Forms/registration_form.gs",
    "06_Reports/hta_dashboard.py",
];

fn utf8_root(temp: &TempDir) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("temp path is UTF-8")
}

fn touch(root: &Utf8Path, rel: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dirs");
    }
    fs::write(&path, rel.as_bytes()).expect("write fixture file");
}

/// Build a complete workshop tree under `base`, metadata included.
fn workshop_tree(base: &Utf8Path) {
    let root = base.join(SOURCE_DIR_NAME);
    for rel in REQUIRED_CONTENT_FILES {
        touch(&root, rel);
    }
    fs::write(root.join(METADATA_REL_PATH), METADATA_JSON).expect("write metadata");
}

fn archive_names(path: &Utf8Path) -> Vec<String> {
    let file = File::open(path).expect("open archive");
    let archive = zip::ZipArchive::new(file).expect("read archive");
    archive.file_names().map(str::to_owned).collect()
}

#[fixture]
fn frozen() -> Timestamp {
    Timestamp::new("2025-02-01 09:30:00")
}

#[rstest]
fn complete_tree_packages_and_verifies(frozen: Timestamp) {
    let temp = TempDir::new().expect("create temp dir");
    let base = utf8_root(&temp);
    workshop_tree(&base);

    let mut pipeline = Pipeline::new(PackageConfig::workshop(&base));
    let mut stderr = Vec::new();
    let outcome = pipeline
        .run_at(&frozen, &mut stderr)
        .expect("pipeline succeeds");

    assert_eq!(pipeline.state(), PipelineState::Done);
    assert!(outcome.missing.is_empty());
    // Eight required files plus the two generated documents.
    assert_eq!(outcome.entry_count, 10);
    assert!(base.join(ARCHIVE_FILE_NAME).is_file());
    assert!(outcome.size_bytes > 0);
}

#[rstest]
fn generated_documents_are_stamped_and_ship_inside_the_archive(frozen: Timestamp) {
    let temp = TempDir::new().expect("create temp dir");
    let base = utf8_root(&temp);
    workshop_tree(&base);

    let mut pipeline = Pipeline::new(PackageConfig::workshop(&base));
    let mut stderr = Vec::new();
    pipeline
        .run_at(&frozen, &mut stderr)
        .expect("pipeline succeeds");

    let root = base.join(SOURCE_DIR_NAME);
    let log = fs::read_to_string(root.join(LOG_REL_PATH)).expect("read workflow log");
    assert!(log.contains("Timestamp: 2025-02-01 09:30:00"));

    let report = fs::read_to_string(root.join(REPORT_REL_PATH)).expect("read report");
    assert!(report.contains("Generated: 2025-02-01 09:30:00"));
    assert!(report.contains("- **Venue**: PGIMER Chandigarh"));

    let names = archive_names(&base.join(ARCHIVE_FILE_NAME));
    assert!(names.contains(&format!("{SOURCE_DIR_NAME}/{LOG_REL_PATH}")));
    assert!(names.contains(&format!("{SOURCE_DIR_NAME}/{REPORT_REL_PATH}")));
}

#[rstest]
fn rerun_overwrites_previous_outputs(frozen: Timestamp) {
    let temp = TempDir::new().expect("create temp dir");
    let base = utf8_root(&temp);
    workshop_tree(&base);

    let mut stderr = Vec::new();
    let first = Pipeline::new(PackageConfig::workshop(&base))
        .run_at(&frozen, &mut stderr)
        .expect("first run succeeds");
    let second = Pipeline::new(PackageConfig::workshop(&base))
        .run_at(&frozen, &mut stderr)
        .expect("second run succeeds");

    // A frozen clock makes the runs indistinguishable.
    assert_eq!(first.entry_count, second.entry_count);
}

#[rstest]
fn missing_required_files_fail_integrity_verification(frozen: Timestamp) {
    let temp = TempDir::new().expect("create temp dir");
    let base = utf8_root(&temp);
    // Metadata only: the report stage passes, the manifest check cannot.
    let root = base.join(SOURCE_DIR_NAME);
    fs::create_dir_all(root.join("06_Reports")).expect("create reports dir");
    fs::write(root.join(METADATA_REL_PATH), METADATA_JSON).expect("write metadata");

    let mut pipeline = Pipeline::new(PackageConfig::workshop(&base));
    let mut stderr = Vec::new();
    let err = pipeline
        .run_at(&frozen, &mut stderr)
        .expect_err("incomplete tree must fail verification");

    assert_eq!(pipeline.state(), PipelineState::Failed);
    assert_eq!(err.stage, Stage::IntegrityVerification);
    assert!(
        err.to_string()
            .starts_with("integrity verification failed: missing required files:")
    );
    match err.source {
        PackagerError::VerificationFailed { missing } => {
            assert!(missing.contains(&"HTA_Workshop_2025/README.md".to_owned()));
            // Metadata itself is present, so it is not reported missing.
            assert!(
                !missing
                    .contains(&"HTA_Workshop_2025/06_Reports/workshop_metadata.json".to_owned())
            );
        }
        other => panic!("expected verification failure, got {other}"),
    }
    // The archive itself was well-formed; only its contents fell short.
    assert!(base.join(ARCHIVE_FILE_NAME).is_file());
}

#[rstest]
fn incomplete_metadata_fails_report_generation_before_archiving(frozen: Timestamp) {
    let temp = TempDir::new().expect("create temp dir");
    let base = utf8_root(&temp);
    workshop_tree(&base);
    let root = base.join(SOURCE_DIR_NAME);
    fs::write(
        root.join(METADATA_REL_PATH),
        r#"{"title": "HTA Workshop 2025", "date": "February 15-16, 2025"}"#,
    )
    .expect("write partial metadata");

    let mut pipeline = Pipeline::new(PackageConfig::workshop(&base));
    let mut stderr = Vec::new();
    let err = pipeline
        .run_at(&frozen, &mut stderr)
        .expect_err("partial metadata must fail");

    assert_eq!(pipeline.state(), PipelineState::Failed);
    assert_eq!(err.stage, Stage::ReportGeneration);
    assert!(matches!(err.source, PackagerError::Metadata(_)));

    // The log stage already ran; nothing after the failure did.
    assert!(root.join(LOG_REL_PATH).is_file());
    assert!(!root.join(REPORT_REL_PATH).exists());
    assert!(!base.join(ARCHIVE_FILE_NAME).exists());
}

#[rstest]
fn missing_source_root_fails_before_touching_anything(frozen: Timestamp) {
    let temp = TempDir::new().expect("create temp dir");
    let base = utf8_root(&temp);

    let mut pipeline = Pipeline::new(PackageConfig::workshop(&base));
    let mut stderr = Vec::new();
    let err = pipeline
        .run_at(&frozen, &mut stderr)
        .expect_err("absent root must fail");

    assert_eq!(pipeline.state(), PipelineState::Failed);
    assert_eq!(err.stage, Stage::LogGeneration);
    assert!(matches!(
        err.source,
        PackagerError::SourceRootNotFound { .. }
    ));

    let leftovers = fs::read_dir(&base).expect("read base dir").count();
    assert_eq!(leftovers, 0, "a failed preflight must not create files");
}

#[rstest]
fn quiet_mode_suppresses_narration(frozen: Timestamp) {
    let temp = TempDir::new().expect("create temp dir");
    let base = utf8_root(&temp);
    workshop_tree(&base);

    let mut config = PackageConfig::workshop(&base);
    config.quiet = true;
    let mut stderr = Vec::new();
    Pipeline::new(config)
        .run_at(&frozen, &mut stderr)
        .expect("pipeline succeeds");

    assert!(stderr.is_empty(), "quiet mode must write no narration");
}

#[rstest]
fn narration_reports_each_stage(frozen: Timestamp) {
    let temp = TempDir::new().expect("create temp dir");
    let base = utf8_root(&temp);
    workshop_tree(&base);

    let mut stderr = Vec::new();
    Pipeline::new(PackageConfig::workshop(&base))
        .run_at(&frozen, &mut stderr)
        .expect("pipeline succeeds");

    let narration = String::from_utf8(stderr).expect("narration is UTF-8");
    assert!(narration.contains("Workflow log created"));
    assert!(narration.contains("Final package report created"));
    assert!(narration.contains("Package integrity verified"));
}

#[rstest]
#[case::log(Stage::LogGeneration, "log generation")]
#[case::report(Stage::ReportGeneration, "report generation")]
#[case::archive(Stage::ArchiveCreation, "archive creation")]
#[case::verify(Stage::IntegrityVerification, "integrity verification")]
fn stage_names_match_their_failure_causes(#[case] stage: Stage, #[case] expected: &str) {
    assert_eq!(stage.to_string(), expected);
}

#[test]
fn new_pipeline_starts_in_start_state() {
    let config = PackageConfig::workshop(Utf8Path::new("/work"));
    let pipeline = Pipeline::new(config);
    assert_eq!(pipeline.state(), PipelineState::Start);
}

#[test]
fn workshop_config_uses_canonical_layout() {
    let config = PackageConfig::workshop(Utf8Path::new("/work"));
    assert_eq!(config.source_root, "/work/HTA_Workshop_2025");
    assert_eq!(config.archive_path, "/work/HTA_Workshop_Package_2025.zip");
    assert_eq!(
        config.metadata_path,
        "/work/HTA_Workshop_2025/06_Reports/workshop_metadata.json"
    );
    assert_eq!(config.manifest.entries().len(), 8);
}
