use std::collections::BTreeMap;
use vermeer_storage::{AnalysisArtifact, DiagnosisArtifact, ResultStore};

fn store_in(dir: &tempfile::TempDir) -> ResultStore {
    ResultStore::new(
        dir.path().join("analysis"),
        dir.path().join("diagnosis"),
        dir.path().join("history"),
    )
    .unwrap()
}

#[tokio::test]
async fn analysis_artifact_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    let artifact = AnalysisArtifact {
        interaction_pairs: "{ Hive: Hadoop }".to_string(),
        dispatched_interactions: "{ \"shared_object\": (Hive, Hadoop, hdfs) }".to_string(),
        log_files: vec!["hive.log".to_string(), "hadoop.log".to_string()],
    };

    let path = store.save_analysis(&artifact).await.unwrap();
    assert!(path.file_name().unwrap().to_str().unwrap().ends_with("_analysis.json"));

    let written = std::fs::read_to_string(&path).unwrap();
    let parsed: AnalysisArtifact = serde_json::from_str(&written).unwrap();
    assert_eq!(parsed, artifact);
}

#[tokio::test]
async fn diagnosis_artifact_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    let mut results = BTreeMap::new();
    results.insert("welcome".to_string(), vec!["filled".to_string()]);
    let artifact = DiagnosisArtifact {
        results,
        log_files: vec!["hive.log".to_string()],
        templates_path: "./template/".to_string(),
    };

    let path = store.save_diagnosis(&artifact).await.unwrap();
    assert!(path.file_name().unwrap().to_str().unwrap().ends_with("_diagnosis.json"));

    let parsed: DiagnosisArtifact =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(parsed, artifact);
}

#[tokio::test]
async fn transcript_sections_follow_the_wire_format() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    let mut results = BTreeMap::new();
    results.insert(
        "sub_err".to_string(),
        vec![
            "### Completed Template\nError: __error(checksum mismatch)__".to_string(),
            "### Completed Template\nError: __error(io timeout)__".to_string(),
        ],
    );
    results.insert(
        "welcome".to_string(),
        vec!["### Completed Template\nRoot cause: __cause(disk full)__".to_string()],
    );

    let artifacts = store.save_transcript(&results).await.unwrap();
    let content = std::fs::read_to_string(&artifacts.transcript).unwrap();

    assert!(content.contains("\n=== sub_err Results ===\n"));
    assert!(content.contains("\n=== welcome Results ===\n"));
    // Response markers appear only for the multi-variant template.
    assert!(content.contains("\n--- Response 1 ---\n"));
    assert!(content.contains("\n--- Response 2 ---\n"));
    let welcome_section = content.split("=== welcome Results ===").nth(1).unwrap();
    assert!(!welcome_section.contains("--- Response"));
}

#[tokio::test]
async fn transcript_save_derives_the_extracted_json() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    let mut results = BTreeMap::new();
    results.insert(
        "welcome".to_string(),
        vec!["### Completed Template\nRoot cause: __cause(disk full)__".to_string()],
    );

    let artifacts = store.save_transcript(&results).await.unwrap();
    assert!(
        artifacts
            .extracted
            .file_name()
            .unwrap()
            .to_str()
            .unwrap()
            .ends_with("_extracted.json")
    );

    let extracted: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&artifacts.extracted).unwrap()).unwrap();
    assert_eq!(extracted["welcome"]["filled_blanks"]["cause"], "disk full");
    assert!(extracted["welcome"]["raw_filled_values"]
        .as_array()
        .unwrap()
        .contains(&serde_json::Value::String("cause(disk full)".to_string())));
}

#[tokio::test]
async fn extract_transcript_reprocesses_a_saved_log() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    let log_path = dir.path().join("session.log");
    std::fs::write(
        &log_path,
        "\n=== welcome Results ===\n### Completed Template\nRoot cause: __cause(oom)__\n\n",
    )
    .unwrap();

    let extracted = store.extract_transcript(&log_path).await.unwrap();
    assert_eq!(
        extracted.file_name().unwrap().to_str().unwrap(),
        "session_extracted.json"
    );
    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&extracted).unwrap()).unwrap();
    assert_eq!(value["welcome"]["filled_blanks"]["cause"], "oom");
}

#[tokio::test]
async fn missing_transcript_is_a_storage_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    let result = store
        .extract_transcript(&dir.path().join("absent.log"))
        .await;
    assert!(result.is_err());
}
