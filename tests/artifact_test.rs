use std::fs;

use heartcheck::{ArtifactError, ArtifactStore, ClassifierError, HeartClassifier};

#[test]
fn test_store_over_empty_directory() {
    let dir = tempfile::tempdir().unwrap();
    let store = ArtifactStore::new(dir.path()).unwrap();

    assert!(!store.is_model_present());
    assert!(!store.verify_model().unwrap());
    assert!(matches!(
        store.ensure_model_available(),
        Err(ArtifactError::NotFound(_))
    ));
}

#[test]
fn test_corrupt_artifact_fails_to_build() {
    // A file that exists but is not a valid ONNX model must fail at build
    // time, not at the first prediction.
    let dir = tempfile::tempdir().unwrap();
    let store = ArtifactStore::new(dir.path()).unwrap();
    fs::write(store.model_path(), b"not an onnx model").unwrap();

    let model_path = store.ensure_model_available().unwrap();
    let result = HeartClassifier::builder()
        .with_model_file(model_path)
        .unwrap()
        .build();
    assert!(matches!(result, Err(ClassifierError::BuildError(_))));
}

#[test]
fn test_tampered_artifact_detected_by_sidecar() {
    let dir = tempfile::tempdir().unwrap();
    let store = ArtifactStore::new(dir.path()).unwrap();
    fs::write(store.model_path(), b"model bytes").unwrap();
    // Sidecar written for different content
    fs::write(
        store.checksum_path(),
        "0000000000000000000000000000000000000000000000000000000000000000",
    )
    .unwrap();

    assert!(matches!(
        store.ensure_model_available(),
        Err(ArtifactError::ChecksumMismatch { .. })
    ));
}
