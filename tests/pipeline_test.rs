use std::sync::Arc;
use std::time::{Duration, Instant};

use heartcheck::{
    ArtifactStore, HeartClassifier, PredictionPipeline, PredictionRequest, Verdict,
};

/// Builds a classifier from the locally cached artifact, or `None` when no
/// artifact is installed. Prediction tests need the real model on disk.
fn try_build_classifier() -> Option<HeartClassifier> {
    let store = ArtifactStore::new_default().ok()?;
    if !store.is_model_present() {
        eprintln!("model artifact not installed, skipping prediction test");
        return None;
    }
    let model_path = store.ensure_model_available().ok()?;
    HeartClassifier::builder()
        .with_model_file(model_path)
        .ok()?
        .build()
        .ok()
}

#[test]
fn test_delay_configuration() {
    // The pipeline carries its configured delay; zero is valid.
    let default_delay = heartcheck::pipeline::DEFAULT_PROCESSING_DELAY;
    assert_eq!(default_delay, Duration::from_secs(3));
}

#[test]
fn test_end_to_end_prediction() {
    let Some(classifier) = try_build_classifier() else {
        return;
    };

    let info = classifier.info();
    assert_eq!(info.num_features, 9);
    assert_eq!(info.output_labels, vec![0, 1]);
    assert!(!info.input_name.is_empty());
    assert!(!info.model_path.is_empty());

    let pipeline = PredictionPipeline::new(Arc::new(classifier)).with_delay(Duration::ZERO);

    let prediction = pipeline.handle(&PredictionRequest::default()).unwrap();
    assert!(matches!(
        prediction.verdict,
        Verdict::NoDisease | Verdict::DiseasePresent
    ));
    assert_eq!(prediction.record.to_row().len(), 9);
}

#[test]
fn test_prediction_is_idempotent() {
    let Some(classifier) = try_build_classifier() else {
        return;
    };
    let pipeline = PredictionPipeline::new(Arc::new(classifier)).with_delay(Duration::ZERO);

    let request = PredictionRequest {
        cp: 3,
        thalach: 160,
        slope: 2,
        oldpeak: 2.5,
        exang: 0,
        ca: 2,
        thal: 3,
        sex_label: "Pria".to_string(),
        age: 61,
    };
    let first = pipeline.handle(&request).unwrap();
    let second = pipeline.handle(&request).unwrap();
    assert_eq!(first.verdict, second.verdict);
    assert_eq!(first.record, second.record);
}

#[test]
fn test_zero_delay_returns_promptly() {
    let Some(classifier) = try_build_classifier() else {
        return;
    };
    let pipeline = PredictionPipeline::new(Arc::new(classifier)).with_delay(Duration::ZERO);

    let start = Instant::now();
    pipeline.handle(&PredictionRequest::default()).unwrap();
    // Well under the 3 s default pacing delay
    assert!(start.elapsed() < Duration::from_secs(2));
}

#[test]
fn test_classifier_shared_across_threads() {
    let Some(classifier) = try_build_classifier() else {
        return;
    };
    let classifier = Arc::new(classifier);

    let mut handles = vec![];
    for _ in 0..3 {
        let pipeline = PredictionPipeline::new(Arc::clone(&classifier)).with_delay(Duration::ZERO);
        handles.push(std::thread::spawn(move || {
            pipeline.handle(&PredictionRequest::default()).unwrap()
        }));
    }

    let verdicts: Vec<Verdict> = handles
        .into_iter()
        .map(|h| h.join().unwrap().verdict)
        .collect();
    assert!(verdicts.windows(2).all(|w| w[0] == w[1]));
}
