use std::sync::Arc;
use std::thread;
use std::time::Duration;

use log::info;
use serde::Serialize;

use crate::classifier::{ClassifierError, HeartClassifier, Verdict};
use crate::features::{FeatureRecord, Sex};

/// Pause before revealing the verdict. Purely cosmetic pacing; zero is a
/// valid configuration and correctness does not depend on it.
pub const DEFAULT_PROCESSING_DELAY: Duration = Duration::from_secs(3);

/// The raw values collected from the form controls, before the categorical
/// sex label has been translated.
///
/// Defaults match the controls' initial positions.
#[derive(Debug, Clone)]
pub struct PredictionRequest {
    pub cp: i64,
    pub thalach: i64,
    pub slope: i64,
    pub oldpeak: f32,
    pub exang: i64,
    pub ca: i64,
    pub thal: i64,
    /// Selector label, "Perempuan" or "Pria".
    pub sex_label: String,
    pub age: i64,
}

impl Default for PredictionRequest {
    fn default() -> Self {
        Self {
            cp: 2,
            thalach: 80,
            slope: 1,
            oldpeak: 1.0,
            exang: 1,
            ca: 1,
            thal: 1,
            sex_label: "Perempuan".to_string(),
            age: 30,
        }
    }
}

impl PredictionRequest {
    /// Translates the raw inputs into a validated [`FeatureRecord`],
    /// including the sex label mapping. Pure; no classifier involved.
    pub fn build_record(&self) -> Result<FeatureRecord, ClassifierError> {
        FeatureRecord::builder()
            .cp(self.cp)
            .thalach(self.thalach)
            .slope(self.slope)
            .oldpeak(self.oldpeak)
            .exang(self.exang)
            .ca(self.ca)
            .thal(self.thal)
            .sex(Sex::from_label(&self.sex_label)?)
            .age(self.age)
            .build()
    }
}

/// The outcome of one handled request: the record that was fed to the model
/// and the verdict it produced.
#[derive(Debug, Clone, Serialize)]
pub struct Prediction {
    pub record: FeatureRecord,
    pub verdict: Verdict,
}

/// The request/response seam between any front end and the classifier.
///
/// Holds the shared, read-only classifier handle and handles one request at
/// a time: build the record, run the inference, hold for the configured
/// pacing delay, return the verdict. Callable from any front end, or from
/// none at all.
///
/// ```rust,no_run
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use std::sync::Arc;
/// use std::time::Duration;
/// use heartcheck::{HeartClassifier, PredictionPipeline, PredictionRequest};
///
/// let classifier = Arc::new(
///     HeartClassifier::builder().with_default_artifact()?.build()?,
/// );
/// let pipeline = PredictionPipeline::new(classifier).with_delay(Duration::ZERO);
/// let prediction = pipeline.handle(&PredictionRequest::default())?;
/// println!("{}", prediction.verdict.message());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PredictionPipeline {
    classifier: Arc<HeartClassifier>,
    processing_delay: Duration,
}

impl PredictionPipeline {
    pub fn new(classifier: Arc<HeartClassifier>) -> Self {
        Self {
            classifier,
            processing_delay: DEFAULT_PROCESSING_DELAY,
        }
    }

    /// Overrides the pacing delay applied before the verdict is returned.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.processing_delay = delay;
        self
    }

    pub fn processing_delay(&self) -> Duration {
        self.processing_delay
    }

    /// Handles one prediction request end to end.
    ///
    /// The delay blocks the calling thread; there is no cancellation path.
    ///
    /// # Errors
    /// - `ValidationError` if any raw input is out of range or the sex
    ///   label is unknown
    /// - `ModelError` / `PredictionError` forwarded from the classifier
    pub fn handle(&self, request: &PredictionRequest) -> Result<Prediction, ClassifierError> {
        let record = request.build_record()?;
        info!("Handling prediction request: {:?}", record);

        let verdict = self.classifier.predict(&record)?;

        if !self.processing_delay.is_zero() {
            info!("Processing... (holding verdict for {:?})", self.processing_delay);
            thread::sleep(self.processing_delay);
        }

        info!("Verdict: {}", verdict);
        Ok(Prediction { record, verdict })
    }
}
