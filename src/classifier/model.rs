use std::collections::HashMap;
use std::sync::Arc;

use ndarray::Array2;
use ort::session::Session;
use ort::value::Tensor;

use super::error::ClassifierError;
use crate::features::{FeatureRecord, FEATURE_COUNT};

/// A heart disease classifier backed by a pre-trained ONNX model.
///
/// The model artifact is loaded exactly once, when the classifier is built;
/// after that the classifier is read-only and can be shared across threads
/// behind `Arc`.
///
/// ```rust,no_run
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use heartcheck::{HeartClassifier, FeatureRecord};
///
/// let classifier = HeartClassifier::builder()
///     .with_model_file("models/hasilgenerate.onnx")?
///     .build()?;
///
/// let record = FeatureRecord::builder().build()?;
/// let verdict = classifier.predict(&record)?;
/// println!("{}", verdict);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct HeartClassifier {
    pub model_path: String,
    pub(crate) input_name: String,
    pub(crate) session: Arc<Session>,
}

// Compile-time verification of thread-safety
const _: () = {
    fn assert_send_sync<T: Send + Sync>() {}
    fn verify_thread_safety() {
        assert_send_sync::<HeartClassifier>();
    }
};

impl HeartClassifier {
    /// Creates a new ClassifierBuilder for fluent construction
    pub fn builder() -> super::builder::ClassifierBuilder {
        super::builder::ClassifierBuilder::new()
    }

    /// Returns information about the classifier's current state
    pub fn info(&self) -> super::ClassifierInfo {
        super::ClassifierInfo {
            model_path: self.model_path.clone(),
            input_name: self.input_name.clone(),
            num_features: FEATURE_COUNT,
            output_labels: vec![0, 1],
        }
    }

    /// Runs one inference for the given record and maps the model's label
    /// to a [`Verdict`](super::Verdict).
    ///
    /// # Errors
    /// - `ModelError` if tensor creation or model execution fails
    /// - `PredictionError` if the model emits no label, or a label other
    ///   than 0 or 1 (a contract violation at the classifier boundary)
    pub fn predict(&self, record: &FeatureRecord) -> Result<super::Verdict, ClassifierError> {
        let row = record.to_row();
        let input_array = Array2::from_shape_vec((1, FEATURE_COUNT), row.to_vec())
            .map_err(|e| ClassifierError::ModelError(format!("Failed to create input array: {}", e)))?;
        let input_dyn = input_array.into_dyn();
        let input_row = input_dyn.as_standard_layout();

        let mut input_tensors = HashMap::new();
        input_tensors.insert(
            self.input_name.as_str(),
            Tensor::from_array(&input_row)
                .map_err(|e| ClassifierError::ModelError(format!("Failed to create input tensor: {}", e)))?,
        );

        let outputs = self
            .session
            .run(input_tensors)
            .map_err(|e| ClassifierError::ModelError(format!("Failed to run model: {}", e)))?;

        // First output of a converted sklearn classifier is the label tensor.
        let label_tensor = outputs[0]
            .try_extract_tensor::<i64>()
            .map_err(|e| ClassifierError::ModelError(format!("Failed to extract label tensor: {}", e)))?;
        let label = label_tensor
            .iter()
            .next()
            .copied()
            .ok_or_else(|| ClassifierError::PredictionError("Model returned an empty label tensor".into()))?;

        log::debug!("Model emitted label {} for row {:?}", label, row);

        super::Verdict::from_label(label).ok_or_else(|| {
            ClassifierError::PredictionError(format!(
                "Model returned non-binary label {} (expected 0 or 1)",
                label
            ))
        })
    }
}
