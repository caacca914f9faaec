use std::path::Path;
use std::sync::Arc;

use log::{error, info};
use ort::session::Session;
use ort::tensor::TensorElementType;
use ort::value::ValueType;

use super::error::ClassifierError;
use super::model::HeartClassifier;
use crate::artifact::ArtifactStore;
use crate::features::FEATURE_COUNT;
use crate::runtime::{create_session_builder, RuntimeConfig};

/// A builder for constructing a [`HeartClassifier`] with a fluent interface.
///
/// # Example
/// ```rust,no_run
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use heartcheck::{HeartClassifier, RuntimeConfig};
///
/// let classifier = HeartClassifier::builder()
///     .with_runtime_config(RuntimeConfig::default())
///     .with_model_file("models/hasilgenerate.onnx")?
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default, Debug)]
pub struct ClassifierBuilder {
    model_path: Option<String>,
    runtime_config: RuntimeConfig,
}

impl ClassifierBuilder {
    /// Creates a new empty ClassifierBuilder instance with default
    /// configuration
    pub fn new() -> Self {
        Self {
            model_path: None,
            runtime_config: RuntimeConfig::default(),
        }
    }

    /// Sets the runtime configuration for ONNX model execution
    pub fn with_runtime_config(mut self, config: RuntimeConfig) -> Self {
        self.runtime_config = config;
        self
    }

    /// Sets the model artifact to load from an explicit file path.
    ///
    /// # Errors
    /// `BuildError` if a path was already set or the path is empty.
    pub fn with_model_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, ClassifierError> {
        if self.model_path.is_some() {
            return Err(ClassifierError::BuildError("Model path already set".to_string()));
        }
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(ClassifierError::BuildError("Model path cannot be empty".to_string()));
        }
        self.model_path = Some(path.to_string_lossy().into_owned());
        Ok(self)
    }

    /// Resolves the model artifact through the default [`ArtifactStore`]
    /// locations and sets it on the builder.
    ///
    /// # Errors
    /// `BuildError` if a path was already set, or if the artifact is
    /// missing or fails checksum verification.
    pub fn with_default_artifact(self) -> Result<Self, ClassifierError> {
        let store = ArtifactStore::new_default()
            .map_err(|e| ClassifierError::BuildError(format!("Failed to create artifact store: {}", e)))?;
        let model_path = store.ensure_model_available()?;
        self.with_model_file(model_path)
    }

    /// Loads the model and produces the classifier.
    ///
    /// This is where the artifact actually gets read; a missing or corrupt
    /// artifact surfaces here and is fatal for the caller with no retry.
    ///
    /// # Errors
    /// * `BuildError` if no model path was set or the session cannot be
    ///   created from the file
    /// * `ModelError` if the model structure does not look like a
    ///   single-input classifier
    pub fn build(self) -> Result<HeartClassifier, ClassifierError> {
        let model_path = self
            .model_path
            .ok_or_else(|| ClassifierError::BuildError("No model file set".to_string()))?;

        let session = create_session_builder(&self.runtime_config)?
            .commit_from_file(&model_path)
            .map_err(|e| {
                error!("Failed to load model from {}: {}", model_path, e);
                ClassifierError::BuildError(format!("Failed to load model from {}: {}", model_path, e))
            })?;

        let input_name = Self::validate_model(&session)?;
        info!("Model structure validated successfully (input '{}')", input_name);

        Ok(HeartClassifier {
            model_path,
            input_name,
            session: Arc::new(session),
        })
    }

    /// Checks that the session looks like a single-input tabular classifier
    /// taking float rows of [`FEATURE_COUNT`] features, and returns the
    /// input tensor's name.
    fn validate_model(session: &Session) -> Result<String, ClassifierError> {
        if session.inputs.len() != 1 {
            return Err(ClassifierError::ModelError(format!(
                "Expected a single model input, found {}",
                session.inputs.len()
            )));
        }
        if session.outputs.is_empty() {
            return Err(ClassifierError::ModelError("Model has no outputs".to_string()));
        }

        let input = &session.inputs[0];
        match &input.input_type {
            ValueType::Tensor {
                ty: TensorElementType::Float32,
                dimensions,
                ..
            } => Self::check_input_shape(dimensions)?,
            ValueType::Tensor { ty, .. } => {
                return Err(ClassifierError::ModelError(format!(
                    "Model input '{}' has element type {:?}, expected float32",
                    input.name, ty
                )));
            }
            other => {
                return Err(ClassifierError::ModelError(format!(
                    "Model input '{}' is not a tensor: {:?}",
                    input.name, other
                )));
            }
        }

        Ok(input.name.clone())
    }

    /// The row dimension must be exactly [`FEATURE_COUNT`]; a model trained
    /// on a different schema must fail here, at build time, rather than
    /// with an opaque runtime error on the first prediction.
    fn check_input_shape(dimensions: &[i64]) -> Result<(), ClassifierError> {
        match dimensions.split_last() {
            Some((&last, _)) if last == FEATURE_COUNT as i64 => Ok(()),
            _ => Err(ClassifierError::ModelError(format!(
                "Model input takes {:?}, expected rows of {} features",
                dimensions, FEATURE_COUNT
            ))),
        }
    }
}
