use serde::Serialize;

mod builder;
mod error;
mod model;

pub use builder::ClassifierBuilder;
pub use error::ClassifierError;
pub use model::HeartClassifier;

/// The binary outcome of a prediction.
///
/// The classifier boundary contract is two labels only: 0 means no disease,
/// 1 means disease present. Anything else coming out of the model is
/// reported as a prediction error rather than mapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    NoDisease,
    DiseasePresent,
}

impl Verdict {
    /// Maps a raw model label to a verdict; labels other than 0 and 1 have
    /// no verdict.
    pub fn from_label(label: i64) -> Option<Self> {
        match label {
            0 => Some(Verdict::NoDisease),
            1 => Some(Verdict::DiseasePresent),
            _ => None,
        }
    }

    pub fn label(&self) -> i64 {
        match self {
            Verdict::NoDisease => 0,
            Verdict::DiseasePresent => 1,
        }
    }

    /// The fixed user-facing message for this verdict.
    pub fn message(&self) -> &'static str {
        match self {
            Verdict::NoDisease => "The prediction result is: No Heart Disease",
            Verdict::DiseasePresent => "The prediction result is: Heart Disease Detected",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Information about the current state and configuration of a classifier
#[derive(Debug, Clone)]
pub struct ClassifierInfo {
    /// Path to the ONNX model file
    pub model_path: String,
    /// Name of the model's input tensor
    pub input_name: String,
    /// Number of features the model consumes per record
    pub num_features: usize,
    /// The labels the model may emit
    pub output_labels: Vec<i64>,
}
