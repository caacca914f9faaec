//! Heart disease prediction over a pre-trained ONNX classifier.
//!
//! The crate collects nine bounded health parameters, assembles them into a
//! [`FeatureRecord`] with the exact schema the model was trained on, runs a
//! single inference and maps the binary label to a user-facing [`Verdict`].
//!
//! # Basic Usage
//!
//! ```rust,no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use heartcheck::{ArtifactStore, HeartClassifier, FeatureRecord, Sex};
//!
//! let model_path = ArtifactStore::new_default()?.ensure_model_available()?;
//! let classifier = HeartClassifier::builder()
//!     .with_model_file(model_path)?
//!     .build()?;
//!
//! let record = FeatureRecord::builder()
//!     .cp(2)
//!     .thalach(150)
//!     .sex(Sex::Male)
//!     .age(54)
//!     .build()?;
//!
//! let verdict = classifier.predict(&record)?;
//! println!("{}", verdict.message());
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! The classifier is loaded once at startup and is safe to share across
//! threads behind `Arc`; predictions take `&self` and never mutate it.

pub mod artifact;
pub mod classifier;
pub mod features;
pub mod pages;
pub mod pipeline;
mod runtime;

pub use artifact::{ArtifactError, ArtifactStore};
pub use classifier::{ClassifierBuilder, ClassifierError, ClassifierInfo, HeartClassifier, Verdict};
pub use features::{chest_pain_description, FeatureRecord, FeatureRecordBuilder, Sex, FEATURE_COUNT, FIELD_NAMES};
pub use pages::Page;
pub use pipeline::{Prediction, PredictionPipeline, PredictionRequest};
pub use runtime::{create_session_builder, OptimizationLevel, RuntimeConfig};

pub fn init_logger() {
    env_logger::init();
}
