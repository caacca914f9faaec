use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

/// File name of the serialized classifier artifact.
pub const MODEL_FILE_NAME: &str = "hasilgenerate.onnx";

/// File name of the optional SHA-256 checksum sidecar.
pub const CHECKSUM_FILE_NAME: &str = "hasilgenerate.onnx.sha256";

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("Model artifact not found at {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
    #[error("Checksum mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: String, actual: String },
}

/// Locates and verifies the pre-trained model artifact on disk.
///
/// The artifact is a local file; there is no download path. The store only
/// answers "where is the model" and "is it intact", so that the fatal
/// missing-artifact case surfaces at startup rather than on the first
/// prediction.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    artifact_dir: PathBuf,
}

impl ArtifactStore {
    /// Creates a store over the default artifact directory.
    pub fn new_default() -> io::Result<Self> {
        Self::new(Self::default_artifact_dir())
    }

    /// Returns the default artifact directory path
    pub fn default_artifact_dir() -> PathBuf {
        // 1. Check environment variable
        if let Ok(path) = env::var("HEARTCHECK_CACHE") {
            return PathBuf::from(path).join("models");
        }

        // 2. Use platform-specific cache directory
        if let Some(cache_dir) = dirs::cache_dir() {
            return cache_dir.join("heartcheck").join("models");
        }

        // 3. Fallback to user's home directory
        if let Some(home_dir) = dirs::home_dir() {
            return home_dir.join(".cache").join("heartcheck").join("models");
        }

        // 4. If all else fails, use system temp directory (platform agnostic)
        env::temp_dir().join("heartcheck").join("models")
    }

    pub fn new<P: AsRef<Path>>(artifact_dir: P) -> io::Result<Self> {
        let artifact_dir = artifact_dir.as_ref().to_path_buf();
        fs::create_dir_all(&artifact_dir)?;
        Ok(Self { artifact_dir })
    }

    pub fn model_path(&self) -> PathBuf {
        self.artifact_dir.join(MODEL_FILE_NAME)
    }

    pub fn checksum_path(&self) -> PathBuf {
        self.artifact_dir.join(CHECKSUM_FILE_NAME)
    }

    pub fn is_model_present(&self) -> bool {
        let model_path = self.model_path();
        log::info!("Checking for model artifact at {:?} (exists: {})", model_path, model_path.exists());
        model_path.exists()
    }

    /// Verifies the artifact against its checksum sidecar.
    ///
    /// A store without a sidecar file verifies trivially; the sidecar is for
    /// deployments that ship one next to the model.
    pub fn verify_model(&self) -> Result<bool, ArtifactError> {
        let model_path = self.model_path();
        if !model_path.exists() {
            log::info!("Model artifact does not exist at {:?}", model_path);
            return Ok(false);
        }

        let checksum_path = self.checksum_path();
        if !checksum_path.exists() {
            log::info!("No checksum sidecar at {:?}, skipping verification", checksum_path);
            return Ok(true);
        }

        let expected = fs::read_to_string(&checksum_path)?;
        let expected = expected.split_whitespace().next().unwrap_or("").to_lowercase();
        let actual = Self::file_sha256(&model_path)?;
        log::info!("Calculated hash: {}", actual);
        log::info!("Expected hash:   {}", expected);
        Ok(actual == expected)
    }

    /// Resolves the model path, failing fast if the artifact is missing or
    /// corrupt. This is the startup gate: a failure here is fatal for the
    /// process and there is no retry.
    pub fn ensure_model_available(&self) -> Result<PathBuf, ArtifactError> {
        let model_path = self.model_path();
        if !model_path.exists() {
            log::error!("Model artifact missing at {:?}", model_path);
            return Err(ArtifactError::NotFound(model_path));
        }
        if !self.verify_model()? {
            let expected = fs::read_to_string(self.checksum_path())
                .map(|s| s.split_whitespace().next().unwrap_or("").to_lowercase())
                .unwrap_or_default();
            let actual = Self::file_sha256(&model_path)?;
            return Err(ArtifactError::ChecksumMismatch { expected, actual });
        }
        log::info!("Model artifact ready at {:?}", model_path);
        Ok(model_path)
    }

    fn file_sha256(path: &Path) -> Result<String, ArtifactError> {
        let bytes = fs::read(path)?;
        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        Ok(format!("{:x}", hasher.finalize()))
    }
}
