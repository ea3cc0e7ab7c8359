use std::path::Path;

use log::info;
use ndarray::Array4;
use thiserror::Error;
use tract_onnx::prelude::*;

use crate::preprocess::{CHANNELS, INPUT_SIZE};

#[derive(Error, Debug)]
pub enum ClassifierError {
    #[error("Model not found at path: {0}")]
    ModelNotFound(String),

    #[error(transparent)]
    Tract(#[from] TractError),

    #[error("model returned an empty output")]
    EmptyOutput,
}

/// A pretrained image classifier: takes a `(1, 224, 224, 3)` tensor and
/// returns one probability per class.
///
/// Implementations are shared between workers, so `predict` must be callable
/// concurrently through `&self`.
pub trait Classifier: Send + Sync {
    fn predict(&self, input: &Array4<f32>) -> Result<Vec<f32>, ClassifierError>;
}

type OnnxPlan = SimplePlan<TypedFact, Box<dyn TypedOp>, Graph<TypedFact, Box<dyn TypedOp>>>;

/// ONNX model loaded once at startup and optimized for a fixed NHWC input.
pub struct OnnxClassifier {
    plan: OnnxPlan,
}

impl OnnxClassifier {
    pub fn load(model_path: impl AsRef<Path>) -> Result<Self, ClassifierError> {
        let path = model_path.as_ref();
        if !path.exists() {
            return Err(ClassifierError::ModelNotFound(path.display().to_string()));
        }

        let side = INPUT_SIZE as usize;
        let plan = tract_onnx::onnx()
            .model_for_path(path)?
            .with_input_fact(0, f32::fact([1, side, side, CHANNELS]).into())?
            .into_optimized()?
            .into_runnable()?;

        info!("Loaded ONNX model from {}", path.display());
        Ok(Self { plan })
    }
}

fn to_tensor(input: &Array4<f32>) -> Tensor {
    input.clone().into()
}

impl Classifier for OnnxClassifier {
    fn predict(&self, input: &Array4<f32>) -> Result<Vec<f32>, ClassifierError> {
        let outputs = self.plan.run(tvec!(to_tensor(input).into()))?;
        let output = outputs.first().ok_or(ClassifierError::EmptyOutput)?;

        // first row of a [batch, classes] output
        let scores = output.as_slice::<f32>()?;
        let classes = output.shape().last().copied().unwrap_or(scores.len());
        let row = &scores[..classes.min(scores.len())];
        if row.is_empty() {
            return Err(ClassifierError::EmptyOutput);
        }

        Ok(row.to_vec())
    }
}
