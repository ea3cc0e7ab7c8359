use actix_multipart::MultipartError;
use actix_web::{error::BlockingError, http::StatusCode, HttpResponse, ResponseError};
use log::debug;
use serde_json::json;
use thiserror::Error;

use crate::classifier::ClassifierError;

/// Everything that can go wrong while serving `POST /predict`.
///
/// The first three variants are client mistakes and map to 400; the rest are
/// processing failures and map to 500 with the underlying message unchanged.
#[derive(Error, Debug)]
pub enum PredictError {
    #[error("No image uploaded")]
    MissingImage,

    #[error("Empty filename")]
    EmptyFilename,

    #[error("Invalid file type")]
    InvalidFileType,

    #[error("{0}")]
    Decode(#[from] image::ImageError),

    #[error("{0}")]
    Classifier(#[from] ClassifierError),

    #[error("{0}")]
    Blocking(#[from] BlockingError),
}

/// A body that cannot be parsed as multipart yields no file fields, so every
/// multipart failure reads as a missing upload.
impl From<MultipartError> for PredictError {
    fn from(e: MultipartError) -> Self {
        debug!("Discarding unreadable multipart body: {}", e);
        PredictError::MissingImage
    }
}

impl PredictError {
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }
}

impl ResponseError for PredictError {
    fn status_code(&self) -> StatusCode {
        match self {
            PredictError::MissingImage
            | PredictError::EmptyFilename
            | PredictError::InvalidFileType => StatusCode::BAD_REQUEST,
            PredictError::Decode(_) | PredictError::Classifier(_) | PredictError::Blocking(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "error": self.to_string()
        }))
    }
}
