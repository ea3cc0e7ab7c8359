use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use log::{error, info, warn};
use serde_json::json;

use crate::classifier::{Classifier, ClassifierError};
use crate::error::PredictError;
use crate::models::PredictionResponse;
use crate::preprocess;
use crate::upload;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/predict").route(web::post().to(predict)))
        .service(web::resource("/health").route(web::get().to(health)));
}

pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

pub async fn predict(
    mut payload: Multipart,
    classifier: web::Data<dyn Classifier>,
) -> Result<HttpResponse, PredictError> {
    match classify(&mut payload, classifier).await {
        Ok(response) => {
            info!(
                "Predicted class {} ({}) with probability {:.4}",
                response.class_id, response.disease_name, response.probability
            );
            Ok(HttpResponse::Ok().json(response))
        }
        Err(e) => {
            if e.is_client_error() {
                warn!("Rejected prediction request: {}", e);
            } else {
                error!("Prediction failed: {}", e);
            }
            Err(e)
        }
    }
}

async fn classify(
    payload: &mut Multipart,
    classifier: web::Data<dyn Classifier>,
) -> Result<PredictionResponse, PredictError> {
    let upload = upload::read_image(payload).await?;
    info!("Received {} ({} bytes)", upload.filename, upload.bytes.len());

    // decode, resize and inference are CPU bound
    let classifier = classifier.into_inner();
    let scores = web::block(move || -> Result<Vec<f32>, PredictError> {
        let input = preprocess::preprocess(&upload.bytes)?;
        Ok(classifier.predict(&input)?)
    })
    .await??;

    PredictionResponse::from_scores(&scores)
        .ok_or_else(|| ClassifierError::EmptyOutput.into())
}
