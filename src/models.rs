use serde::Serialize;

use crate::catalog::{self, Disease};

/// Lesion descriptors returned with every prediction. These are fixed
/// values, not measured from the image.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct LesionFeatures {
    pub asymmetry: &'static str,
    pub border: &'static str,
    pub color: &'static str,
    pub diameter: &'static str,
    pub evolution: &'static str,
}

impl LesionFeatures {
    pub const PLACEHOLDER: LesionFeatures = LesionFeatures {
        asymmetry: "low",
        border: "irregular",
        color: "mixed",
        diameter: "medium",
        evolution: "stable",
    };
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResponse {
    pub class_id: String,
    pub probability: f32,
    pub is_malignant: bool,
    pub disease_name: &'static str,
    pub features: LesionFeatures,
    pub recommendation: &'static str,
}

impl PredictionResponse {
    /// Builds the response for a classifier output vector, or `None` when
    /// the vector is empty.
    pub fn from_scores(scores: &[f32]) -> Option<Self> {
        let (class_id, probability) = argmax(scores)?;
        let disease = Disease::from_class_id(class_id);

        Some(Self {
            class_id: class_id.to_string(),
            probability,
            is_malignant: catalog::is_malignant(class_id),
            disease_name: catalog::disease_name(disease),
            features: LesionFeatures::PLACEHOLDER,
            recommendation: catalog::recommendation_for(disease),
        })
    }
}

/// Index and value of the largest score. Ties go to the first index, and a
/// NaN wins over any number, as numpy's argmax does.
pub fn argmax(scores: &[f32]) -> Option<(usize, f32)> {
    let mut best: Option<(usize, f32)> = None;
    for (index, &score) in scores.iter().enumerate() {
        match best {
            Some((_, top)) if top.is_nan() => break,
            Some((_, top)) if !(score.is_nan() || score > top) => {}
            _ => best = Some((index, score)),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_melanoma_scenario() {
        let scores = [0.1, 0.0, 0.0, 0.0, 0.85, 0.0, 0.0, 0.05];
        let response = PredictionResponse::from_scores(&scores).unwrap();

        assert_eq!(response.class_id, "4");
        assert_eq!(response.probability, 0.85);
        assert!(response.is_malignant);
        assert_eq!(response.disease_name, "Melanoma");
        assert_eq!(
            response.recommendation,
            "Segera konsultasi dengan dokter kulit untuk evaluasi lebih lanjut dan penanganan."
        );
    }

    #[test]
    fn test_malignancy_follows_class_id() {
        for winner in 0..8 {
            let mut scores = vec![0.01; 8];
            scores[winner] = 0.9;
            let response = PredictionResponse::from_scores(&scores).unwrap();
            assert_eq!(response.class_id, winner.to_string());
            assert_eq!(response.is_malignant, matches!(winner, 0 | 4 | 5));
            assert_ne!(response.disease_name, "Unknown");
        }
    }

    #[test]
    fn test_unmapped_class_id() {
        let mut scores = vec![0.0; 10];
        scores[9] = 1.0;
        let response = PredictionResponse::from_scores(&scores).unwrap();

        assert_eq!(response.class_id, "9");
        assert!(!response.is_malignant);
        assert_eq!(response.disease_name, "Unknown");
        assert_eq!(response.recommendation, "Consult a dermatologist");
    }

    #[test]
    fn test_empty_scores() {
        assert_eq!(PredictionResponse::from_scores(&[]), None);
        assert_eq!(argmax(&[]), None);
    }

    #[test]
    fn test_argmax_ties_and_nan() {
        assert_eq!(argmax(&[0.2, 0.4, 0.4, 0.0]), Some((1, 0.4)));
        assert_eq!(argmax(&[-3.0, -1.0, -2.0]), Some((1, -1.0)));

        let (index, value) = argmax(&[0.5, f32::NAN, 0.9, f32::NAN]).unwrap();
        assert_eq!(index, 1);
        assert!(value.is_nan());
    }

    #[test]
    fn test_serialized_field_names() {
        let scores = [0.7, 0.1, 0.1, 0.1];
        let value = serde_json::to_value(PredictionResponse::from_scores(&scores).unwrap()).unwrap();

        assert_eq!(value["classId"], "0");
        assert_eq!(value["isMalignant"], true);
        assert_eq!(value["diseaseName"], "Actinic keratosis");
        assert_eq!(
            value["features"],
            json!({
                "asymmetry": "low",
                "border": "irregular",
                "color": "mixed",
                "diameter": "medium",
                "evolution": "stable"
            })
        );
        assert!(value["recommendation"].is_string());
        assert!(value["probability"].is_number());
    }
}
