/// Name reported for a class id the catalog does not know.
pub const UNKNOWN_DISEASE: &str = "Unknown";

/// Advice reported when the disease has no catalog entry.
pub const DEFAULT_RECOMMENDATION: &str = "Consult a dermatologist";

/// Class ids flagged as malignant.
///
/// Includes actinic keratosis (0), which is generally pre-malignant.
pub const MALIGNANT_CLASS_IDS: [usize; 3] = [0, 4, 5];

/// The eight skin conditions the model was trained on, in class id order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disease {
    ActinicKeratosis,
    BenignKeratosis,
    Dermatofibroma,
    MelanocyticNevus,
    Melanoma,
    SquamousCellCarcinoma,
    TineaRingwormCandidiasis,
    VascularLesion,
}

impl Disease {
    pub const ALL: [Disease; 8] = [
        Disease::ActinicKeratosis,
        Disease::BenignKeratosis,
        Disease::Dermatofibroma,
        Disease::MelanocyticNevus,
        Disease::Melanoma,
        Disease::SquamousCellCarcinoma,
        Disease::TineaRingwormCandidiasis,
        Disease::VascularLesion,
    ];

    pub fn from_class_id(class_id: usize) -> Option<Disease> {
        Self::ALL.get(class_id).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Disease::ActinicKeratosis => "Actinic keratosis",
            Disease::BenignKeratosis => "Benign keratosis",
            Disease::Dermatofibroma => "Dermatofibroma",
            Disease::MelanocyticNevus => "Melanocytic nevus",
            Disease::Melanoma => "Melanoma",
            Disease::SquamousCellCarcinoma => "Squamous cell carcinoma",
            Disease::TineaRingwormCandidiasis => "Tinea Ringworm Candidiasis",
            Disease::VascularLesion => "Vascular lesion",
        }
    }

    pub fn recommendation(self) -> &'static str {
        match self {
            Disease::ActinicKeratosis => {
                "Perlu evaluasi dokter kulit. Dapat diobati dengan krioterapi atau resep obat topikal."
            }
            Disease::BenignKeratosis => {
                "Tidak memerlukan perawatan kecuali mengganggu secara kosmetik."
            }
            Disease::Dermatofibroma => "Tidak memerlukan perawatan kecuali menyebabkan gejala.",
            Disease::MelanocyticNevus => {
                "Pantau perubahan bentuk, warna, atau ukuran. Konsultasi jika ada perubahan."
            }
            Disease::Melanoma => {
                "Segera konsultasi dengan dokter kulit untuk evaluasi lebih lanjut dan penanganan."
            }
            Disease::SquamousCellCarcinoma => {
                "Perlu penanganan medis segera dengan operasi atau terapi lainnya."
            }
            Disease::TineaRingwormCandidiasis => {
                "Dapat diobati dengan obat antijamur topikal atau oral."
            }
            Disease::VascularLesion => {
                "Evaluasi oleh dokter untuk menentukan perlu tidaknya perawatan."
            }
        }
    }
}

pub fn disease_name(disease: Option<Disease>) -> &'static str {
    disease.map_or(UNKNOWN_DISEASE, Disease::name)
}

pub fn recommendation_for(disease: Option<Disease>) -> &'static str {
    disease.map_or(DEFAULT_RECOMMENDATION, Disease::recommendation)
}

pub fn is_malignant(class_id: usize) -> bool {
    MALIGNANT_CLASS_IDS.contains(&class_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_class_is_mapped() {
        for (id, disease) in Disease::ALL.iter().enumerate() {
            assert_eq!(Disease::from_class_id(id), Some(*disease));
            assert_ne!(disease.name(), UNKNOWN_DISEASE);
            assert_ne!(disease.recommendation(), DEFAULT_RECOMMENDATION);
        }
    }

    #[test]
    fn test_unknown_class_falls_back() {
        assert_eq!(Disease::from_class_id(8), None);
        assert_eq!(disease_name(Disease::from_class_id(8)), "Unknown");
        assert_eq!(
            recommendation_for(Disease::from_class_id(42)),
            "Consult a dermatologist"
        );
    }

    #[test]
    fn test_malignant_set() {
        let malignant: Vec<usize> = (0..16).filter(|&id| is_malignant(id)).collect();
        assert_eq!(malignant, vec![0, 4, 5]);
        assert_eq!(Disease::from_class_id(4).map(Disease::name), Some("Melanoma"));
        assert_eq!(
            Disease::from_class_id(5).map(Disease::name),
            Some("Squamous cell carcinoma")
        );
    }
}
