use actix_multipart::Multipart;
use futures_util::StreamExt;

use crate::error::PredictError;

/// Multipart field that carries the image.
pub const IMAGE_FIELD: &str = "image";

pub const ALLOWED_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// An uploaded file whose name passed validation.
#[derive(Debug)]
pub struct Upload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// True when the text after the last `.` is an allowed extension, ignoring case.
pub fn allowed_file(filename: &str) -> bool {
    filename.rsplit_once('.').map_or(false, |(_, ext)| {
        ALLOWED_EXTENSIONS
            .iter()
            .any(|allowed| ext.eq_ignore_ascii_case(allowed))
    })
}

/// Checks presence, then emptiness, then extension.
pub fn validate_filename(filename: Option<&str>) -> Result<&str, PredictError> {
    let filename = filename.ok_or(PredictError::MissingImage)?;
    if filename.is_empty() {
        return Err(PredictError::EmptyFilename);
    }
    if !allowed_file(filename) {
        return Err(PredictError::InvalidFileType);
    }
    Ok(filename)
}

/// Pulls the first `image` file field out of a multipart body.
///
/// A field named `image` without a `filename` parameter is a plain form value
/// and is skipped. The file contents are read only once the name checks out.
/// A body that is not readable multipart, including one cut off mid-part,
/// fails with `MissingImage`.
pub async fn read_image(payload: &mut Multipart) -> Result<Upload, PredictError> {
    while let Some(item) = payload.next().await {
        let mut field = item?;

        let disposition = field.content_disposition();
        if disposition.get_name() != Some(IMAGE_FIELD) {
            continue;
        }
        let filename = match disposition.get_filename() {
            Some(name) => validate_filename(Some(name))?.to_owned(),
            None => continue,
        };

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            bytes.extend_from_slice(&chunk?);
        }

        return Ok(Upload { filename, bytes });
    }

    Err(PredictError::MissingImage)
}
