//! One generation run: load references, call the API, write the images.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::api::{
    build_generate_request, load_image_base64, ContentPart, GeminiClient, GenerateResponse,
};
use crate::core::{output_path_for, GenError, GenerateParams};

/// Drives a single request/response exchange against a [`GeminiClient`]
pub struct ImageGenerator {
    client: GeminiClient,
}

impl ImageGenerator {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    /// Generate images for `params` and return the written paths in order.
    ///
    /// Text parts from the model are handed to `on_text` as they are
    /// encountered. Reference images are all loaded before the request is
    /// sent, so a missing input never costs a network call.
    pub async fn generate<F>(&self, params: &GenerateParams, on_text: F) -> Result<Vec<PathBuf>, GenError>
    where
        F: FnMut(&str),
    {
        let mut references = Vec::with_capacity(params.input_images.len());
        for path in &params.input_images {
            references.push(load_image_base64(path).await?);
        }

        let request = build_generate_request(params, references);
        let response = self.client.generate(&params.model, &request).await?;

        save_images(response, &params.output, params.count, on_text).await
    }
}

/// Decode and write every inline image of the first candidate.
pub async fn save_images<F>(
    response: GenerateResponse,
    output: &Path,
    count: u32,
    mut on_text: F,
) -> Result<Vec<PathBuf>, GenError>
where
    F: FnMut(&str),
{
    if let Some(feedback) = &response.prompt_feedback {
        if let Some(reason) = &feedback.block_reason {
            tracing::warn!("Prompt was blocked: {}", reason);
        }
    }

    let mut candidates = response
        .candidates
        .filter(|c| !c.is_empty())
        .ok_or(GenError::NoCandidates)?;

    if candidates.len() > 1 {
        tracing::debug!("Ignoring {} additional candidate(s)", candidates.len() - 1);
    }
    let first = candidates.swap_remove(0);

    if let Some(reason) = &first.finish_reason {
        tracing::debug!("Finish reason: {}", reason);
    }

    let parts = first.content.map(|c| c.parts).unwrap_or_default();
    let mut saved = Vec::new();

    for part in parts {
        match part {
            ContentPart::InlineData { inline_data } => {
                let bytes = BASE64.decode(inline_data.data.as_bytes())?;
                let path = output_path_for(output, count, saved.len());
                write_image(&path, &bytes).await?;

                tracing::info!("Saved {} ({}) to: {}", inline_data.mime_type, bytes.len(), path.display());
                saved.push(path);
            }
            ContentPart::Text { text } => on_text(&text),
            ContentPart::Other(value) => {
                tracing::debug!("Skipping unrecognised part: {}", value);
            }
        }
    }

    if saved.is_empty() {
        return Err(GenError::NoImageData);
    }

    Ok(saved)
}

async fn write_image(path: &Path, bytes: &[u8]) -> Result<(), GenError> {
    let to_write_error = |source| GenError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await.map_err(to_write_error)?;
    }
    fs::write(path, bytes).await.map_err(to_write_error)
}
