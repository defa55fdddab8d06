mod types;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use std::path::Path;
use tokio::fs;

pub use types::*;

use crate::core::{GenError, GenerateParams};
use crate::http_client::HTTP_CLIENT;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Credential variable read by the extended front-end
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Older name still honoured by the basic front-end
pub const LEGACY_API_KEY_VAR: &str = "GOOGLE_API_KEY";

/// Gemini API client
pub struct GeminiClient {
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Create a client from the first non-empty variable in `vars`
    pub fn from_env(vars: &[&'static str], base_url: &str) -> Result<Self, GenError> {
        let api_key = resolve_api_key(vars, |name| std::env::var(name).ok())?;
        Ok(Self::new(api_key, base_url))
    }

    /// Send one generateContent request and parse the reply
    pub async fn generate(
        &self,
        model: &str,
        request: &GenerateRequest,
    ) -> Result<GenerateResponse, GenError> {
        let endpoint = format!("{}/models/{}:generateContent", self.base_url, model);
        let url = format!("{}?key={}", endpoint, self.api_key);

        tracing::debug!("Sending generate request to: {}", endpoint);

        // reqwest errors echo the request URL, which carries the key
        let response = HTTP_CLIENT
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| GenError::Transport(e.without_url()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GenError::Transport(e.without_url()))?;

        tracing::debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(GenError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let response: GenerateResponse = serde_json::from_str(&body)?;
        Ok(response)
    }
}

/// Pick the API key from the first variable that holds a non-empty value
pub fn resolve_api_key<F>(vars: &[&'static str], lookup: F) -> Result<String, GenError>
where
    F: Fn(&str) -> Option<String>,
{
    vars.iter()
        .filter_map(|name| lookup(*name))
        .find(|value| !value.trim().is_empty())
        .ok_or_else(|| GenError::MissingApiKey {
            vars: vars.to_vec(),
        })
}

/// Build the API request body from resolved parameters and loaded references
pub fn build_generate_request(params: &GenerateParams, references: Vec<InlineData>) -> GenerateRequest {
    let mut parts: Vec<ContentPart> = references
        .into_iter()
        .map(|inline_data| ContentPart::InlineData { inline_data })
        .collect();

    parts.push(ContentPart::Text {
        text: params.prompt.clone(),
    });

    let image_config = ImageGenerationConfig {
        aspect_ratio: params.aspect_ratio.map(|ar| ar.as_str().to_string()),
        image_size: params.size.map(|s| s.as_str().to_string()),
        number_of_images: (params.count > 1).then_some(params.count),
    };

    GenerateRequest {
        contents: vec![Content { parts, role: None }],
        generation_config: GenerationConfig {
            response_modalities: vec!["TEXT".to_string(), "IMAGE".to_string()],
            image_generation_config: (!image_config.is_empty()).then_some(image_config),
        },
        tools: params.use_search.then(|| {
            vec![Tool {
                google_search: GoogleSearch::default(),
            }]
        }),
    }
}

/// MIME type for a reference image, by file extension
pub fn mime_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "image/png",
    }
}

/// Load an image file and encode it as an inline part
pub async fn load_image_base64(path: &Path) -> Result<InlineData, GenError> {
    let to_read_error = |source| GenError::InputRead {
        path: path.to_path_buf(),
        source,
    };

    if !fs::try_exists(path).await.map_err(to_read_error)? {
        return Err(GenError::InputNotFound(path.to_path_buf()));
    }

    let data = fs::read(path).await.map_err(to_read_error)?;

    Ok(InlineData {
        mime_type: mime_type_for(path).to_string(),
        data: BASE64.encode(&data),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AspectRatio, ImageSize, Model};
    use serde_json::json;

    #[test]
    fn mime_table_is_exact() {
        assert_eq!(mime_type_for(Path::new("a.png")), "image/png");
        assert_eq!(mime_type_for(Path::new("a.jpg")), "image/jpeg");
        assert_eq!(mime_type_for(Path::new("a.jpeg")), "image/jpeg");
        assert_eq!(mime_type_for(Path::new("a.gif")), "image/gif");
        assert_eq!(mime_type_for(Path::new("a.webp")), "image/webp");
        assert_eq!(mime_type_for(Path::new("a.JPG")), "image/jpeg");
    }

    #[test]
    fn unknown_or_missing_extension_is_png() {
        assert_eq!(mime_type_for(Path::new("a.bmp")), "image/png");
        assert_eq!(mime_type_for(Path::new("a.tiff")), "image/png");
        assert_eq!(mime_type_for(Path::new("noext")), "image/png");
    }

    #[test]
    fn text_only_request_shape() {
        let params = GenerateParams::new("a cosmic banana");
        let body = serde_json::to_value(build_generate_request(&params, Vec::new())).unwrap();

        assert_eq!(
            body,
            json!({
                "contents": [{"parts": [{"text": "a cosmic banana"}]}],
                "generationConfig": {"responseModalities": ["TEXT", "IMAGE"]}
            })
        );
    }

    #[test]
    fn full_request_shape() {
        let params = GenerateParams::new("make it anime")
            .with_count(3)
            .with_aspect_ratio(Some(AspectRatio::Landscape16x9))
            .with_size(Some(ImageSize::TwoK))
            .with_search(true);
        let references = vec![
            InlineData {
                mime_type: "image/jpeg".to_string(),
                data: "AAAA".to_string(),
            },
            InlineData {
                mime_type: "image/webp".to_string(),
                data: "BBBB".to_string(),
            },
        ];
        let body = serde_json::to_value(build_generate_request(&params, references)).unwrap();

        assert_eq!(
            body,
            json!({
                "contents": [{"parts": [
                    {"inlineData": {"mimeType": "image/jpeg", "data": "AAAA"}},
                    {"inlineData": {"mimeType": "image/webp", "data": "BBBB"}},
                    {"text": "make it anime"}
                ]}],
                "generationConfig": {
                    "responseModalities": ["TEXT", "IMAGE"],
                    "imageGenerationConfig": {
                        "aspectRatio": "16:9",
                        "imageSize": "2K",
                        "numberOfImages": 3
                    }
                },
                "tools": [{"google_search": {}}]
            })
        );
    }

    #[test]
    fn image_config_carries_only_set_fields() {
        let params = GenerateParams::new("x").with_size(Some(ImageSize::FourK));
        let body = serde_json::to_value(build_generate_request(&params, Vec::new())).unwrap();

        assert_eq!(
            body["generationConfig"]["imageGenerationConfig"],
            json!({"imageSize": "4K"})
        );
        assert!(body.get("tools").is_none());
    }

    #[test]
    fn resolve_api_key_falls_back_in_order() {
        let vars = [API_KEY_VAR, LEGACY_API_KEY_VAR];

        let key = resolve_api_key(&vars, |name| {
            (name == LEGACY_API_KEY_VAR).then(|| "legacy".to_string())
        })
        .unwrap();
        assert_eq!(key, "legacy");

        let key = resolve_api_key(&vars, |_| Some("both".to_string())).unwrap();
        assert_eq!(key, "both");
    }

    #[test]
    fn resolve_api_key_treats_empty_as_missing() {
        let err = resolve_api_key(&[API_KEY_VAR], |_| Some(String::new())).unwrap_err();
        assert!(matches!(err, GenError::MissingApiKey { .. }));
    }

    #[test]
    fn inline_data_without_mime_type_is_still_an_image() {
        let raw = json!({"candidates": [{"content": {"parts": [{"inlineData": {"data": "AQID"}}]}}]});
        let response: GenerateResponse = serde_json::from_value(raw).unwrap();
        let candidates = response.candidates.unwrap();
        let parts = &candidates[0].content.as_ref().unwrap().parts;

        assert!(matches!(
            &parts[0],
            ContentPart::InlineData { inline_data } if inline_data.data == "AQID" && inline_data.mime_type.is_empty()
        ));
    }

    #[tokio::test]
    async fn unreadable_reference_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("plain.png");
        std::fs::write(&file, b"png").unwrap();

        // a path below a regular file fails with ENOTDIR, not "not found"
        let err = load_image_base64(&file.join("child.png")).await.unwrap_err();
        assert!(matches!(err, GenError::InputRead { .. }), "got {err:?}");

        let err = load_image_base64(&dir.path().join("missing.png")).await.unwrap_err();
        assert!(matches!(err, GenError::InputNotFound(_)));
    }

    #[tokio::test]
    async fn transport_errors_do_not_reveal_the_key() {
        let client = GeminiClient::new("SECRET-KEY-123", "http://127.0.0.1:9/v1beta");
        let request = build_generate_request(&GenerateParams::new("x"), Vec::new());

        let err = client.generate(Model::Pro.id(), &request).await.unwrap_err();

        assert!(matches!(err, GenError::Transport(_)), "got {err:?}");
        assert!(!err.to_string().contains("SECRET-KEY-123"));
        assert!(!format!("{err:?}").contains("SECRET-KEY-123"));
    }

    #[test]
    fn parses_mixed_parts() {
        let raw = json!({
            "candidates": [{
                "content": {"role": "model", "parts": [
                    {"text": "Here you go", "thought": false},
                    {"inlineData": {"mimeType": "image/png", "data": "AQID"}},
                    {"thoughtSignature": "sig"}
                ]},
                "finishReason": "STOP"
            }]
        });
        let response: GenerateResponse = serde_json::from_value(raw).unwrap();
        let candidates = response.candidates.unwrap();
        let parts = &candidates[0].content.as_ref().unwrap().parts;

        assert!(matches!(&parts[0], ContentPart::Text { text } if text == "Here you go"));
        assert!(matches!(&parts[1], ContentPart::InlineData { inline_data } if inline_data.data == "AQID"));
        assert!(matches!(&parts[2], ContentPart::Other(_)));
    }
}
