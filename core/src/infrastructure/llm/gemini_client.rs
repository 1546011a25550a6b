use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{
    common::{LLMConfig, entities::app_errors::CoreError},
    recipe::ports::TextGenerator,
    vision::{
        entities::{Detection, ImagePayload},
        ports::{ImageCaptioner, ObjectDetector},
        schema::get_detection_schema,
    },
    vocabulary::VOCABULARY,
};

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

const CAPTION_PROMPT: &str = "Describe this image in one short sentence. \
Name the foods and ingredients that are visible.";

const DETECTION_PROMPT: &str = "List every distinct object visible in this image. \
Use short lowercase nouns as labels (for example \"banana\", \"bowl\", \"bell pepper\") \
and give each a confidence score between 0 and 1.";

#[derive(Debug, Clone)]
pub struct GeminiLLMClient {
    api_key: String,
    model_name: String,
    base_url: String,
    temperature: f32,
    max_output_tokens: u32,
    detection_threshold: f32,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Default, Serialize)]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: ContentResponse,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    text: String,
}

#[derive(Debug, Deserialize)]
struct DetectionResponse {
    objects: Vec<DetectedObject>,
}

#[derive(Debug, Deserialize)]
struct DetectedObject {
    label: String,
    score: f32,
}

impl GeminiLLMClient {
    pub fn new(config: &LLMConfig, detection_threshold: f32) -> Self {
        Self {
            api_key: config.gemini_api_key.clone(),
            model_name: config.gemini_model.clone(),
            base_url: config.gemini_base_url.trim_end_matches('/').to_string(),
            temperature: config.temperature,
            max_output_tokens: config.max_output_tokens,
            detection_threshold,
            client: Client::new(),
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    async fn call_gemini_api(&self, request: GeminiRequest) -> Result<String, CoreError> {
        if !self.is_configured() {
            return Err(CoreError::ExternalServiceError(
                "Gemini API key is not configured".to_string(),
            ));
        }

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model_name, self.api_key
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Gemini API request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        gemini_response
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.clone())
            .ok_or_else(|| CoreError::ExternalServiceError("No response from LLM".to_string()))
    }

    fn image_request(
        prompt: &str,
        image: &ImagePayload,
        generation_config: Option<GenerationConfig>,
    ) -> GeminiRequest {
        GeminiRequest {
            contents: vec![Content {
                parts: vec![
                    Part::Text {
                        text: prompt.to_string(),
                    },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: image.mime_type.clone(),
                            data: image.to_base64(),
                        },
                    },
                ],
            }],
            generation_config,
        }
    }

    /// Keeps confident, food-related detections, one per label.
    fn filter_detections(&self, objects: Vec<DetectedObject>) -> Vec<Detection> {
        let mut detections: Vec<Detection> = Vec::new();

        for object in objects {
            let label = object.label.trim();
            let score = object.score.clamp(0.0, 1.0);
            debug!("Detected: {} with confidence {:.2}", label, score);

            if label.is_empty() || score < self.detection_threshold {
                continue;
            }
            if !VOCABULARY.is_detectable_food(label) {
                continue;
            }

            match detections
                .iter_mut()
                .find(|d| d.label.eq_ignore_ascii_case(label))
            {
                Some(existing) if existing.score < score => existing.score = score,
                Some(_) => {}
                None => detections.push(Detection::new(label, score)),
            }
        }

        detections
    }
}

impl ImageCaptioner for GeminiLLMClient {
    async fn caption(&self, image: ImagePayload) -> Result<String, CoreError> {
        let request = Self::image_request(CAPTION_PROMPT, &image, None);

        let caption = self.call_gemini_api(request).await?;
        Ok(caption.trim().to_string())
    }
}

impl ObjectDetector for GeminiLLMClient {
    async fn detect(&self, image: ImagePayload) -> Result<Vec<Detection>, CoreError> {
        let request = Self::image_request(
            DETECTION_PROMPT,
            &image,
            Some(GenerationConfig {
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(get_detection_schema()),
                ..Default::default()
            }),
        );

        let raw_response = self.call_gemini_api(request).await?;

        let parsed: DetectionResponse = serde_json::from_str(&raw_response).map_err(|e| {
            tracing::error!("Invalid detection format: {}", e);
            CoreError::ExternalServiceError(format!("Invalid detection format: {}", e))
        })?;

        Ok(self.filter_detections(parsed.objects))
    }
}

impl TextGenerator for GeminiLLMClient {
    async fn generate_text(&self, prompt: String) -> Result<String, CoreError> {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part::Text { text: prompt }],
            }],
            generation_config: Some(GenerationConfig {
                temperature: Some(self.temperature),
                max_output_tokens: Some(self.max_output_tokens),
                ..Default::default()
            }),
        };

        self.call_gemini_api(request).await
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use image::{ImageBuffer, ImageFormat, Rgb};
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{body_string_contains, method, path, query_param},
    };

    use super::*;

    const MODEL: &str = "test-model";
    const GENERATE_PATH: &str = "/models/test-model:generateContent";

    fn config(base_url: &str, api_key: &str) -> LLMConfig {
        LLMConfig {
            gemini_api_key: api_key.to_string(),
            gemini_model: MODEL.to_string(),
            gemini_base_url: base_url.to_string(),
            temperature: 0.8,
            max_output_tokens: 512,
        }
    }

    fn sample_image() -> ImagePayload {
        let buffer = ImageBuffer::from_pixel(3, 3, Rgb([255u8, 255, 255]));
        let mut bytes = Cursor::new(Vec::new());
        buffer
            .write_to(&mut bytes, ImageFormat::Png)
            .expect("encode png");
        ImagePayload::from_bytes(bytes.into_inner()).expect("valid png")
    }

    fn gemini_text(text: &str) -> serde_json::Value {
        json!({
            "candidates": [
                { "content": { "parts": [ { "text": text } ] } }
            ]
        })
    }

    #[tokio::test]
    async fn test_caption_sends_inline_image() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .and(query_param("key", "secret"))
            .and(body_string_contains("image/png"))
            .and(body_string_contains("Describe this image"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(gemini_text(" a bowl of tomato soup \n")),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = GeminiLLMClient::new(&config(&server.uri(), "secret"), 0.3);
        let caption = client.caption(sample_image()).await.expect("caption");

        assert_eq!(caption, "a bowl of tomato soup");
    }

    #[tokio::test]
    async fn test_detect_filters_threshold_and_non_food() {
        let server = MockServer::start().await;
        let objects = json!({
            "objects": [
                { "label": "banana", "score": 0.92 },
                { "label": "banana", "score": 0.95 },
                { "label": "person", "score": 0.99 },
                { "label": "carrot", "score": 0.1 },
                { "label": "dining table", "score": 0.6 }
            ]
        })
        .to_string();
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .and(body_string_contains("response_schema"))
            .respond_with(ResponseTemplate::new(200).set_body_json(gemini_text(&objects)))
            .mount(&server)
            .await;

        let client = GeminiLLMClient::new(&config(&server.uri(), "secret"), 0.3);
        let detections = client.detect(sample_image()).await.expect("detections");

        assert_eq!(
            detections,
            vec![
                Detection::new("banana", 0.95),
                Detection::new("dining table", 0.6)
            ]
        );
    }

    #[tokio::test]
    async fn test_detect_rejects_malformed_json() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(gemini_text("not json")))
            .mount(&server)
            .await;

        let client = GeminiLLMClient::new(&config(&server.uri(), "secret"), 0.3);
        let result = client.detect(sample_image()).await;

        assert!(matches!(result, Err(CoreError::ExternalServiceError(_))));
    }

    #[tokio::test]
    async fn test_generate_text_sends_generation_config() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .and(body_string_contains("Recipe with ingredients: rice"))
            .and(body_string_contains("max_output_tokens"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(gemini_text("Rice Bowl\nIngredients:")),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = GeminiLLMClient::new(&config(&server.uri(), "secret"), 0.3);
        let text = client
            .generate_text("Recipe with ingredients: rice\n\n".to_string())
            .await
            .expect("text");

        assert_eq!(text, "Rice Bowl\nIngredients:");
    }

    #[tokio::test]
    async fn test_api_error_status_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
            .mount(&server)
            .await;

        let client = GeminiLLMClient::new(&config(&server.uri(), "secret"), 0.3);
        let result = client.generate_text("prompt".to_string()).await;

        assert!(
            matches!(result, Err(CoreError::ExternalServiceError(message)) if message.contains("503"))
        );
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_without_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(gemini_text("unused")))
            .expect(0)
            .mount(&server)
            .await;

        let client = GeminiLLMClient::new(&config(&server.uri(), ""), 0.3);

        assert!(!client.is_configured());
        assert!(client.caption(sample_image()).await.is_err());
    }
}
