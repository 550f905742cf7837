// SPDX-License-Identifier: MPL-2.0
//! Request/response shapes for the `generateContent` REST endpoint, plus the
//! prompts. Parsing is kept free of I/O so it can be tested against canned
//! bodies.

use crate::error::ServiceError;
use crate::media::{GeneratedImage, SourceImage};
use serde::{Deserialize, Serialize};

/// Verdict returned by the validation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Validation {
    pub is_valid: bool,
    pub reason: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_modalities: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<Content>,
}

const VALIDATION_PROMPT: &str = "Analyze the provided image. Does it contain one or more clear, \
high-quality human faces, with a face as the main subject? Respond only with a JSON object of \
the shape {\"isValid\": boolean, \"reason\": string}. If valid, reason must be 'valid portrait'. \
If invalid, give a brief reason such as 'no face detected', 'image too blurry', or 'face too \
small in frame'.";

fn transform_prompt(destination: &str) -> String {
    format!(
        "You are an expert digital artist specializing in cultural makeovers. Using the provided \
portrait, reimagine the person as a local of {destination}.\n\
- Clothing: dress them in beautiful, authentic traditional attire of {destination}.\n\
- Hair: style their hair in a way characteristic of {destination}.\n\
- Background: replace the background with a stunning, iconic scene from {destination}, such as \
a famous landmark or striking natural landscape.\n\
- Key constraint: do not change the person's facial features, identity, or skin tone. Their \
face must remain clearly recognizable as the person in the original photo.\n\
- Output: a high-quality, photorealistic image with no added text or watermarks."
    )
}

fn image_part(image: &SourceImage) -> Part {
    Part {
        inline_data: Some(InlineData {
            mime_type: image.media_type().to_string(),
            data: image.to_base64(),
        }),
        ..Part::default()
    }
}

fn text_part(text: impl Into<String>) -> Part {
    Part {
        text: Some(text.into()),
        ..Part::default()
    }
}

/// Request body for the validation call: image + instruction, with a JSON
/// response schema so the verdict comes back machine-readable.
pub fn validation_request(image: &SourceImage) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content {
            parts: vec![image_part(image), text_part(VALIDATION_PROMPT)],
        }],
        generation_config: Some(GenerationConfig {
            response_mime_type: Some("application/json".to_string()),
            response_schema: Some(serde_json::json!({
                "type": "OBJECT",
                "properties": {
                    "isValid": { "type": "BOOLEAN" },
                    "reason": { "type": "STRING" }
                },
                "required": ["isValid", "reason"]
            })),
            response_modalities: None,
        }),
    }
}

/// Request body for the makeover call: image + prompt, image output allowed.
pub fn transform_request(image: &SourceImage, destination: &str) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content {
            parts: vec![image_part(image), text_part(transform_prompt(destination))],
        }],
        generation_config: Some(GenerationConfig {
            response_mime_type: None,
            response_schema: None,
            response_modalities: Some(vec!["IMAGE".to_string(), "TEXT".to_string()]),
        }),
    }
}

fn first_candidate_parts(body: &str) -> Result<Vec<Part>, ServiceError> {
    let response: GenerateContentResponse =
        serde_json::from_str(body).map_err(|e| ServiceError::MalformedReply(e.to_string()))?;
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| ServiceError::MalformedReply("no candidates".to_string()))?;
    Ok(candidate.content.map(|c| c.parts).unwrap_or_default())
}

/// Extracts the validation verdict from a reply body.
pub fn parse_validation_reply(body: &str) -> Result<Validation, ServiceError> {
    let parts = first_candidate_parts(body)?;
    let text = parts
        .iter()
        .find_map(|part| part.text.as_deref())
        .ok_or_else(|| ServiceError::MalformedReply("no text part".to_string()))?;
    serde_json::from_str(text.trim())
        .map_err(|e| ServiceError::MalformedReply(format!("verdict: {}", e)))
}

/// Extracts the generated image from a reply body.
pub fn parse_transform_reply(body: &str) -> Result<GeneratedImage, ServiceError> {
    let parts = first_candidate_parts(body)?;
    let inline = parts
        .into_iter()
        .find_map(|part| part.inline_data)
        .ok_or(ServiceError::NoImage)?;
    GeneratedImage::from_parts(&inline.mime_type, &inline.data)
        .map_err(|e| ServiceError::MalformedReply(e.to_string()))
}
