//! Conversions between Caption Studio types and Gemini wire types.

use crate::gemini::{GenerateContentRequest, GenerateContentResponse, GenerationConfig};
use captionstudio_core::{ResponseSchema, StructuredRequest};
use captionstudio_error::{GenerationError, GenerationErrorKind};
use serde_json::{Map, Value, json};

/// Render a response contract in Gemini's OpenAPI subset.
pub fn to_gemini_schema(schema: &ResponseSchema) -> Value {
    let properties: Map<String, Value> = schema
        .fields()
        .map(|field| {
            (
                field.name().to_string(),
                json!({
                    "type": "ARRAY",
                    "description": field.description(),
                    "items": {
                        "type": "STRING",
                        "description": field.item_description(),
                    },
                }),
            )
        })
        .collect();

    json!({
        "type": "OBJECT",
        "properties": properties,
        "required": schema.required(),
    })
}

/// Build the request body for a structured request.
///
/// # Errors
///
/// Only fails if the generation config cannot be assembled, which would
/// indicate a programming error; reported as a transport failure so it still
/// surfaces through the normal path.
pub fn to_gemini_request(
    request: &StructuredRequest,
) -> Result<GenerateContentRequest, GenerationError> {
    let config = GenerationConfig::builder()
        .response_mime_type("application/json")
        .response_schema(to_gemini_schema(request.schema()))
        .temperature(request.sampling().temperature)
        .top_p(request.sampling().top_p)
        .build()
        .map_err(|e| {
            GenerationError::new(GenerationErrorKind::Transport(format!(
                "Failed to build generation config: {}",
                e
            )))
        })?;

    Ok(GenerateContentRequest::new(request.prompt().clone(), config))
}

/// Concatenate the text parts of the first candidate.
///
/// # Errors
///
/// Returns `MalformedResponse` when the prompt was blocked, there is no
/// candidate, or the candidate carries no text.
pub fn extract_text(response: &GenerateContentResponse) -> Result<String, GenerationError> {
    if let Some(reason) = response
        .prompt_feedback
        .as_ref()
        .and_then(|f| f.block_reason.as_deref())
    {
        return Err(GenerationError::new(GenerationErrorKind::MalformedResponse(
            format!("Prompt blocked: {}", reason),
        )));
    }

    let candidate = response.candidates.first().ok_or_else(|| {
        GenerationError::new(GenerationErrorKind::MalformedResponse(
            "No candidates in response".to_string(),
        ))
    })?;

    let text: String = candidate
        .content
        .iter()
        .flat_map(|c| c.parts.iter())
        .filter_map(|p| p.text.as_deref())
        .collect();

    if text.trim().is_empty() {
        return Err(GenerationError::new(GenerationErrorKind::MalformedResponse(
            format!(
                "Candidate has no text (finish reason: {})",
                candidate.finish_reason.as_deref().unwrap_or("unknown")
            ),
        )));
    }

    Ok(text)
}
