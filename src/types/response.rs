use std::any::{type_name, TypeId};

use serde_json::Value;

use crate::{
    error::{PlannerError, Result},
    schemas::{validate_structured_payload, CompletionSchema, SchemaHandle},
};

/// Parse the text a model returned into JSON.
///
/// Models occasionally wrap structured output in a markdown fence even when
/// asked for raw JSON; the fence is dropped before parsing.
pub fn parse_structured_content(content: &str) -> Result<Value> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(PlannerError::EmptyResponse);
    }

    let body = strip_code_fence(trimmed);
    serde_json::from_str(body).map_err(|err| {
        PlannerError::Validation(format!("response is not valid JSON: {}", err))
    })
}

fn strip_code_fence(content: &str) -> &str {
    let Some(rest) = content.strip_prefix("```") else {
        return content;
    };
    // Skip the optional language tag on the opening fence line.
    let rest = rest.split_once('\n').map(|(_, body)| body).unwrap_or("");
    rest.trim_end().strip_suffix("```").unwrap_or(rest).trim()
}

/// Validate `payload` against the schema of `T`, then deserialize it.
pub fn deserialize_structured_response<T>(payload: &Value, schema: &SchemaHandle) -> Result<T>
where
    T: CompletionSchema,
{
    ensure_schema_matches::<T>(schema)?;
    validate_structured_payload(schema, payload)?;

    let raw = payload.to_string();
    let mut deserializer = serde_json::Deserializer::from_str(&raw);
    let value = serde_path_to_error::deserialize(&mut deserializer).map_err(|err| {
        let path = err.path().to_string();
        let location = if path.is_empty() {
            "<root>".to_string()
        } else {
            path
        };
        PlannerError::Validation(format!(
            "failed to deserialize `{}` at {}: {}",
            schema.schema_name(),
            location,
            err
        ))
    })?;

    Ok(value)
}

fn ensure_schema_matches<T: 'static>(schema: &SchemaHandle) -> Result<()> {
    let expected = TypeId::of::<T>();
    if schema.type_id() != expected {
        return Err(PlannerError::Validation(format!(
            "schema `{}` describes `{}`, not `{}`",
            schema.schema_name(),
            schema.type_name(),
            type_name::<T>(),
        )));
    }
    Ok(())
}
