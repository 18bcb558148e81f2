use crate::{error::PlannerError, schemas::SchemaHandle};
use jsonschema::{Draft, JSONSchema};
use serde_json::{json, Value};

const MAX_SCHEMA_ERRORS: usize = 3;

/// Validate a structured payload against a schema
pub fn validate_structured_payload(
    schema: &SchemaHandle,
    payload: &Value,
) -> std::result::Result<(), PlannerError> {
    let validator = JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(schema.schema_json())
        .map_err(|err| {
            PlannerError::Validation(format!(
                "Failed to prepare `{}` schema for validation: {}",
                schema.schema_name(),
                err
            ))
        })?;

    if let Err(errors) = validator.validate(payload) {
        let mut details = Vec::new();
        let mut truncated = false;

        for (idx, error) in errors.enumerate() {
            if idx < MAX_SCHEMA_ERRORS {
                let mut path = error.instance_path.to_string();
                if path.is_empty() {
                    path = "<root>".to_string();
                }
                details.push(format!("{}: {}", path, error));
            } else {
                truncated = true;
                break;
            }
        }

        let mut detail_str = if details.is_empty() {
            "structured payload failed schema validation".to_string()
        } else {
            details.join("; ")
        };

        if truncated {
            detail_str.push_str("; additional errors truncated");
        }

        return Err(PlannerError::Validation(format!(
            "Structured payload does not match `{}` schema: {}",
            schema.schema_name(),
            detail_str
        )));
    }

    Ok(())
}

/// `response_format` body asking an OpenAI-compatible endpoint for JSON that
/// follows `schema`.
pub fn json_schema_response_format(schema: &SchemaHandle) -> Value {
    let mut document = schema.schema_json().clone();
    if let Some(object) = document.as_object_mut() {
        // Structured-output endpoints reject the meta-schema keyword.
        object.remove("$schema");
    }

    json!({
        "type": "json_schema",
        "json_schema": {
            "name": schema.schema_name(),
            "schema": document
        }
    })
}
