pub mod schema;
pub mod validation;

pub use schema::{CompletionSchema, SchemaHandle};
pub use validation::{json_schema_response_format, validate_structured_payload};
