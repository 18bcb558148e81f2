use schemars::{gen::SchemaSettings, JsonSchema};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::{
    any::{type_name, TypeId},
    sync::Arc,
};

/// Cached JSON schema handle associated with a response type.
#[derive(Clone, Debug)]
pub struct SchemaHandle {
    schema_name: &'static str,
    type_name: &'static str,
    type_id: TypeId,
    schema_json: Arc<Value>,
}

impl SchemaHandle {
    /// Build the draft-07 schema for `T` with every subschema inlined, so the
    /// document can be handed to a structured-output endpoint as is.
    pub fn for_type<T: JsonSchema + 'static>(schema_name: &'static str) -> Self {
        let root = SchemaSettings::draft07()
            .with(|settings| {
                settings.inline_subschemas = true;
            })
            .into_generator()
            .into_root_schema_for::<T>();

        let schema_json = serde_json::to_value(root).unwrap_or_else(|err| {
            panic!("failed to serialize schema for {}: {}", type_name::<T>(), err)
        });

        Self {
            schema_name,
            type_name: type_name::<T>(),
            type_id: TypeId::of::<T>(),
            schema_json: Arc::new(schema_json),
        }
    }

    pub fn schema_name(&self) -> &'static str {
        self.schema_name
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn schema_json(&self) -> &Value {
        self.schema_json.as_ref()
    }

    /// Required top-level properties, in declaration order.
    pub fn required_fields(&self) -> Vec<&str> {
        self.schema_json
            .get("required")
            .and_then(Value::as_array)
            .map(|fields| fields.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }
}

/// A type the generation service is asked to produce.
pub trait CompletionSchema: DeserializeOwned + Send + Sync + 'static {
    fn schema() -> &'static SchemaHandle;
}
