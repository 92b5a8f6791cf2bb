/// Macro to generate a JSON schema from a type
#[macro_export]
macro_rules! schema_from_type {
    ($type:ty) => {{
        // Draft-07 is the newest draft understood by every MCP client we know of
        let settings = schemars::generate::SchemaSettings::draft07();
        let generator = settings.into_generator();
        let schema = generator.into_root_schema_for::<$type>();
        #[allow(clippy::panic)]
        let schema = match serde_json::to_value(schema) {
            Ok(serde_json::Value::Object(schema)) => schema,
            _ => panic!("Failed to generate schema for {}", stringify!($type)),
        };
        schema
    }};
}
