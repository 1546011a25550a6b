use serde_json::json;

/// Returns the JSON schema for object detection LLM responses
pub fn get_detection_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "objects": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "label": { "type": "string" },
                        "score": { "type": "number" }
                    },
                    "required": ["label", "score"]
                }
            }
        },
        "required": ["objects"]
    })
}
