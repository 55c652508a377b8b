use serde_json::{json, Value};
use std::sync::LazyLock;

pub static CONFIG_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "additionalProperties": false,
        "properties": {
            "server": {
                "type": "object",
                "properties": {
                    "host": { "type": "string" },
                    "port": { "type": "integer", "minimum": 1, "maximum": 65535 }
                }
            },
            "database": {
                "type": "object",
                "properties": {
                    "path": { "type": "string", "minLength": 1 }
                }
            },
            "directory": {
                "type": "object",
                "properties": {
                    "required_url_domain": { "type": "string", "minLength": 1 },
                    "seed_file": { "type": "string" }
                }
            },
            "admin": {
                "type": "object",
                "properties": {
                    "token": { "type": "string" }
                }
            }
        }
    })
});
