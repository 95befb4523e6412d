//! Generated API documentation.
//!
//! Serves an OpenAPI 3.0 document at `/docs/openapi.json` and a Swagger UI
//! page at `/docs` that renders it. This is a development aid and plays no
//! part in contact request handling.

use axum::{extract::State, response::Html, Json};
use serde_json::{json, Value};

use super::state::AppState;

/// Path the Swagger UI page loads the document from.
pub const OPENAPI_PATH: &str = "/docs/openapi.json";

/// Build the OpenAPI document advertising the given server base URLs.
pub fn api_document(server_urls: &[String]) -> Value {
    let servers: Vec<Value> = server_urls.iter().map(|url| json!({ "url": url })).collect();

    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "Contacts API",
            "description": "CRUD operations on contact records",
            "version": env!("CARGO_PKG_VERSION"),
            "contact": { "name": "Contacts API maintainers" }
        },
        "servers": servers,
        "paths": {
            "/health": { "get": health_operation() },
            "/api/contacts": {
                "get": list_operation(),
                "post": create_operation()
            },
            "/api/contacts/{id}": {
                "put": update_operation(),
                "delete": delete_operation()
            }
        },
        "components": { "schemas": component_schemas() }
    })
}

fn health_operation() -> Value {
    json!({
        "summary": "Service and database health",
        "responses": {
            "200": json_response("Service is running", "#/components/schemas/HealthResponse")
        }
    })
}

fn list_operation() -> Value {
    let contacts = json!({
        "type": "array",
        "items": { "$ref": "#/components/schemas/Contact" }
    });
    json!({
        "summary": "List all contacts",
        "responses": {
            "200": {
                "description": "All contacts ordered by id",
                "content": { "application/json": { "schema": contacts } }
            },
            "500": error_response("Store failure")
        }
    })
}

fn create_operation() -> Value {
    json!({
        "summary": "Create a contact",
        "requestBody": contact_body(),
        "responses": {
            "200": json_response("The created contact", "#/components/schemas/Contact"),
            "400": error_response("Malformed body or constraint violation"),
            "500": error_response("Store failure")
        }
    })
}

fn update_operation() -> Value {
    json!({
        "summary": "Overwrite all fields of a contact",
        "parameters": [id_parameter()],
        "requestBody": contact_body(),
        "responses": {
            "200": json_response("The updated contact", "#/components/schemas/Contact"),
            "400": error_response("Invalid id or malformed body"),
            "404": error_response("Contact not found"),
            "500": error_response("Store failure")
        }
    })
}

fn delete_operation() -> Value {
    json!({
        "summary": "Delete a contact",
        "parameters": [id_parameter()],
        "responses": {
            "200": json_response("Id of the deleted contact", "#/components/schemas/DeletedContact"),
            "400": error_response("Invalid id"),
            "404": error_response("Contact not found"),
            "500": error_response("Store failure")
        }
    })
}

fn id_parameter() -> Value {
    json!({
        "in": "path",
        "name": "id",
        "required": true,
        "description": "Numeric contact id",
        "schema": { "type": "integer", "format": "int64" }
    })
}

fn contact_body() -> Value {
    json!({
        "required": true,
        "content": {
            "application/json": { "schema": { "$ref": "#/components/schemas/ContactFields" } }
        }
    })
}

fn id_property() -> Value {
    json!({ "type": "integer", "format": "int64", "example": 1 })
}

fn component_schemas() -> Value {
    let contact_fields = json!({
        "type": "object",
        "required": ["firstName", "lastName", "phone"],
        "properties": {
            "firstName": { "type": "string", "example": "Ada" },
            "lastName": { "type": "string", "example": "Lovelace" },
            "phone": { "type": "string", "example": "5551234" }
        }
    });
    let contact = json!({
        "allOf": [
            { "type": "object", "required": ["id"], "properties": { "id": id_property() } },
            { "$ref": "#/components/schemas/ContactFields" }
        ]
    });
    let deleted = json!({
        "type": "object",
        "required": ["id"],
        "properties": { "id": id_property() }
    });
    let health = json!({
        "type": "object",
        "properties": {
            "status": { "type": "string" },
            "version": { "type": "string" },
            "database": { "type": "string" }
        }
    });
    let api_error = json!({
        "type": "object",
        "required": ["code", "message"],
        "properties": {
            "code": { "type": "string", "example": "NOT_FOUND" },
            "message": { "type": "string" },
            "details": { "type": "string" }
        }
    });

    json!({
        "ContactFields": contact_fields,
        "Contact": contact,
        "DeletedContact": deleted,
        "HealthResponse": health,
        "ApiError": api_error
    })
}

fn json_response(description: &str, schema_ref: &str) -> Value {
    json!({
        "description": description,
        "content": { "application/json": { "schema": { "$ref": schema_ref } } }
    })
}

fn error_response(description: &str) -> Value {
    json_response(description, "#/components/schemas/ApiError")
}

/// GET /docs/openapi.json
pub async fn openapi_json(State(state): State<AppState>) -> Json<Value> {
    Json(api_document(&state.config.server_urls()))
}

/// GET /docs
pub async fn swagger_ui() -> Html<String> {
    Html(format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>Contacts API</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script>
    window.ui = SwaggerUIBundle({{ url: "{}", dom_id: "#swagger-ui" }});
  </script>
</body>
</html>
"##,
        OPENAPI_PATH
    ))
}
