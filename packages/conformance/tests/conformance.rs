//! End-to-end conformance tests for the puml-ld HTTP service.
//!
//! Each test spawns an ephemeral in-process server (real TCP, real HTTP) via
//! [`puml_ld_conformance::spawn_server`] and exercises the API surface with a
//! `reqwest` HTTP client.
//!
//! # Coverage
//!
//! | Test | Endpoint |
//! |------|----------|
//! | `root_describes_service` | `GET /` |
//! | `health_reports_ok` | `GET /health` |
//! | `seeded_shape_is_served_as_turtle` | `GET /shacl` |
//! | `shipped_shapes_are_served` | `GET /shacl` (filesystem) |
//! | `unknown_shape_returns_404` | `GET /shacl` |
//! | `shape_without_name_returns_400` | `GET /shacl` |
//! | `convert_class_diagram` | `PUT /convert` |
//! | `convert_sequence_diagram` | `PUT /convert` |
//! | `convert_usecase_diagram` | `PUT /convert` |
//! | `convert_erd_diagram` | `PUT /convert` |
//! | `convert_generic_diagram_has_no_relationships` | `PUT /convert` |
//! | `convert_is_deterministic` | `PUT /convert` |
//! | `convert_without_headers_returns_400` | `PUT /convert` errors |
//! | `convert_empty_body_returns_400` | `PUT /convert` errors |
//! | `convert_invalid_context_returns_400` | `PUT /convert` errors |
//! | `convert_without_marker_returns_422` | `PUT /convert` errors |
//! | `convert_with_empty_id_mints_fragment_ids` | `PUT /convert` |

use puml_ld_conformance::{spawn_server, spawn_server_with_shipped_shapes};
use puml_ld_server_api::ErrorResponse;
use serde_json::Value;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const CONTEXT: &str = r#"{"@vocab":"http://example.org/uml#","rdfs":"http://www.w3.org/2000/01/rdf-schema#"}"#;
const BASE: &str = "http://example.org/diagrams/test";

fn make_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(5))
        .build()
        .unwrap()
}

async fn put_convert(base: &str, body: &str) -> reqwest::Response {
    make_client()
        .put(format!("{base}/convert"))
        .header("Context", CONTEXT)
        .header("Id", BASE)
        .body(body.to_string())
        .send()
        .await
        .unwrap()
}

async fn convert_ok(body: &str) -> Value {
    let (base, _shapes) = spawn_server().await;
    let resp = put_convert(&base, body).await;
    assert_eq!(resp.status(), 200);
    let ct = resp.headers()["content-type"].to_str().unwrap().to_string();
    assert_eq!(ct, "application/ld+json");
    resp.json().await.unwrap()
}

fn graph(doc: &Value) -> &Vec<Value> {
    doc["@graph"].as_array().expect("@graph must be an array")
}

// ---------------------------------------------------------------------------
// Service
// ---------------------------------------------------------------------------

#[tokio::test]
async fn root_describes_service() {
    let (base, _shapes) = spawn_server().await;
    let resp = make_client().get(format!("{base}/")).send().await.unwrap();

    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["name"], "puml-ld");
    assert_eq!(body["description"], "Converts PlantUML documents to JSON-LD format");
    assert_eq!(body["endpoints"]["convert"]["path"], "/convert");
    assert_eq!(body["endpoints"]["shacl"]["path"], "/shacl");
}

#[tokio::test]
async fn health_reports_ok() {
    let (base, _shapes) = spawn_server().await;
    let resp = make_client().get(format!("{base}/health")).send().await.unwrap();

    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "ok");
    assert!(body["timestamp"].is_string());
}

// ---------------------------------------------------------------------------
// Shapes
// ---------------------------------------------------------------------------

#[tokio::test]
async fn seeded_shape_is_served_as_turtle() {
    let (base, shapes) = spawn_server().await;
    shapes.insert("Sequence", "ex:SequenceShape a sh:NodeShape .");

    let resp = make_client()
        .get(format!("{base}/shacl?name=sequence"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let ct = resp.headers()["content-type"].to_str().unwrap().to_string();
    assert!(ct.starts_with("text/turtle"));
    assert_eq!(resp.text().await.unwrap(), "ex:SequenceShape a sh:NodeShape .");
}

#[tokio::test]
async fn shipped_shapes_are_served() {
    let base = spawn_server_with_shipped_shapes().await;
    let client = make_client();

    for name in ["Class", "Sequence", "UseCase", "ERD"] {
        let resp = client
            .get(format!("{base}/shacl?name={name}"))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200, "shape {name} should be shipped");
        let text = resp.text().await.unwrap();
        assert!(text.contains("sh:NodeShape"), "shape {name} is not SHACL");
    }
}

#[tokio::test]
async fn unknown_shape_returns_404() {
    let (base, _shapes) = spawn_server().await;
    let resp = make_client()
        .get(format!("{base}/shacl?name=Timing"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 404);
    let err: ErrorResponse = resp.json().await.unwrap();
    assert_eq!(err.code, "not_found");
    assert!(err.error.contains("Timing"));
}

#[tokio::test]
async fn shape_without_name_returns_400() {
    let (base, _shapes) = spawn_server().await;
    let resp = make_client().get(format!("{base}/shacl")).send().await.unwrap();

    assert_eq!(resp.status(), 400);
    let err: ErrorResponse = resp.json().await.unwrap();
    assert_eq!(err.code, "invalid_parameter");
}

// ---------------------------------------------------------------------------
// Convert
// ---------------------------------------------------------------------------

#[tokio::test]
async fn convert_class_diagram() {
    let doc = convert_ok(
        r#"@startuml
abstract class Shape <<geometry>> {
  #origin: Point
  +{abstract} area(): Double
}
class Circle {
  -radius: Double = 1.0
}
interface Drawable
enum Color {
  RED
  GREEN
}
Circle --|> Shape
Circle ..|> Drawable
@enduml
"#,
    )
    .await;

    assert_eq!(doc["@context"]["@vocab"], "http://example.org/uml#");
    let g = graph(&doc);
    assert_eq!(g[0]["@id"], BASE);
    assert_eq!(g[0]["@type"], "ClassDiagram");
    assert_eq!(g[0]["elementCount"], 4);
    assert_eq!(g[0]["relationshipCount"], 2);

    let shape = &g[1];
    assert_eq!(shape["@id"], format!("{BASE}#Shape"));
    assert_eq!(shape["abstract"], true);
    assert_eq!(shape["stereotype"], "geometry");
    assert_eq!(shape["attributes"][0]["visibility"], "protected");
    assert_eq!(shape["methods"][0]["abstract"], true);

    let circle = &g[2];
    assert_eq!(circle["abstract"], false);
    assert_eq!(circle["attributes"][0]["defaultValue"], "1.0");

    let color = &g[4];
    assert_eq!(color["@type"], "Enum");
    assert_eq!(color["values"], serde_json::json!(["RED", "GREEN"]));

    assert_eq!(g[5]["@type"], "Extension");
    assert_eq!(g[5]["source"], format!("{BASE}#Circle"));
    assert_eq!(g[6]["@type"], "Implementation");
}

#[tokio::test]
async fn convert_sequence_diagram() {
    let doc = convert_ok(
        "@startsequence\nactor User\nparticipant \"Web App\" as Web\ndatabase DB\n\
         User -> Web : login\nWeb --> DB : query\n@endsequence",
    )
    .await;

    let g = graph(&doc);
    assert_eq!(g[0]["@type"], "SequenceDiagram");
    assert_eq!(g[1]["@type"], "Actor");
    assert!(g[1].get("participantType").is_none());
    assert_eq!(g[2]["@id"], format!("{BASE}#Web"));
    assert_eq!(g[2]["participantType"], "Participant");
    assert_eq!(g[3]["participantType"], "Database");

    assert_eq!(g[4]["@type"], "Message");
    assert_eq!(g[4]["message"], "login");
    assert_eq!(g[4]["synchronous"], true);
    assert_eq!(g[5]["synchronous"], false);
}

#[tokio::test]
async fn convert_usecase_diagram() {
    let doc = convert_ok(
        "@startuml\nactor Customer\nusecase \"Place Order\" as PO\nusecase Pay\n\
         Customer -- PO\nPO ..> Pay : include\n@enduml",
    )
    .await;

    let g = graph(&doc);
    assert_eq!(g[0]["@type"], "UseCaseDiagram");
    assert_eq!(g[2]["@type"], "UseCase");
    assert_eq!(g[2]["name"], "Place Order");
    assert_eq!(g[4]["@type"], "Association");
    assert_eq!(g[5]["@type"], "Include");
    assert_eq!(g[5]["label"], "include");
}

#[tokio::test]
async fn convert_erd_diagram() {
    let doc = convert_ok(
        "@startuml\nentity Customer {\n  * id : number\n}\nentity Order\n\
         Customer ||--o{ Order : places\n@enduml",
    )
    .await;

    let g = graph(&doc);
    assert_eq!(g[0]["@type"], "ERDDiagram");
    assert_eq!(g[1]["@type"], "Entity");
    assert_eq!(g[1]["attributes"][0]["name"], "id");
    assert_eq!(g[3]["@type"], "Relationship");
    assert_eq!(g[3]["sourceCardinality"], "1");
    assert_eq!(g[3]["targetCardinality"], "0..*");
}

#[tokio::test]
async fn convert_generic_diagram_has_no_relationships() {
    let doc = convert_ok("@startcomponent\ncomponent Api\nnode Host\nApi --> Host\n@endcomponent").await;

    let g = graph(&doc);
    assert_eq!(g[0]["@type"], "ComponentDiagram");
    assert_eq!(g[0]["relationshipCount"], 0);
    assert_eq!(g.len(), 3);
    assert!(g.iter().all(|n| n.get("source").is_none()));
}

#[tokio::test]
async fn convert_is_deterministic() {
    let (base, _shapes) = spawn_server().await;
    let body = "@startuml\nclass A\nclass B\nA *-- B\n@enduml";

    let first = put_convert(&base, body).await.text().await.unwrap();
    let second = put_convert(&base, body).await.text().await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn convert_without_headers_returns_400() {
    let (base, _shapes) = spawn_server().await;
    let resp = make_client()
        .put(format!("{base}/convert"))
        .header("Id", BASE)
        .body("@startuml\nclass A\n@enduml")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
    let err: ErrorResponse = resp.json().await.unwrap();
    assert_eq!(err.code, "missing_headers");
}

#[tokio::test]
async fn convert_empty_body_returns_400() {
    let (base, _shapes) = spawn_server().await;
    let resp = put_convert(&base, "").await;

    assert_eq!(resp.status(), 400);
    let err: ErrorResponse = resp.json().await.unwrap();
    assert_eq!(err.code, "empty_body");
}

#[tokio::test]
async fn convert_invalid_context_returns_400() {
    let (base, _shapes) = spawn_server().await;
    let resp = make_client()
        .put(format!("{base}/convert"))
        .header("Context", "not-a-url-or-json")
        .header("Id", BASE)
        .body("@startuml\nclass A\n@enduml")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
    let err: ErrorResponse = resp.json().await.unwrap();
    assert_eq!(err.code, "invalid_context");
}

#[tokio::test]
async fn convert_without_marker_returns_422() {
    let (base, _shapes) = spawn_server().await;
    let resp = put_convert(&base, "class A\nclass B").await;

    assert_eq!(resp.status(), 422);
    let err: ErrorResponse = resp.json().await.unwrap();
    assert_eq!(err.code, "parse_failed");
}

#[tokio::test]
async fn convert_with_empty_id_mints_fragment_ids() {
    let (base, _shapes) = spawn_server().await;
    let resp = make_client()
        .put(format!("{base}/convert"))
        .header("Context", CONTEXT)
        .header("Id", "")
        .body("@startuml\nclass A\n@enduml")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let doc: Value = resp.json().await.unwrap();
    let g = graph(&doc);
    assert_eq!(g[0]["@id"], "");
    assert_eq!(g[1]["@id"], "#A");
}
