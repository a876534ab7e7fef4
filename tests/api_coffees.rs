//! Integration tests per gli endpoint dei caffè
//!
//! Test per:
//! - GET    /coffees
//! - GET    /coffees/{id}
//! - GET    /coffees/name/{name}
//! - POST   /coffees
//! - POST   /coffees/batch
//! - PUT    /coffees/{id}
//! - DELETE /coffees/{id}

mod common;

#[cfg(test)]
mod coffee_tests {
    use super::common::{create_seeded_test_server, create_test_server, create_test_state};
    use axum::http::StatusCode;
    use serde_json::json;

    // ============================================================
    // Root - health check
    // ============================================================

    #[tokio::test]
    async fn test_root() {
        let server = create_test_server(create_test_state());
        let response = server.get("/").await;
        response.assert_status_ok();
    }

    // ============================================================
    // Test per GET /coffees - get_coffees
    // ============================================================

    #[tokio::test]
    async fn test_get_coffees_empty_store() {
        let server = create_test_server(create_test_state());

        let response = server.get("/coffees").await;

        response.assert_status_ok();
        let coffees: Vec<serde_json::Value> = response.json();
        assert!(coffees.is_empty());
    }

    #[tokio::test]
    async fn test_get_coffees_returns_seed() {
        let server = create_seeded_test_server().await;

        let response = server.get("/coffees").await;

        response.assert_status_ok();
        let coffees: Vec<serde_json::Value> = response.json();
        assert_eq!(coffees.len(), 4, "il seed contiene quattro caffè");

        for coffee in &coffees {
            assert!(coffee.get("id").is_some(), "ogni caffè deve avere un id");
            assert!(coffee.get("name").is_some(), "ogni caffè deve avere un name");
        }
        assert_eq!(coffees[0]["name"], "Cafe Cereza");
        assert_eq!(coffees[3]["name"], "Cafe Tres Pontas");
    }

    // ============================================================
    // Test per GET /coffees/{id} - get_coffee_by_id
    // ============================================================

    #[tokio::test]
    async fn test_get_coffee_by_id_success() {
        let server = create_seeded_test_server().await;

        let coffees: Vec<serde_json::Value> = server.get("/coffees").await.json();
        let id = coffees[0]["id"].as_str().unwrap();

        let response = server.get(&format!("/coffees/{id}")).await;

        response.assert_status_ok();
        let coffee: serde_json::Value = response.json();
        assert_eq!(coffee["id"], *id);
        assert_eq!(coffee["name"], "Cafe Cereza");
    }

    #[tokio::test]
    async fn test_get_coffee_by_id_not_found() {
        let server = create_seeded_test_server().await;

        let response = server.get("/coffees/nonexistent-id").await;

        response.assert_status_not_found();
    }

    // ============================================================
    // Test per GET /coffees/name/{name} - get_coffee_by_name
    // ============================================================

    #[tokio::test]
    async fn test_get_coffee_by_name_success() {
        let server = create_seeded_test_server().await;

        let response = server.get("/coffees/name/Cafe%20Lareno").await;

        response.assert_status_ok();
        let coffee: serde_json::Value = response.json();
        assert_eq!(coffee["name"], "Cafe Lareno");
    }

    #[tokio::test]
    async fn test_get_coffee_by_name_not_found() {
        let server = create_seeded_test_server().await;

        let response = server.get("/coffees/name/Cafe%20Inesistente").await;

        response.assert_status_not_found();
    }

    // ============================================================
    // Test per POST /coffees - post_coffee
    // ============================================================

    #[tokio::test]
    async fn test_post_coffee_generates_id() {
        let server = create_test_server(create_test_state());

        let response = server
            .post("/coffees")
            .json(&json!({ "name": "Cafe Nuovo" }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let coffee: serde_json::Value = response.json();
        assert_eq!(coffee["name"], "Cafe Nuovo");
        let id = coffee["id"].as_str().unwrap();
        assert!(!id.is_empty());

        // round trip: l'id assegnato è subito risolvibile
        let found = server.get(&format!("/coffees/{id}")).await;
        found.assert_status_ok();
    }

    #[tokio::test]
    async fn test_post_coffee_keeps_supplied_id() {
        let server = create_test_server(create_test_state());

        let response = server
            .post("/coffees")
            .json(&json!({ "id": "99999", "name": "Latte" }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let coffee: serde_json::Value = response.json();
        assert_eq!(coffee["id"], "99999");
    }

    #[tokio::test]
    async fn test_post_coffee_conflict_on_duplicate_id() {
        let server = create_test_server(create_test_state());

        let body = json!({ "id": "99999", "name": "Latte" });
        server.post("/coffees").json(&body).await.assert_status(StatusCode::CREATED);

        let response = server.post("/coffees").json(&body).await;

        response.assert_status(StatusCode::CONFLICT);

        // il record originale non è stato toccato
        let coffees: Vec<serde_json::Value> = server.get("/coffees").await.json();
        assert_eq!(coffees.len(), 1);
    }

    #[tokio::test]
    async fn test_post_coffee_empty_name_is_bad_request() {
        let server = create_test_server(create_test_state());

        let response = server.post("/coffees").json(&json!({ "name": "" })).await;

        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn test_post_coffee_empty_id_is_bad_request() {
        let server = create_test_server(create_test_state());

        let response = server
            .post("/coffees")
            .json(&json!({ "id": "", "name": "Cafe Vuoto" }))
            .await;

        response.assert_status_bad_request();
        // nessun record con id vuoto è stato memorizzato
        let coffees: Vec<serde_json::Value> = server.get("/coffees").await.json();
        assert!(coffees.is_empty());
    }

    #[tokio::test]
    async fn test_put_coffee_empty_body_id_is_bad_request() {
        let server = create_test_server(create_test_state());

        let response = server
            .put("/coffees/A")
            .json(&json!({ "id": "", "name": "Cafe Vuoto" }))
            .await;

        response.assert_status_bad_request();
    }

    // ============================================================
    // Test per POST /coffees/batch - post_coffees
    // ============================================================

    #[tokio::test]
    async fn test_post_coffees_batch_preserves_order() {
        let server = create_test_server(create_test_state());

        let response = server
            .post("/coffees/batch")
            .json(&json!([{ "name": "A" }, { "name": "B" }]))
            .await;

        response.assert_status(StatusCode::CREATED);
        let stored: Vec<serde_json::Value> = response.json();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0]["name"], "A");
        assert_eq!(stored[1]["name"], "B");

        for coffee in &stored {
            let id = coffee["id"].as_str().unwrap();
            server.get(&format!("/coffees/{id}")).await.assert_status_ok();
        }
    }

    // ============================================================
    // Test per PUT /coffees/{id} - put_coffee
    // ============================================================

    #[tokio::test]
    async fn test_put_coffee_replaces_when_present() {
        let server = create_test_server(create_test_state());

        server
            .post("/coffees")
            .json(&json!({ "id": "A", "name": "Old" }))
            .await
            .assert_status(StatusCode::CREATED);

        let response = server
            .put("/coffees/A")
            .json(&json!({ "id": "A", "name": "New" }))
            .await;

        response.assert_status_ok();
        let coffee: serde_json::Value = response.json();
        assert_eq!(coffee["id"], "A");
        assert_eq!(coffee["name"], "New");

        let found: serde_json::Value = server.get("/coffees/A").await.json();
        assert_eq!(found["name"], "New");
    }

    #[tokio::test]
    async fn test_put_coffee_creates_when_absent() {
        let server = create_test_server(create_test_state());

        let response = server
            .put("/coffees/nonexistent-id")
            .json(&json!({ "name": "X" }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let coffee: serde_json::Value = response.json();
        assert_eq!(coffee["name"], "X");

        // il record creato ha un id fresco: il path id non viene adottato
        let new_id = coffee["id"].as_str().unwrap();
        assert_ne!(new_id, "nonexistent-id");
        server.get(&format!("/coffees/{new_id}")).await.assert_status_ok();
        server.get("/coffees/nonexistent-id").await.assert_status_not_found();
    }

    #[tokio::test]
    async fn test_put_coffee_forces_path_id_over_body_id() {
        let server = create_test_server(create_test_state());

        server
            .post("/coffees")
            .json(&json!({ "id": "A", "name": "Old" }))
            .await
            .assert_status(StatusCode::CREATED);

        // body con id divergente: vince quello del path
        let response = server
            .put("/coffees/A")
            .json(&json!({ "id": "B", "name": "New" }))
            .await;

        response.assert_status_ok();
        let coffee: serde_json::Value = response.json();
        assert_eq!(coffee["id"], "A");
        server.get("/coffees/B").await.assert_status_not_found();
    }

    // ============================================================
    // Test per DELETE /coffees/{id} - delete_coffee
    // ============================================================

    #[tokio::test]
    async fn test_delete_coffee_then_idempotent_repeat() {
        let server = create_test_server(create_test_state());

        let created: serde_json::Value = server
            .post("/coffees")
            .json(&json!({ "name": "Cafe Ganador" }))
            .await
            .json();
        let id = created["id"].as_str().unwrap();

        let response = server.delete(&format!("/coffees/{id}")).await;
        response.assert_status(StatusCode::NO_CONTENT);
        server.get(&format!("/coffees/{id}")).await.assert_status_not_found();

        // seconda cancellazione dello stesso id: ancora 204, nessun errore
        let response = server.delete(&format!("/coffees/{id}")).await;
        response.assert_status(StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_no_content() {
        let server = create_seeded_test_server().await;

        let response = server.delete("/coffees/never-existed").await;

        response.assert_status(StatusCode::NO_CONTENT);
        let coffees: Vec<serde_json::Value> = server.get("/coffees").await.json();
        assert_eq!(coffees.len(), 4, "nessun record deve sparire");
    }
}
