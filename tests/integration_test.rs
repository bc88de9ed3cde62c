// Integration tests for the calendario API
// Run with: cargo test --test integration_test -- --ignored
// Requires a running server, e.g. DATABASE_URL=memory cargo run

use calendario::domain::Evento;
use serde_json::json;

const API_BASE_URL: &str = "http://localhost:5000";

#[tokio::test]
#[ignore] // Needs a live server on localhost:5000
async fn test_full_evento_workflow() {
    let client = reqwest::Client::new();

    println!("🧪 Testing full evento workflow...");

    // Step 1: Create an event
    println!("\n📝 Step 1: Creating evento...");
    let create_response = client
        .post(format!("{}/api/eventos", API_BASE_URL))
        .json(&json!({
            "titulo": "Prueba de integración",
            "descripcion": "Creado por el test",
            "fecha_inicio": "2030-01-07T10:00:00",
            "fecha_fin": "2030-01-07T11:30:00",
        }))
        .send()
        .await
        .expect("Failed to create evento");

    assert_eq!(
        create_response.status(),
        201,
        "Expected 201 Created, got {}",
        create_response.status()
    );

    let evento: Evento = create_response
        .json()
        .await
        .expect("Failed to parse evento response");

    println!("✅ Created evento: {}", evento.id);
    assert_eq!(evento.titulo, "Prueba de integración");
    assert_eq!(evento.color, "#3788d8");
    assert!(!evento.completado);

    // Step 2: List events
    println!("\n📋 Step 2: Listing eventos...");
    let list_response = client
        .get(format!("{}/api/eventos", API_BASE_URL))
        .send()
        .await
        .expect("Failed to list eventos");

    assert_eq!(list_response.status(), 200);

    let eventos: Vec<Evento> = list_response
        .json()
        .await
        .expect("Failed to parse eventos");
    println!("✅ Found {} evento(s)", eventos.len());
    assert!(eventos.iter().any(|e| e.id == evento.id));

    // Step 3: Update the event
    println!("\n✏️ Step 3: Updating evento...");
    let update_response = client
        .put(format!("{}/api/eventos/{}", API_BASE_URL, evento.id))
        .json(&json!({"completado": true}))
        .send()
        .await
        .expect("Failed to update evento");

    assert_eq!(update_response.status(), 200);

    let actualizado: Evento = update_response
        .json()
        .await
        .expect("Failed to parse updated evento");
    println!("✅ Updated evento: completado={}", actualizado.completado);
    assert!(actualizado.completado);
    assert_eq!(actualizado.titulo, "Prueba de integración");

    // Step 4: Copy it two weeks forward
    println!("\n📆 Step 4: Copying evento for two weeks...");
    let copy_response = client
        .post(format!("{}/api/eventos/copiar", API_BASE_URL))
        .json(&json!({
            "eventos_ids": [evento.id],
            "fecha_destino": "2030-02-04T10:00:00",
            "repetir_semanas": 2,
        }))
        .send()
        .await
        .expect("Failed to copy eventos");

    assert_eq!(copy_response.status(), 201);

    let copias: Vec<Evento> = copy_response
        .json()
        .await
        .expect("Failed to parse copied eventos");
    println!("✅ Created {} copies", copias.len());
    assert_eq!(copias.len(), 2);
    assert!(copias.iter().all(|c| !c.completado));

    // Step 5: Clean up everything this test created
    println!("\n🧹 Step 5: Deleting created eventos...");
    for id in std::iter::once(evento.id).chain(copias.iter().map(|c| c.id)) {
        let delete_response = client
            .delete(format!("{}/api/eventos/{}", API_BASE_URL, id))
            .send()
            .await
            .expect("Failed to delete evento");
        assert_eq!(delete_response.status(), 204);
    }

    // Deleting again reports 404
    let gone_response = client
        .delete(format!("{}/api/eventos/{}", API_BASE_URL, evento.id))
        .send()
        .await
        .expect("Failed to re-delete evento");
    assert_eq!(gone_response.status(), 404);

    println!("\n🎉 Full workflow completed!");
}

#[tokio::test]
#[ignore] // Needs a live server on localhost:5000
async fn test_health_endpoint() {
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/health", API_BASE_URL))
        .send()
        .await
        .expect("Failed to reach health endpoint");

    assert_eq!(response.status(), 200);

    let health: serde_json::Value = response.json().await.expect("Failed to parse health");
    assert_eq!(health["status"], "ok");
    println!("✅ Health: {}", health);
}
