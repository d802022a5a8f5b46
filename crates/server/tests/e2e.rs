use std::net::SocketAddr;

use axum::Router;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use service::storage::FileRecordStore;
use tokio::net::TcpListener;
use uuid::Uuid;

use server::routes;
use server::state::AppState;

struct TestApp {
    base_url: String,
    data_dir: std::path::PathBuf,
}

async fn start_server() -> anyhow::Result<TestApp> {
    // isolated data dir per test run
    let data_dir = std::env::temp_dir().join(format!("anchor_e2e_{}", Uuid::new_v4()));
    let store = FileRecordStore::new(&data_dir).await?;
    let app: Router = routes::build_router(AppState::new(store), tower_http::cors::CorsLayer::very_permissive());

    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url, data_dir })
}

#[tokio::test]
async fn e2e_anchor_cycle_persists_to_disk() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let res = c
        .post(format!("{}/add_anchor", app.base_url))
        .json(&json!({"anchorID": "anchor-1", "creator": "device-a"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let added = res.json::<serde_json::Value>().await?;

    let on_disk = tokio::fs::read(app.data_dir.join("anchor_data.json")).await?;
    let on_disk: serde_json::Value = serde_json::from_slice(&on_disk)?;
    assert_eq!(on_disk, added);

    let res = c.get(format!("{}/remove_anchor", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert!(!app.data_dir.join("anchor_data.json").exists());

    let _ = tokio::fs::remove_dir_all(&app.data_dir).await;
    Ok(())
}

#[tokio::test]
async fn e2e_concurrent_host_writes_never_mix() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let names: Vec<String> = (0..20).map(|i| format!("host-{i}-{}", "x".repeat(i * 50))).collect();
    let mut handles = Vec::new();
    for name in names.clone() {
        let c = c.clone();
        let url = format!("{}/add_host", app.base_url);
        handles.push(tokio::spawn(async move {
            c.post(url).json(&json!({"op": "add", "hostname": name})).send().await
        }));
    }
    for h in handles {
        let res = h.await??;
        assert_eq!(res.status(), HttpStatusCode::OK);
    }

    let body = c
        .get(format!("{}/query_host", app.base_url))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    assert_eq!(body["result"], "success");
    let stored = body["hostname"].as_str().unwrap().to_string();
    assert!(names.contains(&stored));

    let _ = tokio::fs::remove_dir_all(&app.data_dir).await;
    Ok(())
}
