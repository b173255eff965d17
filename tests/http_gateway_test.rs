//! HttpGateway against a canned HTTP server on the loopback interface.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use dexbrowse::{CatalogError, CatalogSource, HttpGateway};

const PIKACHU: &str = r#"{
    "id": 25,
    "name": "pikachu",
    "height": 4,
    "weight": 60,
    "sprites": { "front_default": "https://img/25.png", "other": {} },
    "types": [ { "slot": 1, "type": { "name": "electric", "url": "https://x/type/13/" } } ],
    "abilities": [ { "ability": { "name": "static", "url": "https://x/ability/9/" } } ],
    "stats": [ { "base_stat": 35, "stat": { "name": "hp", "url": "https://x/stat/1/" } } ]
}"#;

/// Serves fixed responses by request target and records every target seen
struct CannedServer {
    base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl CannedServer {
    async fn start(routes: &[(&str, u16, &str)]) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let routes: Arc<HashMap<String, (u16, String)>> = Arc::new(
            routes
                .iter()
                .map(|(path, status, body)| (path.to_string(), (*status, body.to_string())))
                .collect(),
        );
        let requests = Arc::new(Mutex::new(Vec::new()));

        let seen = Arc::clone(&requests);
        tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    return;
                };
                let routes = Arc::clone(&routes);
                let seen = Arc::clone(&seen);
                tokio::spawn(async move {
                    let mut buf = Vec::new();
                    let mut chunk = [0u8; 1024];
                    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                        match socket.read(&mut chunk).await {
                            Ok(0) | Err(_) => return,
                            Ok(n) => buf.extend_from_slice(&chunk[..n]),
                        }
                    }
                    let head = String::from_utf8_lossy(&buf);
                    let target = head
                        .lines()
                        .next()
                        .and_then(|line| line.split_whitespace().nth(1))
                        .unwrap_or("/")
                        .to_string();
                    seen.lock().push(target.clone());

                    let (status, body) = routes
                        .get(&target)
                        .cloned()
                        .unwrap_or((404, r#"{"detail":"Not found."}"#.to_string()));
                    let response = format!(
                        "HTTP/1.1 {} X\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                        status,
                        body.len(),
                        body
                    );
                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });

        CannedServer {
            base_url: format!("http://{addr}/api/v2"),
            requests,
        }
    }

    fn gateway(&self) -> HttpGateway {
        HttpGateway::new(&self.base_url, Some(std::time::Duration::from_secs(5))).unwrap()
    }

    fn requests(&self) -> Vec<String> {
        self.requests.lock().clone()
    }
}

#[tokio::test]
async fn test_lookup_entry() {
    let server = CannedServer::start(&[("/api/v2/pokemon/pikachu", 200, PIKACHU)]).await;

    let entry = server.gateway().lookup_entry("  Pikachu ").await.unwrap();

    assert_eq!(entry.id, 25);
    assert_eq!(entry.categories, vec!["electric"]);
    assert_eq!(entry.image_ref.as_deref(), Some("https://img/25.png"));
    assert_eq!(entry.abilities, vec!["static"]);
    assert_eq!(server.requests(), vec!["/api/v2/pokemon/pikachu"]);
}

#[tokio::test]
async fn test_lookup_missing_entry_is_not_found() {
    let server = CannedServer::start(&[]).await;

    let err = server.gateway().lookup_entry("qqqqq").await.unwrap_err();
    assert!(matches!(err, CatalogError::NotFound(ref key) if key == "qqqqq"));

    assert!(server.gateway().fetch_entry("qqqqq").await.is_none());
}

#[tokio::test]
async fn test_server_error_is_http_error() {
    let server = CannedServer::start(&[("/api/v2/pokemon/pikachu", 500, "{}")]).await;

    let err = server.gateway().lookup_entry("pikachu").await.unwrap_err();
    assert!(matches!(err, CatalogError::Http { status: 500, .. }));
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let server = CannedServer::start(&[("/api/v2/type", 200, "{ nope")]).await;

    let err = server.gateway().fetch_categories().await.unwrap_err();
    assert!(matches!(err, CatalogError::Decode(_)));
}

#[tokio::test]
async fn test_fetch_categories() {
    let server = CannedServer::start(&[(
        "/api/v2/type",
        200,
        r#"{"count": 2, "results": [{"name": "fire", "url": "u"}, {"name": "water", "url": "u"}]}"#,
    )])
    .await;

    let categories = server.gateway().fetch_categories().await.unwrap();
    let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["fire", "water"]);
}

#[tokio::test]
async fn test_fetch_category_names_reads_both_member_shapes() {
    let server = CannedServer::start(&[
        (
            "/api/v2/type/water",
            200,
            r#"{"pokemon": [{"pokemon": {"name": "squirtle", "url": "u"}, "slot": 1},
                           {"pokemon": {"name": "psyduck", "url": "u"}, "slot": 1}]}"#,
        ),
        (
            "/api/v2/type/fire",
            200,
            r#"{"members": [{"memberRef": {"name": "charmander"}}]}"#,
        ),
    ])
    .await;
    let gateway = server.gateway();

    assert_eq!(
        gateway.fetch_category_names("water").await.unwrap(),
        vec!["squirtle", "psyduck"]
    );
    assert_eq!(
        gateway.fetch_category_names("fire").await.unwrap(),
        vec!["charmander"]
    );
}

#[tokio::test]
async fn test_fetch_name_page_sends_limit_and_offset() {
    let server = CannedServer::start(&[(
        "/api/v2/pokemon?limit=20&offset=40",
        200,
        r#"{"count": 1302, "next": null, "previous": null,
            "results": [{"name": "nidoran-f", "url": "u"}, {"name": "nidorina", "url": "u"}]}"#,
    )])
    .await;

    let page = server.gateway().fetch_name_page(20, 40).await.unwrap();
    assert_eq!(page.count, 1302);
    assert_eq!(page.names, vec!["nidoran-f", "nidorina"]);
}

#[tokio::test]
async fn test_refused_connection_is_network_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let gateway = HttpGateway::new(&format!("http://{addr}/api/v2"), None).unwrap();
    let err = gateway.fetch_categories().await.unwrap_err();
    assert!(
        matches!(err, CatalogError::Network(_)),
        "unexpected error: {err:?}"
    );
}

#[tokio::test]
async fn test_dot_segments_are_not_found_without_a_request() {
    let server = CannedServer::start(&[("/api/v2/pokemon", 200, "{}")]).await;
    let gateway = server.gateway();

    for key in [".", "..", " .. "] {
        let err = gateway.lookup_entry(key).await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(_)), "{key}: {err:?}");
    }
    let err = gateway.fetch_category_names("..").await.unwrap_err();
    assert!(matches!(err, CatalogError::NotFound(_)));

    assert!(server.requests().is_empty());
}
