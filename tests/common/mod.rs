//! Test harness: serves the router on an ephemeral localhost port.

#![allow(dead_code)]

use std::net::SocketAddr;

use mergington::database::activity_store::ActivityStore;
use mergington::models::{Activity, ActivityCatalog};
use mergington::web::router::build_router;

pub struct TestServer {
    pub addr: SocketAddr,
    pub store: ActivityStore,
    pub client: reqwest::Client,
    _handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// Starts a server over the two-activity fixture catalog.
    pub async fn start() -> Self {
        Self::start_with(fixture_catalog()).await
    }

    pub async fn start_with(catalog: ActivityCatalog) -> Self {
        let store = ActivityStore::new(catalog);
        let app = build_router(store.clone(), concat!(env!("CARGO_MANIFEST_DIR"), "/static"));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind ephemeral port");
        let addr = listener.local_addr().expect("local addr");
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve");
        });

        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .expect("build client");

        Self {
            addr,
            store,
            client,
            _handle: handle,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn activities(&self) -> serde_json::Value {
        let resp = self
            .client
            .get(self.url("/activities"))
            .send()
            .await
            .expect("GET /activities");
        assert_eq!(resp.status(), 200);
        resp.json().await.expect("activities json")
    }

    pub async fn participants(&self, activity: &str) -> Vec<String> {
        let data = self.activities().await;
        serde_json::from_value(data[activity]["participants"].clone()).expect("participants array")
    }

    pub async fn signup(&self, activity_path: &str, email: &str) -> reqwest::Response {
        self.client
            .post(self.url(&format!("/activities/{activity_path}/signup?email={email}")))
            .send()
            .await
            .expect("POST signup")
    }

    pub async fn unregister(&self, activity_path: &str, email: &str) -> reqwest::Response {
        self.client
            .delete(self.url(&format!("/activities/{activity_path}/participants/{email}")))
            .send()
            .await
            .expect("DELETE participant")
    }
}

pub fn fixture_catalog() -> ActivityCatalog {
    let mut catalog = ActivityCatalog::new();
    catalog.insert(
        "Soccer Team".to_string(),
        Activity::new(
            "Join our competitive soccer team and play in local tournaments",
            "Mondays and Wednesdays, 4:00 PM - 6:00 PM",
            25,
        )
        .with_participants(&["alex@mergington.edu", "sam@mergington.edu"]),
    );
    catalog.insert(
        "Basketball Club".to_string(),
        Activity::new(
            "Practice basketball skills and participate in inter-school games",
            "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            15,
        ),
    );
    catalog
}
