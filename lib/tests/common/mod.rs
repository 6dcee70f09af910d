use std::time::Duration;

use axum::Router;
use url::Url;
use wiki_quiz::{Config, QuizClient};

pub struct TestApp {
    pub address: Url,
    pub client: QuizClient,
}

pub async fn spawn_app(router: Router) -> TestApp {
    spawn_app_with_timeout(router, Duration::from_secs(5)).await
}

pub async fn spawn_app_with_timeout(router: Router, timeout: Duration) -> TestApp {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub service");
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    let address = Url::parse(&format!("http://127.0.0.1:{port}")).unwrap();
    let client = QuizClient::new(Config::new(address.clone()).with_timeout(timeout))
        .expect("Failed to build client");

    TestApp { address, client }
}

/// A client pointed at a port nothing listens on.
pub async fn unreachable_client() -> QuizClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let address = Url::parse(&format!("http://127.0.0.1:{port}")).unwrap();

    QuizClient::new(Config::new(address)).unwrap()
}
