//! The typed client against a running server.

use std::net::SocketAddr;
use std::sync::Arc;

use cloud_cars::client::{ClientError, NameSource};
use cloud_cars::{Car, CarId, CarStore, CarsClient};
use reqwest::StatusCode;

mod common;

#[tokio::test]
async fn test_client_round_trip() {
    let addr: SocketAddr = "127.0.0.1:28491".parse().unwrap();
    let shutdown = common::start_server(addr, Arc::new(CarStore::seeded())).await;
    let client = CarsClient::with_client(common::http_client(), &format!("http://{}", addr)).unwrap();

    assert_eq!(client.welcome().await.unwrap(), "Welcome to the Cloud!");
    for source in [NameSource::Path, NameSource::Query, NameSource::Body] {
        assert_eq!(
            client.greet("Jo Ann", source).await.unwrap(),
            "Welcome to the Cloud, Jo Ann!"
        );
    }

    let hondas = client.list_cars(Some("honda")).await.unwrap();
    assert_eq!(hondas.len(), 2);

    assert_eq!(client.get_car("3").await.unwrap().unwrap().model, "camry");
    assert!(client.get_car("missing").await.unwrap().is_none());

    let car = Car::new(CarId::text("vw-1"), Some("vw"), "hatchback", "golf", 25);
    assert_eq!(client.create_car(&car).await.unwrap(), car);
    assert_eq!(client.list_cars(None).await.unwrap().last(), Some(&car));

    shutdown.trigger();
}

#[tokio::test]
async fn test_client_surfaces_rejections() {
    let addr: SocketAddr = "127.0.0.1:28492".parse().unwrap();
    let shutdown = common::start_server(addr, Arc::new(CarStore::new())).await;
    let client = CarsClient::with_client(common::http_client(), &format!("http://{}", addr)).unwrap();

    match client.greet("", NameSource::Body).await {
        Err(ClientError::Status { status, body }) => {
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body, "name is required");
        }
        other => panic!("expected 400, got {:?}", other),
    }

    let free = Car::new(CarId::number(1), None, "bike", "fixie", 0);
    match client.create_car(&free).await {
        Err(ClientError::Status { status, .. }) => assert_eq!(status, StatusCode::BAD_REQUEST),
        other => panic!("expected 400, got {:?}", other),
    }
    assert!(client.list_cars(None).await.unwrap().is_empty());

    shutdown.trigger();
}
