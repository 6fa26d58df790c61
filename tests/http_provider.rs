use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use pokebattle::data::moves::DamageCategory;
use pokebattle::error::{ProviderError, ResourceKind};
use pokebattle::provider::{DataProvider, HttpProvider, PokeApiClient};

const PIKACHU: &str = r#"{
    "id": 25,
    "name": "pikachu",
    "types": [{ "slot": 1, "type": { "name": "electric", "url": "" } }],
    "stats": [
        { "base_stat": 35, "stat": { "name": "hp", "url": "" } },
        { "base_stat": 55, "stat": { "name": "attack", "url": "" } },
        { "base_stat": 40, "stat": { "name": "defense", "url": "" } },
        { "base_stat": 50, "stat": { "name": "special-attack", "url": "" } },
        { "base_stat": 50, "stat": { "name": "special-defense", "url": "" } },
        { "base_stat": 90, "stat": { "name": "speed", "url": "" } }
    ],
    "moves": [{ "move": { "name": "thunder-shock", "url": "" } }]
}"#;

const THUNDER_SHOCK: &str = r#"{
    "name": "thunder-shock",
    "power": 40,
    "type": { "name": "electric", "url": "" },
    "damage_class": { "name": "special", "url": "" }
}"#;

/// Serves canned API responses on a local port and counts listing requests.
fn spawn_api() -> (String, Arc<AtomicUsize>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let base = format!("http://{}/api/v2", listener.local_addr().expect("addr"));
    let listings = Arc::new(AtomicUsize::new(0));

    let server_base = base.clone();
    let counter = Arc::clone(&listings);
    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { continue };
            let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));
            let mut request_line = String::new();
            if reader.read_line(&mut request_line).is_err() {
                continue;
            }
            let mut header = String::new();
            while reader.read_line(&mut header).map(|n| n > 2).unwrap_or(false) {
                header.clear();
            }

            let path = request_line.split_whitespace().nth(1).unwrap_or("/").to_string();
            let (status, body) = match path.as_str() {
                "/api/v2/pokemon?offset=0&limit=1" => {
                    counter.fetch_add(1, Ordering::SeqCst);
                    let next = format!("{}/pokemon?offset=1&limit=1", server_base);
                    (
                        "200 OK",
                        format!(r#"{{"next":"{}","results":[{{"name":"pikachu","url":""}}]}}"#, next),
                    )
                }
                "/api/v2/pokemon?offset=1&limit=1" => {
                    counter.fetch_add(1, Ordering::SeqCst);
                    ("200 OK", r#"{"next":null,"results":[{"name":"raichu","url":""}]}"#.to_string())
                }
                "/api/v2/pokemon/pikachu" => ("200 OK", PIKACHU.to_string()),
                "/api/v2/move/thunder-shock" => ("200 OK", THUNDER_SHOCK.to_string()),
                "/api/v2/move/garbled" => ("200 OK", "not json".to_string()),
                "/api/v2/move/overloaded" => ("500 Internal Server Error", "{}".to_string()),
                _ => ("404 Not Found", "Not Found".to_string()),
            };
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });

    (base, listings)
}

fn provider(base: &str) -> HttpProvider {
    let client = PokeApiClient::new(base, Duration::from_secs(5), 1).expect("client");
    HttpProvider::new(client).expect("provider")
}

#[test]
fn creature_lookup_uses_the_paginated_index() {
    let (base, listings) = spawn_api();
    let provider = provider(&base);

    let pikachu = provider.fetch_creature("Pikachu").expect("pikachu");
    assert_eq!(pikachu.id, 25);
    assert_eq!(pikachu.types, vec!["electric"]);
    assert_eq!(pikachu.stats.special_attack, 50);
    assert_eq!(listings.load(Ordering::SeqCst), 2);

    let err = provider.fetch_creature("mewtwo").unwrap_err();
    assert_eq!(err, ProviderError::not_found(ResourceKind::Creature, "mewtwo"));

    // Indexed but missing upstream.
    let err = provider.fetch_creature("raichu").unwrap_err();
    assert!(err.is_not_found());

    assert_eq!(listings.load(Ordering::SeqCst), 2);
}

#[test]
fn move_lookup_maps_http_outcomes() {
    let (base, _) = spawn_api();
    let provider = provider(&base);

    let shock = provider.fetch_move("thunder-shock").expect("move");
    assert_eq!(shock.power, 40);
    assert_eq!(shock.category, DamageCategory::Special);

    assert_eq!(
        provider.fetch_move("struggle").unwrap_err(),
        ProviderError::not_found(ResourceKind::Move, "struggle")
    );
    assert!(matches!(
        provider.fetch_move("garbled").unwrap_err(),
        ProviderError::InvalidData { .. }
    ));
    assert!(matches!(
        provider.fetch_move("overloaded").unwrap_err(),
        ProviderError::Failure { status: Some(500), .. }
    ));
}

#[test]
fn unreachable_api_is_a_failure() {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let base = format!("http://{}/api/v2", listener.local_addr().expect("addr"));
    drop(listener);

    let err = provider(&base).fetch_move("tackle").unwrap_err();
    assert!(matches!(err, ProviderError::Failure { status: None, url: Some(_), .. }));
}
