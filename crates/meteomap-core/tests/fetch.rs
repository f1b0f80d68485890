#![cfg(feature = "fetch")]

use meteomap_core::loader::fetch_with;
use meteomap_core::prelude::*;
use meteomap_core::session::spawn_load_with;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread;

const DATASET: &str = r#"{"type": "FeatureCollection", "features": [
    {"type": "Feature",
     "geometry": {"type": "Polygon", "coordinates": [[[1.4, 42.4], [1.8, 42.4], [1.8, 42.7], [1.4, 42.4]]]},
     "properties": {"code": "AD07", "country": "AD", "name": "Andorra la Vella", "type": "Parish"}}
]}"#;

/// Serves exactly one HTTP response on a loopback port and returns its URL.
fn serve_once(status: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/dataset.geojson", listener.local_addr().unwrap());
    thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream);
        let mut line = String::new();
        while reader.read_line(&mut line).unwrap() > 0 && line != "\r\n" {
            line.clear();
        }
        let mut stream = reader.into_inner();
        write!(
            stream,
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        )
        .unwrap();
    });
    url
}

fn client() -> reqwest::blocking::Client {
    reqwest::blocking::Client::builder().no_proxy().build().unwrap()
}

#[test]
fn non_success_status_is_a_download_error() {
    let url = serve_once("404 Not Found", "");
    match fetch_with(&client(), &url) {
        Err(MapError::Download(msg)) => assert!(msg.contains("404"), "{msg}"),
        other => panic!("expected download error, got {other:?}"),
    }
}

#[test]
fn failed_download_reaches_the_user_once() {
    let url = serve_once("404 Not Found", "");
    let client = client();
    let handle = spawn_load_with(move || fetch_with(&client, &url));

    let mut session = MapSession::new();
    match session.apply(handle.wait()) {
        Notification::Error(msg) => {
            assert!(
                msg.starts_with("Error downloading or loading data: download failed:"),
                "{msg}"
            );
            assert!(msg.contains("404"), "{msg}");
        }
        other => panic!("expected error, got {other:?}"),
    }
    assert!(session.controls_enabled());
    assert!(session.dataset().is_none());
}

#[test]
fn successful_download_is_parsed() {
    let url = serve_once("200 OK", DATASET);
    let fc = fetch_with(&client(), &url).unwrap();
    assert_eq!(fc.len(), 1);
    assert_eq!(fc.countries(), vec!["AD"]);
}
