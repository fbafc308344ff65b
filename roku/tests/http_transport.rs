use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use roku::transport::http::HttpTransport;
use roku::{Device, RokuError, Transport};

/// Serves exactly one request on a loopback port, then exits.
fn serve_one(status: &str, body: &str) -> (String, thread::JoinHandle<()>) {
  let listener = TcpListener::bind("127.0.0.1:0").expect("loopback bind should succeed");
  let addr = listener.local_addr().expect("bound socket has an address");
  let status = status.to_string();
  let body = body.to_string();

  let handle = thread::spawn(move || {
    if let Ok((mut stream, _)) = listener.accept() {
      let mut request = [0u8; 4096];
      let _ = stream.read(&mut request);

      let response = format!(
        "HTTP/1.1 {}\r\n\
          Content-Type: text/xml; charset=utf-8\r\n\
          Content-Length: {}\r\n\
          Connection: close\r\n\
          \r\n\
          {}",
        status,
        body.len(),
        body
      );
      let _ = stream.write_all(response.as_bytes());
    }
  });

  (format!("http://{}", addr), handle)
}

fn transport() -> HttpTransport {
  HttpTransport::with_timeout(Duration::from_secs(2)).expect("transport should build")
}

#[test]
fn test_ok_response_returns_the_body() {
  let body = include_str!("fixtures/installed_apps.xml");
  let (url, server) = serve_one("200 OK", body);

  let fetched = transport().get(&url).expect("request should complete");

  assert_eq!(fetched, body);
  server.join().expect("server thread should exit");
}

#[test]
fn test_server_error_status_still_returns_the_body() {
  // The status line is deliberately not inspected; a device that answers
  // 500 with a decodable report is treated the same as one answering 200.
  let body = include_str!("fixtures/device_info.xml");
  let (url, server) = serve_one("500 Internal Server Error", body);

  let device = Device::new(url, Arc::new(transport()));
  let info = device.get_device_info().expect("report should decode");

  assert_eq!(info.model_name, "50S425-CA");
  server.join().expect("server thread should exit");
}

#[test]
fn test_garbage_body_is_a_decode_error() {
  let (url, server) = serve_one("200 OK", "this is not xml");

  let device = Device::new(url, Arc::new(transport()));
  let result = device.get_active_app();

  assert!(matches!(result, Err(RokuError::Decode { .. })));
  server.join().expect("server thread should exit");
}

#[test]
fn test_refused_connection_is_a_transport_error() {
  // Bind to grab a free port, then close it again before connecting.
  let listener = TcpListener::bind("127.0.0.1:0").expect("loopback bind should succeed");
  let addr = listener.local_addr().expect("bound socket has an address");
  drop(listener);

  let result = transport().get(&format!("http://{}/query/device-info", addr));

  assert!(matches!(result, Err(RokuError::Transport { .. })));
}
