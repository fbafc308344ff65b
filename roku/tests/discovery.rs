use std::sync::Arc;
use std::time::Duration;

use roku::transport::http::HttpTransport;
use roku::transport::ssdp::SsdpRecord;
use roku::{devices_from_records, discover, Device, RokuError, Transport, ECP_SEARCH_TARGET};

fn record(location: &str) -> SsdpRecord {
  SsdpRecord {
    location: location.to_string(),
    search_target: ECP_SEARCH_TARGET.to_string(),
    usn: "uuid:roku:ecp:X00000PGAVCY".to_string(),
    server: None,
  }
}

#[test]
fn test_every_record_becomes_a_handle_in_order() {
  let transport: Arc<dyn Transport> =
    Arc::new(HttpTransport::new().expect("default transport should build"));

  let records = vec![
    record("http://192.168.1.134:8060/"),
    record("http://192.168.1.135:8060/"),
    record("http://192.168.1.136:8060/"),
  ];

  let devices = devices_from_records(&records, transport);

  assert_eq!(devices.len(), records.len());
  assert_eq!(devices[0].url(), "http://192.168.1.134:8060");
  assert_eq!(devices[1].url(), "http://192.168.1.135:8060");
  assert_eq!(devices[2].url(), "http://192.168.1.136:8060");
}

#[test]
fn test_empty_location_yields_a_handle_that_fails_on_use() {
  let transport: Arc<dyn Transport> = Arc::new(
    HttpTransport::with_timeout(Duration::from_millis(200)).expect("transport should build"),
  );

  let devices = devices_from_records(&[record("")], transport);
  assert_eq!(devices.len(), 1);

  let device = &devices[0];
  assert!(matches!(
    device.get_device_info(),
    Err(RokuError::Transport { .. })
  ));
  assert!(matches!(
    device.get_active_app(),
    Err(RokuError::Transport { .. })
  ));
  assert!(matches!(
    device.get_installed_apps(),
    Err(RokuError::Transport { .. })
  ));
}

#[test]
fn test_from_url_trims_the_trailing_slash_discovery_reports() {
  // SSDP LOCATION headers usually end in a slash.
  let device = Device::from_url("http://192.168.1.134:8060/").expect("handle should build");

  assert_eq!(device.url(), "http://192.168.1.134:8060");
}

#[test]
fn test_scan_with_short_timeout_returns_promptly() {
  let start = std::time::Instant::now();
  let result = discover(ECP_SEARCH_TARGET, Duration::from_millis(100));
  let elapsed = start.elapsed();

  // Either outcome is valid without real devices on the network.
  assert!(result.is_ok() || result.is_err());
  assert!(
    elapsed < Duration::from_secs(5),
    "scan should respect its timeout, took {:?}",
    elapsed
  );
}
