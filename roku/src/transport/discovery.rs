use std::sync::Arc;
use std::time::Duration;

use crate::device::Device;
use crate::error::{Result, RokuError};
use crate::transport::http::{HttpTransport, Transport};
use crate::transport::ssdp::{SsdpClient, SsdpRecord};

/// Search target that Roku devices answer to.
pub const ECP_SEARCH_TARGET: &str = "roku:ecp";

/// Scans the local network and returns a handle per answering device.
///
/// `timeout` bounds how long the scan listens for answers; queries made
/// through the returned handles use the default HTTP timeout.
pub fn discover(search_target: &str, timeout: Duration) -> Result<Vec<Device>> {
  let transport = HttpTransport::new()
    .map_err(|e| RokuError::Discovery(format!("failed to create http client: {}", e)))?;

  discover_with_transport(search_target, timeout, Arc::new(transport))
}

/// Scans the local network, building handles over a caller-supplied transport.
pub fn discover_with_transport(
  search_target: &str,
  timeout: Duration,
  transport: Arc<dyn Transport>,
) -> Result<Vec<Device>> {
  let client = SsdpClient::new(timeout)
    .map_err(|e| RokuError::Discovery(format!("failed to create ssdp client: {}", e)))?;

  let responses = client
    .search(search_target)
    .map_err(|e| RokuError::Discovery(format!("ssdp search failed: {}", e)))?;

  let mut records = Vec::new();
  for result in responses {
    let record =
      result.map_err(|e| RokuError::Discovery(format!("ssdp receive failed: {}", e)))?;
    records.push(record);
  }

  log::debug!("collected {} ssdp records for {}", records.len(), search_target);

  Ok(devices_from_records(&records, transport))
}

/// Builds one handle per record, in record order, all sharing one transport.
///
/// Locations are taken as reported; a record with an unusable location still
/// yields a handle, whose queries then fail with a transport error.
pub fn devices_from_records(records: &[SsdpRecord], transport: Arc<dyn Transport>) -> Vec<Device> {
  records
    .iter()
    .map(|record| Device::new(record.location.clone(), Arc::clone(&transport)))
    .collect()
}
