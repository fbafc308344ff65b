use std::time::Duration;

use roku::{discover, RokuError, ECP_SEARCH_TARGET};

fn main() -> Result<(), Box<dyn std::error::Error>> {
  println!("Scanning for Roku devices...");

  let devices = match discover(ECP_SEARCH_TARGET, Duration::from_secs(3)) {
    Ok(devices) => devices,
    Err(RokuError::Discovery(reason)) => {
      println!("Scan failed: {}", reason);
      return Ok(());
    }
    Err(e) => return Err(Box::new(e)),
  };

  if devices.is_empty() {
    println!("No Roku devices answered.");
    return Ok(());
  }

  println!("Found {} devices:", devices.len());
  for device in &devices {
    match device.get_device_info() {
      Ok(info) => println!(
        "  - {} ({} {}) at {}",
        info.friendly_device_name,
        info.vendor_name,
        info.model_name,
        device.url()
      ),
      Err(e) => println!("  - {} did not answer: {}", device.url(), e),
    }
  }

  Ok(())
}
