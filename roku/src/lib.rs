//! Discover Roku devices on the local network and query them over ECP.
//!
//! Discovery multicasts an SSDP search and hands back one [`Device`] per
//! answering box. Each handle exposes the read-only query endpoints as typed
//! calls over plain blocking HTTP.
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use roku::{discover, ECP_SEARCH_TARGET};
//!
//! # fn main() -> roku::Result<()> {
//! let devices = discover(ECP_SEARCH_TARGET, Duration::from_secs(3))?;
//!
//! for device in &devices {
//!   let info = device.get_device_info()?;
//!   println!("{} at {}", info.friendly_device_name, device.url());
//! }
//! # Ok(())
//! # }
//! ```

pub mod device;
pub mod error;
pub mod models;
pub mod transport;

// Re-export key types for easier access
pub use device::Device;
pub use error::{Result, RokuError};
pub use models::{ActiveApp, App, DeviceInfo};
pub use transport::discovery::{
  devices_from_records, discover, discover_with_transport, ECP_SEARCH_TARGET,
};
pub use transport::http::{HttpTransport, Transport, DEFAULT_TIMEOUT};
pub use transport::ssdp::{SsdpClient, SsdpRecord};
