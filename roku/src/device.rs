use std::fmt;
use std::sync::Arc;

use quick_xml::events::Event;
use quick_xml::Reader;
use serde::de::DeserializeOwned;

use crate::error::{Result, RokuError};
use crate::models::{ActiveApp, App, AppList, DeviceInfo};
use crate::transport::http::{HttpTransport, Transport};

/// Handle for one Roku device, addressed by its ECP base URL.
///
/// Handles are cheap to clone and independent of each other; a failed query
/// against one device never affects another. The transport is shared, so a
/// fleet of handles built by discovery reuses a single HTTP client.
#[derive(Clone)]
pub struct Device {
  url: String,
  transport: Arc<dyn Transport>,
}

impl Device {
  /// Creates a handle from a base URL and an explicit transport.
  ///
  /// A trailing slash on the URL is trimmed so that query paths join cleanly.
  pub fn new(url: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
    let mut url = url.into();
    while url.ends_with('/') {
      url.pop();
    }
    Device { url, transport }
  }

  /// Creates a handle backed by the default HTTP transport.
  pub fn from_url(url: impl Into<String>) -> Result<Self> {
    let transport = Arc::new(HttpTransport::new()?);
    Ok(Device::new(url, transport))
  }

  /// Base URL this handle talks to, without a trailing slash.
  pub fn url(&self) -> &str {
    &self.url
  }

  /// Fetches the device's full metadata report.
  pub fn get_device_info(&self) -> Result<DeviceInfo> {
    self.query("/query/device-info", "device-info")
  }

  /// Fetches the currently foregrounded app or system state.
  pub fn get_active_app(&self) -> Result<ActiveApp> {
    self.query("/query/active-app", "active-app")
  }

  /// Fetches the installed channels and inputs, in device order.
  pub fn get_installed_apps(&self) -> Result<Vec<App>> {
    let list: AppList = self.query("/query/apps", "apps")?;
    Ok(list.apps)
  }

  fn query<T: DeserializeOwned>(&self, path: &str, root: &str) -> Result<T> {
    let url = format!("{}{}", self.url, path);
    log::debug!("querying {}", url);

    let body = self.transport.get(&url)?;

    // Serde decode ignores the root tag, so the name is checked up front;
    // a foreign document must not pass for an all-default report.
    if let Some(name) = root_name(&body) {
      if name != root {
        log::warn!("unexpected root element <{}> from {}", name, url);
        return Err(RokuError::Decode {
          url,
          reason: format!("unexpected root element <{}>, expected <{}>", name, root),
        });
      }
    }

    quick_xml::de::from_str(&body).map_err(|e| {
      log::warn!("failed to decode response from {}: {}", url, e);
      RokuError::Decode {
        url,
        reason: e.to_string(),
      }
    })
  }
}

/// Name of the document's root element, if the body has one.
fn root_name(body: &str) -> Option<String> {
  let mut reader = Reader::from_str(body);
  loop {
    match reader.read_event() {
      Ok(Event::Start(start)) | Ok(Event::Empty(start)) => {
        return Some(String::from_utf8_lossy(start.name().as_ref()).into_owned());
      }
      Ok(Event::Eof) | Err(_) => return None,
      Ok(_) => {}
    }
  }
}

impl fmt::Debug for Device {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Device")
      .field("url", &self.url)
      .finish_non_exhaustive()
  }
}
