use serde::{Deserialize, Serialize};

/// Device metadata reported by `/query/device-info`.
///
/// The field list is a one-to-one mirror of the device's wire format; typed
/// access to every reported element is part of the crate contract. Elements
/// the device omits are left at their zero value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "device-info", default)]
pub struct DeviceInfo {
  #[serde(rename = "udn")]
  pub udn: String,

  #[serde(rename = "serial-number")]
  pub serial_number: String,

  #[serde(rename = "device-id")]
  pub device_id: String,

  #[serde(rename = "advertising-id")]
  pub advertising_id: String,

  #[serde(rename = "vendor-name")]
  pub vendor_name: String,

  #[serde(rename = "model-name")]
  pub model_name: String,

  #[serde(rename = "model-number")]
  pub model_number: String,

  #[serde(rename = "model-region")]
  pub model_region: String,

  #[serde(rename = "is-tv")]
  pub is_tv: bool,

  #[serde(rename = "is-stick")]
  pub is_stick: bool,

  #[serde(rename = "screen-size")]
  pub screen_size: u32,

  #[serde(rename = "panel-id")]
  pub panel_id: u32,

  #[serde(rename = "tuner-type")]
  pub tuner_type: String,

  #[serde(rename = "supports-ethernet")]
  pub supports_ethernet: bool,

  #[serde(rename = "wifi-mac")]
  pub wifi_mac: String,

  #[serde(rename = "wifi-driver")]
  pub wifi_driver: String,

  #[serde(rename = "ethernet-mac")]
  pub ethernet_mac: String,

  #[serde(rename = "network-type")]
  pub network_type: String,

  #[serde(rename = "network-name")]
  pub network_name: String,

  #[serde(rename = "friendly-device-name")]
  pub friendly_device_name: String,

  #[serde(rename = "friendly-model-name")]
  pub friendly_model_name: String,

  #[serde(rename = "default-device-name")]
  pub default_device_name: String,

  #[serde(rename = "user-device-name")]
  pub user_device_name: String,

  #[serde(rename = "user-device-location")]
  pub user_device_location: String,

  #[serde(rename = "build-number")]
  pub build_number: String,

  #[serde(rename = "software-version")]
  pub software_version: String,

  #[serde(rename = "software-build")]
  pub software_build: u32,

  #[serde(rename = "secure-device")]
  pub secure_device: bool,

  #[serde(rename = "language")]
  pub language: String,

  #[serde(rename = "country")]
  pub country: String,

  #[serde(rename = "locale")]
  pub locale: String,

  #[serde(rename = "time-zone-auto")]
  pub time_zone_auto: bool,

  #[serde(rename = "time-zone")]
  pub time_zone: String,

  #[serde(rename = "time-zone-name")]
  pub time_zone_name: String,

  #[serde(rename = "time-zone-tz")]
  pub time_zone_tz: String,

  #[serde(rename = "time-zone-offset")]
  pub time_zone_offset: i32,

  #[serde(rename = "clock-format")]
  pub clock_format: String,

  #[serde(rename = "uptime")]
  pub uptime: u64,

  #[serde(rename = "power-mode")]
  pub power_mode: String,

  #[serde(rename = "supports-suspend")]
  pub supports_suspend: bool,

  #[serde(rename = "supports-find-remote")]
  pub supports_find_remote: bool,

  #[serde(rename = "find-remote-is-possible")]
  pub find_remote_is_possible: bool,

  #[serde(rename = "supports-audio-guide")]
  pub supports_audio_guide: bool,

  #[serde(rename = "supports-rva")]
  pub supports_rva: bool,

  #[serde(rename = "developer-enabled")]
  pub developer_enabled: bool,

  #[serde(rename = "keyed-developer-id")]
  pub keyed_developer_id: String,

  #[serde(rename = "search-enabled")]
  pub search_enabled: bool,

  #[serde(rename = "search-channels-enabled")]
  pub search_channels_enabled: bool,

  #[serde(rename = "voice-search-enabled")]
  pub voice_search_enabled: bool,

  #[serde(rename = "notifications-enabled")]
  pub notifications_enabled: bool,

  #[serde(rename = "notifications-first-use")]
  pub notifications_first_use: bool,

  #[serde(rename = "supports-private-listening")]
  pub supports_private_listening: bool,

  #[serde(rename = "supports-private-listening-dtv")]
  pub supports_private_listening_dtv: bool,

  #[serde(rename = "supports-warm-standby")]
  pub supports_warm_standby: bool,

  #[serde(rename = "headphones-connected")]
  pub headphones_connected: bool,

  #[serde(rename = "expert-pq-enabled")]
  pub expert_pq_enabled: String,

  #[serde(rename = "supports-ecs-textedit")]
  pub supports_ecs_textedit: bool,

  #[serde(rename = "supports-ecs-microphone")]
  pub supports_ecs_microphone: bool,

  #[serde(rename = "supports-wake-on-wlan")]
  pub supports_wake_on_wlan: bool,

  #[serde(rename = "has-play-on-roku")]
  pub has_play_on_roku: bool,

  #[serde(rename = "has-mobile-screensaver")]
  pub has_mobile_screensaver: bool,

  #[serde(rename = "support-url")]
  pub support_url: String,

  #[serde(rename = "grandcentral-version")]
  pub grandcentral_version: String,

  #[serde(rename = "trc-version")]
  pub trc_version: String,

  #[serde(rename = "trc-channel-version")]
  pub trc_channel_version: String,

  #[serde(rename = "has-wifi-extender")]
  pub has_wifi_extender: bool,

  #[serde(rename = "has-wifi-5G-support")]
  pub has_wifi_5g_support: bool,

  #[serde(rename = "can-use-wifi-extender")]
  pub can_use_wifi_extender: bool,
}

/// The currently foregrounded app, from `/query/active-app`.
///
/// The home screen and other system states are still reported as a single
/// descriptor, usually with every attribute absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "active-app")]
pub struct ActiveApp {
  #[serde(rename = "app")]
  pub app: App,
}

/// One app or input source known to the device.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "app")]
pub struct App {
  /// Channel id; absent for non-app system states such as the home screen.
  #[serde(rename = "@id", default, skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,

  #[serde(rename = "@subtype", default, skip_serializing_if = "Option::is_none")]
  pub subtype: Option<String>,

  /// `appl` for an installed channel, `tvin` for a tuner input.
  #[serde(rename = "@type", default, skip_serializing_if = "Option::is_none")]
  pub app_type: Option<String>,

  #[serde(rename = "@version", default, skip_serializing_if = "Option::is_none")]
  pub version: Option<String>,

  /// Display name as reported by the device, entities decoded exactly once.
  #[serde(rename = "$text", default)]
  pub name: String,
}

/// Wire envelope for `/query/apps`; callers receive the inner `Vec<App>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "apps")]
pub(crate) struct AppList {
  #[serde(rename = "app", default)]
  pub apps: Vec<App>,
}
