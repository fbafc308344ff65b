use std::env;

use roku::Device;

fn main() -> Result<(), Box<dyn std::error::Error>> {
  let ip = env::args()
    .nth(1)
    .unwrap_or_else(|| "192.168.1.134".to_string());
  let device = Device::from_url(format!("http://{}:8060", ip))?;

  let info = device.get_device_info()?;
  println!(
    "{} ({} {})",
    info.friendly_device_name, info.vendor_name, info.model_name
  );
  println!(
    "serial {}  software {} build {}",
    info.serial_number, info.software_version, info.build_number
  );
  println!("power {}  uptime {}s", info.power_mode, info.uptime);

  let active = device.get_active_app()?;
  match active.app.id {
    Some(id) => println!("active app: {} (id {})", active.app.name, id),
    None => println!("active app: {}", active.app.name),
  }

  let apps = device.get_installed_apps()?;
  println!("{} installed apps, first few:", apps.len());
  for app in apps.iter().take(5) {
    println!("  - {}", app.name);
  }

  Ok(())
}
