pub mod discovery;
pub mod http;
pub mod ssdp;
