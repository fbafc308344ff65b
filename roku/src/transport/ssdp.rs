use std::io::{Error, ErrorKind};
use std::net::UdpSocket;
use std::time::Duration;

const SSDP_MULTICAST_ADDR: &str = "239.255.255.250:1900";

/// One SSDP answer, reduced to the headers discovery cares about.
#[derive(Debug, Clone, PartialEq)]
pub struct SsdpRecord {
  pub location: String,
  pub search_target: String,
  pub usn: String,
  pub server: Option<String>,
}

/// UDP client that multicasts an M-SEARCH and collects the answers.
pub struct SsdpClient {
  socket: UdpSocket,
}

impl SsdpClient {
  /// Creates a client on an ephemeral port with the given read timeout.
  pub fn new(timeout: Duration) -> Result<Self, Error> {
    SsdpClient::bind("0.0.0.0:0", timeout)
  }

  /// Creates a client bound to a specific local address.
  pub fn bind(local_addr: &str, timeout: Duration) -> Result<Self, Error> {
    let socket = UdpSocket::bind(local_addr)?;
    socket.set_read_timeout(Some(timeout))?;
    socket.set_multicast_loop_v4(true)?;

    Ok(Self { socket })
  }

  /// Sends one M-SEARCH for the given target and returns the answer stream.
  ///
  /// The stream ends when the socket's read timeout elapses with no further
  /// datagrams.
  pub fn search(&self, search_target: &str) -> Result<SsdpResponseIter<'_>, Error> {
    let request = format!(
      "M-SEARCH * HTTP/1.1\r\n\
        HOST: {}\r\n\
        MAN: \"ssdp:discover\"\r\n\
        MX: 2\r\n\
        ST: {}\r\n\
        USER-AGENT: roku-rs/0.1 UPnP/1.0\r\n\
        \r\n",
      SSDP_MULTICAST_ADDR, search_target
    );

    self.socket.send_to(request.as_bytes(), SSDP_MULTICAST_ADDR)?;

    Ok(SsdpResponseIter::new(&self.socket))
  }
}

/// Iterator over the answers to one search.
pub struct SsdpResponseIter<'a> {
  socket: &'a UdpSocket,
  buffer: [u8; 2048],
  finished: bool,
}

impl<'a> SsdpResponseIter<'a> {
  fn new(socket: &'a UdpSocket) -> Self {
    Self {
      socket,
      buffer: [0; 2048],
      finished: false,
    }
  }
}

impl<'a> Iterator for SsdpResponseIter<'a> {
  type Item = Result<SsdpRecord, Error>;

  fn next(&mut self) -> Option<Self::Item> {
    if self.finished {
      return None;
    }

    // Datagrams that are not well-formed SSDP answers are skipped, not
    // surfaced; the multicast group carries plenty of unrelated traffic.
    loop {
      match self.socket.recv_from(&mut self.buffer) {
        Ok((size, source)) => match std::str::from_utf8(&self.buffer[..size]) {
          Ok(text) => match parse_ssdp_response(text) {
            Some(record) => return Some(Ok(record)),
            None => log::debug!("ignoring non-ssdp datagram from {}", source),
          },
          Err(_) => log::debug!("ignoring non-utf8 datagram from {}", source),
        },
        Err(e) => {
          if e.kind() == ErrorKind::WouldBlock || e.kind() == ErrorKind::TimedOut {
            self.finished = true;
            return None;
          }
          return Some(Err(e));
        }
      }
    }
  }
}

/// Parses one HTTP-over-UDP answer; LOCATION, ST and USN are required.
fn parse_ssdp_response(response: &str) -> Option<SsdpRecord> {
  let mut location = None;
  let mut search_target = None;
  let mut usn = None;
  let mut server = None;

  for line in response.lines() {
    let line = line.trim();

    if let Some(value) = header_value(line, "LOCATION") {
      location = Some(value);
    } else if let Some(value) = header_value(line, "ST") {
      search_target = Some(value);
    } else if let Some(value) = header_value(line, "USN") {
      usn = Some(value);
    } else if let Some(value) = header_value(line, "SERVER") {
      server = Some(value);
    }
  }

  match (location, search_target, usn) {
    (Some(location), Some(search_target), Some(usn)) => Some(SsdpRecord {
      location,
      search_target,
      usn,
      server,
    }),
    _ => None,
  }
}

/// Extracts the value from a header line, matching the name case-insensitively.
fn header_value(line: &str, name: &str) -> Option<String> {
  let (key, value) = line.split_once(':')?;
  if key.trim().eq_ignore_ascii_case(name) {
    Some(value.trim().to_string())
  } else {
    None
  }
}
