//! Raw TCP request/response exchange.
//!
//! One connection per call: resolve, connect, write the whole request, read
//! until the peer closes. The request always carries `Connection: close`, so
//! end-of-stream marks the end of the response and no `Content-Length`
//! accounting is needed.

use std::io::{ErrorKind, Read, Write};
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::time::Duration;

use log::{debug, trace};

use crate::config::{DEFAULT_TIMEOUT, READ_BUFFER_SIZE};
use crate::error_handling::TransportError;
use crate::fetch::url::UrlParts;

/// Builds the GET request for `parts`: request line, the four fixed headers
/// and the terminating blank line.
pub fn build_request(parts: &UrlParts, user_agent: &str) -> String {
    format!(
        "GET {path} HTTP/1.1\r\n\
         Host: {host}\r\n\
         Connection: close\r\n\
         User-Agent: {user_agent}\r\n\
         Accept: */*\r\n\
         \r\n",
        path = parts.path,
        host = parts.host_header(),
    )
}

/// Sends `request` to `parts.host:parts.port` and returns every byte the peer
/// sends back.
///
/// `timeout` bounds the connect attempt to each resolved address and every
/// individual read; a zero `timeout` is replaced by the default. The socket
/// is owned by this function and is closed when it returns, whatever the
/// outcome.
///
/// # Errors
///
/// - `ResolutionFailed` when the host name does not resolve
/// - `ConnectionFailed` when no resolved address accepts the connection
/// - `Timeout` when no byte at all arrives within `timeout`
/// - `SendFailed` / `ReadFailed` on socket errors
pub fn connect_and_exchange(
    parts: &UrlParts,
    request: &str,
    timeout: Duration,
) -> Result<Vec<u8>, TransportError> {
    let timeout = effective_timeout(timeout);
    let addrs = resolve(parts)?;
    let mut stream = connect_any(parts, &addrs, timeout)?;

    stream
        .write_all(request.as_bytes())
        .and_then(|()| stream.flush())
        .map_err(|source| TransportError::SendFailed {
            host: parts.host.clone(),
            port: parts.port.clone(),
            source,
        })?;
    trace!("Sent {} request bytes to {}", request.len(), parts.host_header());

    read_to_close(&mut stream, parts, timeout)
}

/// Sockets reject a zero timeout, so zero means "use the default".
fn effective_timeout(timeout: Duration) -> Duration {
    if timeout.is_zero() {
        debug!("Zero timeout requested, using {:?}", DEFAULT_TIMEOUT);
        DEFAULT_TIMEOUT
    } else {
        timeout
    }
}

fn resolve(parts: &UrlParts) -> Result<Vec<SocketAddr>, TransportError> {
    let resolution_failed = |reason: String| TransportError::ResolutionFailed {
        host: parts.host.clone(),
        port: parts.port.clone(),
        reason,
    };

    let port = parts
        .port_number()
        .map_err(|e| resolution_failed(e.to_string()))?;
    let addrs: Vec<SocketAddr> = (parts.host.as_str(), port)
        .to_socket_addrs()
        .map_err(|e| resolution_failed(e.to_string()))?
        .collect();

    if addrs.is_empty() {
        return Err(resolution_failed("no addresses found".to_string()));
    }
    debug!("Resolved {} to {:?}", parts.host, addrs);
    Ok(addrs)
}

fn connect_any(
    parts: &UrlParts,
    addrs: &[SocketAddr],
    timeout: Duration,
) -> Result<TcpStream, TransportError> {
    for addr in addrs {
        match TcpStream::connect_timeout(addr, timeout) {
            Ok(stream) => {
                if let Err(e) = stream.set_read_timeout(Some(timeout)) {
                    debug!("Could not set read timeout on {}: {}", addr, e);
                    continue;
                }
                debug!("Connected to {}", addr);
                return Ok(stream);
            }
            Err(e) => debug!("Connect to {} failed: {}", addr, e),
        }
    }
    Err(TransportError::ConnectionFailed {
        host: parts.host.clone(),
        port: parts.port.clone(),
    })
}

fn read_to_close(
    stream: &mut TcpStream,
    parts: &UrlParts,
    timeout: Duration,
) -> Result<Vec<u8>, TransportError> {
    let mut received = Vec::new();
    let mut buf = [0u8; READ_BUFFER_SIZE];

    loop {
        match stream.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => {
                received.extend_from_slice(&buf[..n]);
                trace!("Read {} bytes ({} total)", n, received.len());
            }
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            // Unix reports an expired SO_RCVTIMEO as WouldBlock, Windows as TimedOut.
            Err(e) if matches!(e.kind(), ErrorKind::WouldBlock | ErrorKind::TimedOut) => {
                if received.is_empty() {
                    return Err(TransportError::Timeout {
                        host: parts.host.clone(),
                        port: parts.port.clone(),
                        timeout_ms: timeout.as_millis(),
                    });
                }
                debug!(
                    "Read timeout after {} bytes from {}, treating as end of response",
                    received.len(),
                    parts.host_header()
                );
                break;
            }
            Err(source) => {
                if received.is_empty() {
                    return Err(TransportError::ReadFailed {
                        host: parts.host.clone(),
                        port: parts.port.clone(),
                        source,
                    });
                }
                debug!(
                    "Read error after {} bytes from {}: {}",
                    received.len(),
                    parts.host_header(),
                    source
                );
                break;
            }
        }
    }

    Ok(received)
}
