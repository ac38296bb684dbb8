//! Socket and protocol stack construction.

use std::net::{TcpStream, ToSocketAddrs};

use hive_thrift::{
    ReadHalf, TBinaryInputProtocol, TBinaryOutputProtocol, TBufferedReadTransport,
    TBufferedWriteTransport, TIoChannel, TTcpChannel, WriteHalf,
};
use tracing::debug;

use crate::config::{Endpoint, TimeoutConfig};
use crate::error::{HiveError, HiveResult};

/// Input side of a connected binary-protocol stack.
pub type ProtocolIn = TBinaryInputProtocol<TBufferedReadTransport<ReadHalf<TTcpChannel>>>;

/// Output side of a connected binary-protocol stack.
pub type ProtocolOut = TBinaryOutputProtocol<TBufferedWriteTransport<WriteHalf<TTcpChannel>>>;

/// Opens a TCP connection to `endpoint` and wraps it in buffered
/// transports and a strict binary protocol pair.
///
/// The send timeout also bounds the connect; the receive timeout is
/// applied to the read half. Any failure maps to
/// [`HiveError::Connection`].
pub(crate) fn open_protocol_pair(
    endpoint: &Endpoint,
    timeouts: &TimeoutConfig,
) -> HiveResult<(ProtocolIn, ProtocolOut)> {
    debug!("opening Thrift connection to {}", endpoint);

    let addr = (endpoint.host.as_str(), endpoint.port)
        .to_socket_addrs()
        .map_err(|e| HiveError::Connection(format!("{endpoint}: {e}")))?
        .next()
        .ok_or_else(|| {
            HiveError::Connection(format!("{endpoint}: hostname resolved to no addresses"))
        })?;

    let stream = TcpStream::connect_timeout(&addr, timeouts.send_timeout())
        .map_err(|e| HiveError::Connection(format!("{endpoint}: {e}")))?;
    stream
        .set_write_timeout(Some(timeouts.send_timeout()))
        .map_err(|e| HiveError::Connection(format!("{endpoint}: {e}")))?;
    stream
        .set_read_timeout(Some(timeouts.recv_timeout()))
        .map_err(|e| HiveError::Connection(format!("{endpoint}: {e}")))?;

    let channel = TTcpChannel::with_stream(stream);
    let (read_half, write_half) = channel
        .split()
        .map_err(|e| HiveError::Connection(format!("{endpoint}: {e}")))?;

    let i_prot = TBinaryInputProtocol::new(TBufferedReadTransport::new(read_half), true);
    let o_prot = TBinaryOutputProtocol::new(TBufferedWriteTransport::new(write_half), true);

    Ok((i_prot, o_prot))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::TcpListener;

    #[test]
    fn refused_socket_is_a_connection_error() {
        // Bind to reserve a free port, then drop the listener so the
        // connect is refused.
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let endpoint = Endpoint::new("127.0.0.1", port);
        let result = open_protocol_pair(&endpoint, &TimeoutConfig::default());
        match result {
            Err(HiveError::Connection(message)) => {
                assert!(message.contains(&endpoint.to_string()));
            }
            Ok(_) => panic!("expected connection error"),
            Err(other) => panic!("expected connection error, got {other:?}"),
        }
    }

    #[test]
    fn unresolvable_host_is_a_connection_error() {
        let endpoint = Endpoint::new("hiveserver2.invalid", 10000);
        let result = open_protocol_pair(&endpoint, &TimeoutConfig::default());
        assert!(matches!(result, Err(HiveError::Connection(_))));
    }
}
