//! Structured form of a connection, rendered into the description column of a
//! [`NetEntry`](super::entry::NetEntry).

use std::fmt;
use std::net::SocketAddr;

/// Width of the `Proto`, `State`, `Src` and `Dst` columns of the table header.
pub const PROTO_WIDTH: usize = 6;
pub const STATE_WIDTH: usize = 12;
pub const SRC_WIDTH: usize = 29;
pub const DST_WIDTH: usize = 28;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Protocol {
    TcpV4,
    TcpV6,
}

impl Protocol {
    pub fn as_str(self) -> &'static str {
        match self {
            Protocol::TcpV4 => "TCPv4",
            Protocol::TcpV6 => "TCPv6",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TcpState {
    Closed,
    Listen,
    SynSent,
    SynReceived,
    Established,
    FinWait1,
    FinWait2,
    CloseWait,
    Closing,
    LastAck,
    TimeWait,
}

impl TcpState {
    pub fn as_str(self) -> &'static str {
        match self {
            TcpState::Closed => "CLOSED",
            TcpState::Listen => "LISTENING",
            TcpState::SynSent => "SYN_SENT",
            TcpState::SynReceived => "SYN_RCVD",
            TcpState::Established => "ESTABLISHED",
            TcpState::FinWait1 => "FIN_WAIT1",
            TcpState::FinWait2 => "FIN_WAIT2",
            TcpState::CloseWait => "CLOSE_WAIT",
            TcpState::Closing => "CLOSING",
            TcpState::LastAck => "LAST_ACK",
            TcpState::TimeWait => "TIME_WAIT",
        }
    }
}

impl fmt::Display for TcpState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Connection {
    pub protocol: Protocol,
    pub state: TcpState,
    pub src: SocketAddr,
    pub dst: SocketAddr,
}

impl Connection {
    pub fn new(protocol: Protocol, state: TcpState, src: SocketAddr, dst: SocketAddr) -> Self {
        Self {
            protocol,
            state,
            src,
            dst,
        }
    }

    /// Formats the connection into the column layout of the table header.
    pub fn describe(&self) -> String {
        format!(
            "{:<pw$} {:<sw$} {:<srcw$} {:<dstw$}",
            self.protocol,
            self.state,
            self.src,
            self.dst,
            pw = PROTO_WIDTH,
            sw = STATE_WIDTH,
            srcw = SRC_WIDTH,
            dstw = DST_WIDTH,
        )
    }
}
