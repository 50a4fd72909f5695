//! A [`ConnectionSource`] over the Linux procfs socket tables.
//!
//! Reads `net/tcp` and `net/tcp6` under a configurable procfs root and attributes
//! every socket to its owning process by scanning `<pid>/fd` links for `socket:[inode]`.
//! The socket inode stands in for the kernel object address. Procfs has no record of
//! when a connection was created, so captured entries carry no timestamp.

use std::collections::HashMap;
use std::fs;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, bail};
use sysnet_common::network::connection::{Connection, Protocol, TcpState};
use sysnet_common::network::entry::{NetEntry, NetMap};
use sysnet_common::source::ConnectionSource;
use tracing::{debug, trace, warn};

/// A socket row of `net/tcp` or `net/tcp6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocketRow {
    pub connection: Connection,
    pub inode: u64,
}

pub struct ProcNetSource {
    proc_root: PathBuf,
}

impl ProcNetSource {
    pub fn new(proc_root: impl Into<PathBuf>) -> Self {
        Self {
            proc_root: proc_root.into(),
        }
    }

    /// Reads both socket tables and attributes them to processes.
    pub fn capture(&self) -> anyhow::Result<NetMap> {
        let net = self.proc_root.join("net");
        let mut rows = read_table(&net.join("tcp"), Protocol::TcpV4)?;
        match read_table(&net.join("tcp6"), Protocol::TcpV6) {
            Ok(v6) => rows.extend(v6),
            Err(e) => debug!("skipping IPv6 sockets: {e:#}"),
        }

        let owners = socket_owners(&self.proc_root);
        let map: NetMap = rows
            .into_iter()
            .map(|row| {
                let pid = owners.get(&row.inode).copied().unwrap_or(0);
                NetEntry::new(pid, row.connection.describe()).with_object(row.inode)
            })
            .collect();

        debug!(count = map.len(), "captured connection table");
        Ok(map)
    }
}

impl ConnectionSource for ProcNetSource {
    fn acquire(&self) -> Option<Arc<NetMap>> {
        match self.capture() {
            Ok(map) => Some(Arc::new(map)),
            Err(e) => {
                warn!("Connection table unavailable: {e:#}");
                None
            }
        }
    }
}

fn read_table(path: &Path, protocol: Protocol) -> anyhow::Result<Vec<SocketRow>> {
    let contents = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    Ok(parse_table(&contents, protocol))
}

/// Parses the contents of a procfs socket table, skipping the header and malformed rows.
pub fn parse_table(contents: &str, protocol: Protocol) -> Vec<SocketRow> {
    contents
        .lines()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| match parse_row(line, protocol) {
            Ok(row) => Some(row),
            Err(e) => {
                trace!("skipping socket row: {e:#}");
                None
            }
        })
        .collect()
}

fn parse_row(line: &str, protocol: Protocol) -> anyhow::Result<SocketRow> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 10 {
        bail!("expected at least 10 fields, found {}", fields.len());
    }

    let src = parse_endpoint(fields[1], protocol).context("local address")?;
    let dst = parse_endpoint(fields[2], protocol).context("remote address")?;
    let code = u8::from_str_radix(fields[3], 16).context("state")?;
    let state = linux_state(code).with_context(|| format!("unknown state {code:#04x}"))?;
    let inode = fields[9].parse::<u64>().context("inode")?;

    Ok(SocketRow {
        connection: Connection::new(protocol, state, src, dst),
        inode,
    })
}

/// Parses `ADDR:PORT` where `ADDR` is the kernel's host-order hex dump of the address.
fn parse_endpoint(field: &str, protocol: Protocol) -> anyhow::Result<SocketAddr> {
    let Some((addr, port)) = field.split_once(':') else {
        bail!("missing port in {field}");
    };
    let port = u16::from_str_radix(port, 16).with_context(|| format!("port {port}"))?;

    let ip = match protocol {
        Protocol::TcpV4 => {
            let word = u32::from_str_radix(addr, 16).with_context(|| format!("IPv4 address {addr}"))?;
            IpAddr::V4(Ipv4Addr::from(word.to_ne_bytes()))
        }
        Protocol::TcpV6 => {
            if addr.len() != 32 {
                bail!("IPv6 address {addr} is not 32 hex digits");
            }
            let mut octets = [0u8; 16];
            for (i, chunk) in octets.chunks_exact_mut(4).enumerate() {
                let hex = &addr[i * 8..i * 8 + 8];
                let word = u32::from_str_radix(hex, 16).with_context(|| format!("IPv6 word {hex}"))?;
                chunk.copy_from_slice(&word.to_ne_bytes());
            }
            IpAddr::V6(Ipv6Addr::from(octets))
        }
    };

    Ok(SocketAddr::new(ip, port))
}

fn linux_state(code: u8) -> Option<TcpState> {
    let state = match code {
        0x01 => TcpState::Established,
        0x02 => TcpState::SynSent,
        0x03 | 0x0c => TcpState::SynReceived,
        0x04 => TcpState::FinWait1,
        0x05 => TcpState::FinWait2,
        0x06 => TcpState::TimeWait,
        0x07 => TcpState::Closed,
        0x08 => TcpState::CloseWait,
        0x09 => TcpState::LastAck,
        0x0a => TcpState::Listen,
        0x0b => TcpState::Closing,
        _ => return None,
    };
    Some(state)
}

/// Maps socket inodes to the PID holding a descriptor for them.
///
/// Processes whose descriptors cannot be read are skipped. When a socket is shared,
/// the lowest PID wins so that repeated captures agree.
fn socket_owners(proc_root: &Path) -> HashMap<u64, u32> {
    let mut owners: HashMap<u64, u32> = HashMap::new();
    let Ok(dir) = fs::read_dir(proc_root) else {
        return owners;
    };

    for proc_entry in dir.flatten() {
        let Some(pid) = proc_entry.file_name().to_str().and_then(|s| s.parse::<u32>().ok()) else {
            continue;
        };
        let Ok(fds) = fs::read_dir(proc_entry.path().join("fd")) else {
            continue;
        };
        for fd in fds.flatten() {
            if let Ok(target) = fs::read_link(fd.path())
                && let Some(inode) = socket_inode(&target)
            {
                owners
                    .entry(inode)
                    .and_modify(|owner| *owner = (*owner).min(pid))
                    .or_insert(pid);
            }
        }
    }

    owners
}

fn socket_inode(link: &Path) -> Option<u64> {
    link.to_str()?
        .strip_prefix("socket:[")?
        .strip_suffix(']')?
        .parse()
        .ok()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
