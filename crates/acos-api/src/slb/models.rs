// SLB request payload types
//
// AXAPI wraps every configuration write in an object keyed by resource type,
// e.g. `{"virtual-server": {...}}`. Field names use the appliance's
// hyphenated forms; optional fields are omitted from the payload entirely
// when the caller does not supply them.

use std::net::IpAddr;

use serde::Serialize;

// ── Virtual server ───────────────────────────────────────────────────

/// Optional settings for virtual-server create/update.
#[derive(Debug, Clone, Default)]
pub struct VirtualServerOptions {
    /// Disable ARP for the VIP. Serialized as `arp-disable: 0|1`, default 0.
    pub arp_disable: bool,
    /// VRRP-A vrid to bind the VIP to.
    pub vrid: Option<u32>,
    /// Name of a virtual-server template to apply.
    pub template_virtual_server: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct VirtualServerPayload {
    #[serde(rename = "virtual-server")]
    virtual_server: VirtualServerAttrs,
}

#[derive(Debug, Serialize)]
struct VirtualServerAttrs {
    name: String,
    #[serde(rename = "ip-address", skip_serializing_if = "Option::is_none")]
    ip_address: Option<String>,
    #[serde(rename = "ipv6-address", skip_serializing_if = "Option::is_none")]
    ipv6_address: Option<String>,
    #[serde(rename = "arp-disable")]
    arp_disable: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    vrid: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    template_virtual_server: Option<String>,
}

impl VirtualServerPayload {
    /// Build the payload, selecting `ip-address` vs `ipv6-address` from the
    /// address family of `ip`.
    pub(crate) fn new(name: &str, ip: IpAddr, opts: &VirtualServerOptions) -> Self {
        let (ip_address, ipv6_address) = match ip {
            IpAddr::V4(addr) => (Some(addr.to_string()), None),
            IpAddr::V6(addr) => (None, Some(addr.to_string())),
        };
        Self {
            virtual_server: VirtualServerAttrs {
                name: name.to_owned(),
                ip_address,
                ipv6_address,
                arp_disable: u8::from(opts.arp_disable),
                vrid: opts.vrid,
                template_virtual_server: opts.template_virtual_server.clone(),
            },
        }
    }
}

// ── Real server ──────────────────────────────────────────────────────

/// Optional settings for real-server create/update.
#[derive(Debug, Clone)]
pub struct ServerOptions {
    /// Serialized as `action: "enable" | "disable"`, default enabled.
    pub enabled: bool,
    /// Connection limit for the server.
    pub conn_limit: Option<u32>,
    /// Load-balancing weight.
    pub weight: Option<u32>,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            conn_limit: None,
            weight: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ServerPayload {
    server: ServerAttrs,
}

#[derive(Debug, Serialize)]
struct ServerAttrs {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    host: Option<String>,
    #[serde(rename = "server-ipv6-addr", skip_serializing_if = "Option::is_none")]
    server_ipv6_addr: Option<String>,
    action: &'static str,
    #[serde(rename = "conn-limit", skip_serializing_if = "Option::is_none")]
    conn_limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    weight: Option<u32>,
}

impl ServerPayload {
    pub(crate) fn new(name: &str, ip: IpAddr, opts: &ServerOptions) -> Self {
        let (host, server_ipv6_addr) = match ip {
            IpAddr::V4(addr) => (Some(addr.to_string()), None),
            IpAddr::V6(addr) => (None, Some(addr.to_string())),
        };
        Self {
            server: ServerAttrs {
                name: name.to_owned(),
                host,
                server_ipv6_addr,
                action: enable_action(opts.enabled),
                conn_limit: opts.conn_limit,
                weight: opts.weight,
            },
        }
    }
}

// ── Service group ────────────────────────────────────────────────────

/// Transport protocol for a service group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Protocol {
    #[serde(rename = "tcp")]
    Tcp,
    #[serde(rename = "udp")]
    Udp,
}

/// Load-balancing method, serialized in the appliance's string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LbMethod {
    #[serde(rename = "round-robin")]
    RoundRobin,
    #[serde(rename = "weighted-rr")]
    WeightedRr,
    #[serde(rename = "least-connection")]
    LeastConnection,
    #[serde(rename = "fastest-response")]
    FastestResponse,
    #[serde(rename = "src-ip-hash")]
    SrcIpHash,
    #[serde(rename = "dst-ip-hash")]
    DstIpHash,
}

#[derive(Debug, Serialize)]
pub(crate) struct ServiceGroupPayload {
    #[serde(rename = "service-group")]
    service_group: ServiceGroupAttrs,
}

#[derive(Debug, Serialize)]
struct ServiceGroupAttrs {
    name: String,
    protocol: Protocol,
    #[serde(rename = "lb-method")]
    lb_method: LbMethod,
}

impl ServiceGroupPayload {
    pub(crate) fn new(name: &str, protocol: Protocol, lb_method: LbMethod) -> Self {
        Self {
            service_group: ServiceGroupAttrs {
                name: name.to_owned(),
                protocol,
                lb_method,
            },
        }
    }
}

// ── Service-group member ─────────────────────────────────────────────

/// Optional settings for a service-group member.
#[derive(Debug, Clone)]
pub struct MemberOptions {
    /// Serialized as `member-state: "enable" | "disable"`, default enabled.
    pub enabled: bool,
}

impl Default for MemberOptions {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct MemberPayload {
    member: MemberAttrs,
}

#[derive(Debug, Serialize)]
struct MemberAttrs {
    name: String,
    port: u16,
    #[serde(rename = "member-state")]
    member_state: &'static str,
}

impl MemberPayload {
    pub(crate) fn new(server_name: &str, port: u16, opts: &MemberOptions) -> Self {
        Self {
            member: MemberAttrs {
                name: server_name.to_owned(),
                port,
                member_state: enable_action(opts.enabled),
            },
        }
    }
}

fn enable_action(enabled: bool) -> &'static str {
    if enabled { "enable" } else { "disable" }
}
