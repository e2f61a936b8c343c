// SLB endpoint families
//
// Server-load-balancing configuration objects: virtual servers (VIPs), real
// servers, service groups, and group members. Each module implements inherent
// methods on `AxapiClient`; shared payload types live in `models`.

pub mod member;
pub mod models;
pub mod server;
pub mod service_group;
pub mod virtual_server;

pub use models::{LbMethod, MemberOptions, Protocol, ServerOptions, VirtualServerOptions};
