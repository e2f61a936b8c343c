// SLB virtual-server endpoints
//
// CRUD plus stats/oper telemetry for `slb/virtual-server`. Create performs a
// get() existence pre-check and refuses to POST over an existing name; the
// check-then-create window is not atomic against other management sessions.

use std::net::IpAddr;

use serde_json::Value;
use tracing::debug;

use crate::client::AxapiClient;
use crate::error::Error;
use crate::slb::models::{VirtualServerOptions, VirtualServerPayload};

impl AxapiClient {
    /// Create a virtual server.
    ///
    /// `POST slb/virtual-server/` after a `get` existence check. An existing
    /// name returns [`Error::Exists`] without issuing the create; any lookup
    /// failure other than "no such object" propagates unchanged.
    pub async fn create_virtual_server(
        &self,
        name: &str,
        ip: IpAddr,
        opts: &VirtualServerOptions,
    ) -> Result<Value, Error> {
        match self.get_virtual_server(name).await {
            Ok(_) => {
                return Err(Error::Exists {
                    code: 0,
                    message: format!("virtual server {name} already exists"),
                });
            }
            Err(e) if e.is_not_found() => {}
            Err(e) => return Err(e),
        }

        debug!(name, %ip, "creating virtual server");
        let payload = VirtualServerPayload::new(name, ip, opts);
        self.post("slb/virtual-server/", &payload).await
    }

    /// Replace a virtual server's configuration (no existence pre-check).
    ///
    /// `POST slb/virtual-server/{name}` with the same payload shape as
    /// create.
    pub async fn update_virtual_server(
        &self,
        name: &str,
        ip: IpAddr,
        opts: &VirtualServerOptions,
    ) -> Result<Value, Error> {
        debug!(name, %ip, "updating virtual server");
        let payload = VirtualServerPayload::new(name, ip, opts);
        self.post(&format!("slb/virtual-server/{name}"), &payload).await
    }

    /// Delete a virtual server.
    ///
    /// `DELETE slb/virtual-server/{name}`. Deleting an unknown name surfaces
    /// the appliance's "no such object" error, not a silent success.
    pub async fn delete_virtual_server(&self, name: &str) -> Result<Value, Error> {
        debug!(name, "deleting virtual server");
        self.delete(&format!("slb/virtual-server/{name}")).await
    }

    /// Fetch a virtual server's configuration.
    ///
    /// `GET slb/virtual-server/{name}`; an unknown name maps to
    /// [`Error::NotFound`].
    pub async fn get_virtual_server(&self, name: &str) -> Result<Value, Error> {
        self.get(&format!("slb/virtual-server/{name}")).await
    }

    /// Per-port traffic counters.
    ///
    /// `GET slb/virtual-server/{name}/port/stats`; the body is returned
    /// verbatim, only the generic fail envelope is mapped.
    pub async fn virtual_server_stats(&self, name: &str) -> Result<Value, Error> {
        self.get(&format!("slb/virtual-server/{name}/port/stats")).await
    }

    /// Operational state (up/down, current connections).
    ///
    /// `GET slb/virtual-server/{name}/oper`
    pub async fn virtual_server_oper(&self, name: &str) -> Result<Value, Error> {
        self.get(&format!("slb/virtual-server/{name}/oper")).await
    }
}
