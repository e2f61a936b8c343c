// SLB real-server endpoints
//
// CRUD for `slb/server` -- the backend hosts that service groups balance
// across. Follows the virtual-server module's create pre-check idiom.

use std::net::IpAddr;

use serde_json::Value;
use tracing::debug;

use crate::client::AxapiClient;
use crate::error::Error;
use crate::slb::models::{ServerOptions, ServerPayload};

impl AxapiClient {
    /// Create a real server.
    ///
    /// `POST slb/server/` after a `get` existence check; an existing name
    /// returns [`Error::Exists`] without issuing the create.
    pub async fn create_server(
        &self,
        name: &str,
        ip: IpAddr,
        opts: &ServerOptions,
    ) -> Result<Value, Error> {
        match self.get_server(name).await {
            Ok(_) => {
                return Err(Error::Exists {
                    code: 0,
                    message: format!("server {name} already exists"),
                });
            }
            Err(e) if e.is_not_found() => {}
            Err(e) => return Err(e),
        }

        debug!(name, %ip, "creating server");
        let payload = ServerPayload::new(name, ip, opts);
        self.post("slb/server/", &payload).await
    }

    /// Replace a real server's configuration (no existence pre-check).
    ///
    /// `POST slb/server/{name}`
    pub async fn update_server(
        &self,
        name: &str,
        ip: IpAddr,
        opts: &ServerOptions,
    ) -> Result<Value, Error> {
        debug!(name, %ip, "updating server");
        let payload = ServerPayload::new(name, ip, opts);
        self.post(&format!("slb/server/{name}"), &payload).await
    }

    /// Delete a real server.
    ///
    /// `DELETE slb/server/{name}`
    pub async fn delete_server(&self, name: &str) -> Result<Value, Error> {
        debug!(name, "deleting server");
        self.delete(&format!("slb/server/{name}")).await
    }

    /// Fetch a real server's configuration.
    ///
    /// `GET slb/server/{name}`
    pub async fn get_server(&self, name: &str) -> Result<Value, Error> {
        self.get(&format!("slb/server/{name}")).await
    }

    /// Operational state for a real server.
    ///
    /// `GET slb/server/{name}/oper`
    pub async fn server_oper(&self, name: &str) -> Result<Value, Error> {
        self.get(&format!("slb/server/{name}/oper")).await
    }
}
