// SLB service-group member endpoints
//
// Members live under their group's path and are keyed by (server-name, port);
// AXAPI v3 joins compound keys with `+` in per-object paths:
// `slb/service-group/{group}/member/{name}+{port}`.

use serde_json::Value;
use tracing::debug;

use crate::client::AxapiClient;
use crate::error::Error;
use crate::slb::models::{MemberOptions, MemberPayload};

fn member_path(group: &str, server_name: &str, port: u16) -> String {
    format!("slb/service-group/{group}/member/{server_name}+{port}")
}

impl AxapiClient {
    /// Add a member to a service group.
    ///
    /// `POST slb/service-group/{group}/member/`
    pub async fn create_member(
        &self,
        group: &str,
        server_name: &str,
        port: u16,
        opts: &MemberOptions,
    ) -> Result<Value, Error> {
        debug!(group, server_name, port, "adding member");
        let payload = MemberPayload::new(server_name, port, opts);
        self.post(&format!("slb/service-group/{group}/member/"), &payload)
            .await
    }

    /// Replace a member's configuration.
    ///
    /// `POST slb/service-group/{group}/member/{name}+{port}`
    pub async fn update_member(
        &self,
        group: &str,
        server_name: &str,
        port: u16,
        opts: &MemberOptions,
    ) -> Result<Value, Error> {
        debug!(group, server_name, port, "updating member");
        let payload = MemberPayload::new(server_name, port, opts);
        self.post(&member_path(group, server_name, port), &payload)
            .await
    }

    /// Remove a member from a service group.
    ///
    /// `DELETE slb/service-group/{group}/member/{name}+{port}`
    pub async fn delete_member(
        &self,
        group: &str,
        server_name: &str,
        port: u16,
    ) -> Result<Value, Error> {
        debug!(group, server_name, port, "removing member");
        self.delete(&member_path(group, server_name, port)).await
    }

    /// Fetch a member's configuration.
    ///
    /// `GET slb/service-group/{group}/member/{name}+{port}`
    pub async fn get_member(
        &self,
        group: &str,
        server_name: &str,
        port: u16,
    ) -> Result<Value, Error> {
        self.get(&member_path(group, server_name, port)).await
    }
}
