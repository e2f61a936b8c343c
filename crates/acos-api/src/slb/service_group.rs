// SLB service-group endpoints
//
// CRUD for `slb/service-group`. Members are managed separately in the
// `member` module under the group's sub-path.

use serde_json::Value;
use tracing::debug;

use crate::client::AxapiClient;
use crate::error::Error;
use crate::slb::models::{LbMethod, Protocol, ServiceGroupPayload};

impl AxapiClient {
    /// Create a service group.
    ///
    /// `POST slb/service-group/` after a `get` existence check; an existing
    /// name returns [`Error::Exists`] without issuing the create.
    pub async fn create_service_group(
        &self,
        name: &str,
        protocol: Protocol,
        lb_method: LbMethod,
    ) -> Result<Value, Error> {
        match self.get_service_group(name).await {
            Ok(_) => {
                return Err(Error::Exists {
                    code: 0,
                    message: format!("service group {name} already exists"),
                });
            }
            Err(e) if e.is_not_found() => {}
            Err(e) => return Err(e),
        }

        debug!(name, ?protocol, ?lb_method, "creating service group");
        let payload = ServiceGroupPayload::new(name, protocol, lb_method);
        self.post("slb/service-group/", &payload).await
    }

    /// Replace a service group's configuration (no existence pre-check).
    ///
    /// `POST slb/service-group/{name}`
    pub async fn update_service_group(
        &self,
        name: &str,
        protocol: Protocol,
        lb_method: LbMethod,
    ) -> Result<Value, Error> {
        debug!(name, ?protocol, ?lb_method, "updating service group");
        let payload = ServiceGroupPayload::new(name, protocol, lb_method);
        self.post(&format!("slb/service-group/{name}"), &payload).await
    }

    /// Delete a service group.
    ///
    /// `DELETE slb/service-group/{name}`
    pub async fn delete_service_group(&self, name: &str) -> Result<Value, Error> {
        debug!(name, "deleting service group");
        self.delete(&format!("slb/service-group/{name}")).await
    }

    /// Fetch a service group's configuration.
    ///
    /// `GET slb/service-group/{name}`
    pub async fn get_service_group(&self, name: &str) -> Result<Value, Error> {
        self.get(&format!("slb/service-group/{name}")).await
    }
}
