// System-level endpoints
//
// Configuration persistence and appliance version telemetry.

use serde_json::{Value, json};
use tracing::debug;

use crate::client::AxapiClient;
use crate::error::Error;

impl AxapiClient {
    /// Persist the running configuration to non-volatile memory.
    ///
    /// `POST write/memory`
    pub async fn write_memory(&self) -> Result<Value, Error> {
        debug!("writing running config to memory");
        self.post("write/memory", &json!({})).await
    }

    /// Appliance version information, returned verbatim.
    ///
    /// `GET version/oper`
    pub async fn version(&self) -> Result<Value, Error> {
        self.get("version/oper").await
    }
}
