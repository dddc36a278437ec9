pub mod load;

// Reexport
pub use load::{load_allocated, load_pool, PoolInfo};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;

// Time
use jiff::Timestamp;

// Error Handling
use log::trace;
use miette::Result;
use poolguard_error::{CastError, PoolGuardError, TomlError};

pub const DEFAULT_NAMESPACE: &'static str = "default";
pub const KIND: &'static str = "IPPool";

/*
* A declarative ip pool, as submitted for admission.
*/
#[derive(Default, Debug, Clone, Eq, PartialEq, Deserialize, Serialize)]
pub struct IpPool {
    pub metadata: ObjectMeta,
    pub spec: IpPoolSpec,
    pub status: Option<IpPoolStatus>,
}

#[derive(Debug, Clone, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMeta {
    #[serde(default = "default_namespace")]
    pub namespace: String,
    pub name: String,
    /// Set once the object is being deleted.
    pub deletion_timestamp: Option<Timestamp>,
}
impl Default for ObjectMeta {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            name: "".to_owned(),
            deletion_timestamp: None,
        }
    }
}
fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_owned()
}

#[derive(Default, Debug, Clone, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IpPoolSpec {
    /// The attached network, as "namespace/name" or "name".
    pub network_name: String,
    #[serde(rename = "ipv4Config")]
    pub ipv4_config: Ipv4Config,
}

#[derive(Default, Debug, Clone, Eq, PartialEq, Deserialize, Serialize)]
pub struct Ipv4Config {
    #[serde(rename = "serverIP")]
    pub server_ip: Option<String>,
    pub cidr: String,
    #[serde(default)]
    pub pool: Pool,
    pub router: Option<String>,
}

#[derive(Default, Debug, Clone, Eq, PartialEq, Deserialize, Serialize)]
pub struct Pool {
    pub start: Option<String>,
    pub end: Option<String>,
    #[serde(default)]
    pub exclude: Vec<String>,
}

#[derive(Default, Debug, Clone, Eq, PartialEq, Deserialize, Serialize)]
pub struct IpPoolStatus {
    pub ipv4: Option<Ipv4Status>,
}

#[derive(Default, Debug, Clone, Eq, PartialEq, Deserialize, Serialize)]
pub struct Ipv4Status {
    /// Allocated addresses and the mac address (or mark) they are bound to.
    #[serde(default)]
    pub allocated: BTreeMap<String, String>,
    #[serde(default)]
    pub used: u64,
    #[serde(default)]
    pub available: u64,
}

impl IpPool {
    pub fn namespaced_name(&self) -> String {
        format!("{}/{}", self.metadata.namespace, self.metadata.name)
    }
    pub fn is_deleting(&self) -> bool {
        self.metadata.deletion_timestamp.is_some()
    }
    pub fn from_file(path: &str) -> Result<Self, PoolGuardError> {
        trace!("read ippool manifest {:?}", path);
        let string = fs::read_to_string(path)?;
        Self::from_toml(&string)
    }
    pub fn from_toml(string: &str) -> Result<Self, PoolGuardError> {
        let res = toml::from_str::<Self>(string);
        let item = match res {
            Ok(res) => res,
            Err(e) => {
                let err = CastError::TomlError(TomlError::new(e, string));
                return Err(err.into());
            }
        };
        Ok(item)
    }
}
