use super::{split_namespaced, DependencyRecord, DependencyRegistry, NetworkRegistry};
use crate::pool::{IpPool, DEFAULT_NAMESPACE};
use serde::{Deserialize, Serialize};

// Error handling
use log::trace;
use miette::Result;
use poolguard_error::PoolGuardError;

/*
* A network attachment known to the cluster.
*/
#[derive(Debug, Clone, Eq, PartialEq, Deserialize, Serialize)]
pub struct Network {
    #[serde(default = "default_namespace")]
    pub namespace: String,
    pub name: String,
}

/*
* A vm network config, attached to one or several networks.
*/
#[derive(Debug, Clone, Eq, PartialEq, Deserialize, Serialize)]
pub struct Consumer {
    #[serde(default = "default_namespace")]
    pub namespace: String,
    pub name: String,
    #[serde(default)]
    pub networks: Vec<String>,
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_owned()
}

/**
* An immutable snapshot of networks and their consumers.
*/
#[derive(Default, Debug, Clone)]
pub struct MemoryRegistry {
    networks: Vec<Network>,
    consumers: Vec<Consumer>,
}

impl MemoryRegistry {
    pub fn new(networks: Vec<Network>, consumers: Vec<Consumer>) -> Self {
        Self {
            networks,
            consumers,
        }
    }
}

impl NetworkRegistry for MemoryRegistry {
    fn exists(&self, namespace: &str, name: &str) -> Result<bool, PoolGuardError> {
        let res = self
            .networks
            .iter()
            .any(|e| e.namespace == namespace && e.name == name);
        trace!("network {}/{} exists: {}", namespace, name, res);
        Ok(res)
    }
}

impl DependencyRegistry for MemoryRegistry {
    fn find_dependents(&self, ip_pool: &IpPool) -> Result<Vec<DependencyRecord>, PoolGuardError> {
        let network = split_namespaced(&ip_pool.spec.network_name);
        let dependents = self
            .consumers
            .iter()
            .filter(|e| e.networks.iter().any(|n| split_namespaced(n) == network))
            .map(|e| DependencyRecord {
                namespace: e.namespace.clone(),
                name: e.name.clone(),
            })
            .collect();
        Ok(dependents)
    }
}
