mod address;
pub mod network;
pub mod range;
pub mod reference;
pub mod router;
pub mod server;

// Reexport
pub use network::check_network;
pub use range::check_pool_range;
pub use reference::check_dependents;
pub use router::check_router;
pub use server::check_server_ip;

use crate::pool::{load_allocated, load_pool, IpPool, KIND};
use crate::registry::{DependencyRegistry, NetworkRegistry};
use serde::Serialize;
use std::net::Ipv4Addr;
use strum::Display;

// Error handling
use log::info;
use miette::Result;
use poolguard_error::{PoolGuardError, RequestError};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Display, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Display, Serialize)]
pub enum Scope {
    Namespaced,
    Cluster,
}

/*
* What an admission pipeline routes to this validator.
*/
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub names: Vec<String>,
    pub scope: Scope,
    pub api_group: String,
    pub api_version: String,
    pub kind: String,
    pub operations: Vec<Operation>,
}

pub fn resource() -> Resource {
    Resource {
        names: vec!["ippools".to_owned()],
        scope: Scope::Namespaced,
        api_group: "network.harvesterhci.io".to_owned(),
        api_version: "v1alpha1".to_owned(),
        kind: KIND.to_owned(),
        operations: vec![Operation::Create, Operation::Update, Operation::Delete],
    }
}

/**
* Admission checks for ip pools.
* Every entry point is a single pass: the first failing check is the verdict.
*/
pub struct Validator<'a, N: NetworkRegistry, D: DependencyRegistry> {
    networks: &'a N,
    dependencies: &'a D,
}

impl<'a, N: NetworkRegistry, D: DependencyRegistry> Validator<'a, N, D> {
    pub fn new(networks: &'a N, dependencies: &'a D) -> Self {
        Self {
            networks,
            dependencies,
        }
    }

    pub fn create(&self, ip_pool: &IpPool) -> Result<(), PoolGuardError> {
        info!("create ippool {}", ip_pool.namespaced_name());
        self.admit(ip_pool, &[])
            .map_err(|e| wrap(Operation::Create, ip_pool, e))
    }

    /*
    * Objects being deleted are let through,
    * so stale constraint violations never block their removal.
    */
    pub fn update(&self, ip_pool: &IpPool) -> Result<(), PoolGuardError> {
        if ip_pool.is_deleting() {
            return Ok(());
        }
        info!("update ippool {}", ip_pool.namespaced_name());

        let allocated: Vec<Ipv4Addr> = match &ip_pool.status {
            Some(status) => match &status.ipv4 {
                Some(ipv4) => load_allocated(&ipv4.allocated),
                None => vec![],
            },
            None => vec![],
        };
        self.admit(ip_pool, &allocated)
            .map_err(|e| wrap(Operation::Update, ip_pool, e))
    }

    pub fn delete(&self, ip_pool: &IpPool) -> Result<(), PoolGuardError> {
        info!("delete ippool {}", ip_pool.namespaced_name());
        check_dependents(self.dependencies, ip_pool)
            .map_err(|e| wrap(Operation::Delete, ip_pool, e))
    }

    fn admit(&self, ip_pool: &IpPool, allocated: &[Ipv4Addr]) -> Result<(), PoolGuardError> {
        let info = load_pool(ip_pool)?;

        check_network(self.networks, &info.network_name)?;
        check_pool_range(&info)?;
        check_server_ip(&info, allocated)?;
        check_router(&info)?;
        Ok(())
    }
}

fn wrap(operation: Operation, ip_pool: &IpPool, cause: PoolGuardError) -> PoolGuardError {
    RequestError::builder()
        .operation(&operation.to_string())
        .kind(KIND)
        .namespace(&ip_pool.metadata.namespace)
        .name(&ip_pool.metadata.name)
        .cause(cause)
        .build()
        .into()
}
