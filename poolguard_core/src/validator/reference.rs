use crate::pool::IpPool;
use crate::registry::DependencyRegistry;

// Error handling
use log::info;
use miette::Result;
use poolguard_error::{DependencyError, PoolGuardError};

/*
* A pool can only be deleted once nothing references it anymore.
*/
pub fn check_dependents<D: DependencyRegistry>(
    registry: &D,
    ip_pool: &IpPool,
) -> Result<(), PoolGuardError> {
    let dependents = registry.find_dependents(ip_pool)?;
    info!("{} vmnetcfg(s) associated", dependents.len());

    if dependents.is_empty() {
        return Ok(());
    }
    let dependents = dependents.iter().map(|e| e.to_string()).collect();
    Err(DependencyError { dependents }.into())
}
