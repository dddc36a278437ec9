use crate::registry::{split_namespaced, NetworkRegistry};

// Error handling
use log::trace;
use miette::Result;
use poolguard_error::{NotFoundError, PoolGuardError};

/*
* Ensure the network a pool is attached to exists.
* Registry failures are returned untouched.
*/
pub fn check_network<N: NetworkRegistry>(
    registry: &N,
    network_name: &str,
) -> Result<(), PoolGuardError> {
    let (namespace, name) = split_namespaced(network_name);
    trace!("look up network {}/{}", namespace, name);

    if registry.exists(&namespace, &name)? {
        Ok(())
    } else {
        Err(NotFoundError { namespace, name }.into())
    }
}
