use super::address::check_address;
use crate::pool::PoolInfo;
use std::net::Ipv4Addr;

// Error handling
use miette::Result;
use poolguard_error::{AddressRole, ConstraintError, Violation};

/*
* A pool may omit its server address.
* When set, it must be a free host address of the subnet
* distinct from the router and from every allocated address.
*/
pub fn check_server_ip(info: &PoolInfo, allocated: &[Ipv4Addr]) -> Result<(), ConstraintError> {
    let server = match &info.server {
        Some(v) => v,
        None => return Ok(()),
    };
    check_address(info, AddressRole::Server, server)?;

    if info.router.as_ref() == Some(server) {
        return Err(ConstraintError::new(
            AddressRole::Server,
            *server,
            Violation::SameAsRouter,
        ));
    }
    if allocated.iter().any(|e| e == server) {
        return Err(ConstraintError::new(
            AddressRole::Server,
            *server,
            Violation::AlreadyAllocated,
        ));
    }
    Ok(())
}
