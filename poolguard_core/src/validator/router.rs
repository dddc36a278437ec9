use super::address::check_address;
use crate::pool::PoolInfo;

// Error handling
use miette::Result;
use poolguard_error::{AddressRole, ConstraintError};

/*
* The router is only checked against the subnet.
* Collision with the server address is reported by the server check.
*/
pub fn check_router(info: &PoolInfo) -> Result<(), ConstraintError> {
    match &info.router {
        Some(router) => check_address(info, AddressRole::Router, router),
        None => Ok(()),
    }
}
