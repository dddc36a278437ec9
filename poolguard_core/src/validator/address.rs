use crate::pool::PoolInfo;
use std::net::Ipv4Addr;

// Error handling
use miette::Result;
use poolguard_error::{AddressRole, ConstraintError, Violation};

/*
* The rules every declared address must follow, in evaluation order:
*   - lie within the subnet,
*   - not be the subnet network address,
*   - not be the subnet broadcast address.
*/
pub fn check_address(
    info: &PoolInfo,
    role: AddressRole,
    addr: &Ipv4Addr,
) -> Result<(), ConstraintError> {
    if !info.contains(addr) {
        return Err(ConstraintError::new(role, *addr, Violation::NotInSubnet));
    }
    if info.is_network(addr) {
        return Err(ConstraintError::new(role, *addr, Violation::SameAsNetwork));
    }
    if info.is_broadcast(addr) {
        return Err(ConstraintError::new(role, *addr, Violation::SameAsBroadcast));
    }
    Ok(())
}
