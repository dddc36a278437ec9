use super::address::check_address;
use crate::pool::PoolInfo;

// Error handling
use miette::Result;
use poolguard_error::{AddressRole, ConstraintError};

/*
* Check the start bound, then the end bound.
* A bound that is not set is not checked.
*/
pub fn check_pool_range(info: &PoolInfo) -> Result<(), ConstraintError> {
    if let Some(start) = &info.start {
        check_address(info, AddressRole::Start, start)?;
    }
    if let Some(end) = &info.end {
        check_address(info, AddressRole::End, end)?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::validator::address::test::pool_info;
    use pretty_assertions::assert_eq;
    use std::net::Ipv4Addr;

    #[test]
    fn accept_valid_range() {
        let mut info = pool_info();
        info.start = Some(Ipv4Addr::new(192, 168, 0, 10));
        info.end = Some(Ipv4Addr::new(192, 168, 0, 200));
        assert!(check_pool_range(&info).is_ok());
    }

    #[test]
    fn accept_unset_bounds() {
        assert!(check_pool_range(&pool_info()).is_ok());
    }

    #[test]
    fn reject_start_outside_subnet() {
        let mut info = pool_info();
        info.start = Some(Ipv4Addr::new(192, 168, 1, 5));
        let err = check_pool_range(&info).unwrap_err();
        assert_eq!(err.to_string(), "start ip 192.168.1.5 is not within subnet");
    }

    #[test]
    fn reject_reserved_bounds() {
        let mut info = pool_info();
        info.start = Some(Ipv4Addr::new(192, 168, 0, 0));
        let err = check_pool_range(&info).unwrap_err();
        assert_eq!(err.to_string(), "start ip 192.168.0.0 is the same as network ip");

        let mut info = pool_info();
        info.end = Some(Ipv4Addr::new(192, 168, 0, 255));
        let err = check_pool_range(&info).unwrap_err();
        assert_eq!(err.to_string(), "end ip 192.168.0.255 is the same as broadcast ip");
    }

    #[test]
    fn start_is_reported_before_end() {
        let mut info = pool_info();
        info.start = Some(Ipv4Addr::new(192, 168, 0, 255));
        info.end = Some(Ipv4Addr::new(10, 0, 0, 1));
        let err = check_pool_range(&info).unwrap_err();
        assert_eq!(err.role, AddressRole::Start);
    }
}
