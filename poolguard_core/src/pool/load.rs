use super::IpPool;

// IP
use ipnet::Ipv4Net;
use std::collections::BTreeMap;
use std::net::Ipv4Addr;
use std::str::FromStr;

// Error handling
use log::{debug, trace};
use miette::Result;
use poolguard_error::{LibError, PoolGuardError};

/*
* The structured view of a pool the admission checks work on.
* Optional addresses that were not declared are None.
*/
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PoolInfo {
    pub subnet: Ipv4Net,
    pub network: Ipv4Addr,
    pub broadcast: Ipv4Addr,
    pub start: Option<Ipv4Addr>,
    pub end: Option<Ipv4Addr>,
    pub server: Option<Ipv4Addr>,
    pub router: Option<Ipv4Addr>,
    pub network_name: String,
}

impl PoolInfo {
    pub fn new(subnet: Ipv4Net, network_name: &str) -> Self {
        let subnet = subnet.trunc();
        Self {
            subnet,
            network: subnet.network(),
            broadcast: subnet.broadcast(),
            start: None,
            end: None,
            server: None,
            router: None,
            network_name: network_name.to_owned(),
        }
    }
    pub fn contains(&self, addr: &Ipv4Addr) -> bool {
        self.subnet.contains(addr)
    }
    pub fn is_network(&self, addr: &Ipv4Addr) -> bool {
        *addr == self.network
    }
    pub fn is_broadcast(&self, addr: &Ipv4Addr) -> bool {
        *addr == self.broadcast
    }
}

/**
* Parse a pool object into its structured representation.
* Fails on the first field that is not a valid ipv4 cidr or address.
*/
pub fn load_pool(ip_pool: &IpPool) -> Result<PoolInfo, PoolGuardError> {
    let config = &ip_pool.spec.ipv4_config;

    let subnet = match Ipv4Net::from_str(&config.cidr) {
        Ok(v) => v,
        Err(e) => {
            let message = format!("cidr {:?} is invalid: {}", config.cidr, e);
            let help = "Use the a.b.c.d/prefix notation, e.g. 192.168.0.0/24";
            return Err(LibError::builder().msg(&message).help(help).build().into());
        }
    };

    let mut info = PoolInfo::new(subnet, &ip_pool.spec.network_name);
    info.start = parse_optional("start ip", config.pool.start.as_deref())?;
    info.end = parse_optional("end ip", config.pool.end.as_deref())?;
    info.server = parse_optional("server ip", config.server_ip.as_deref())?;
    info.router = parse_optional("router ip", config.router.as_deref())?;

    debug!(
        "loaded ippool {} with subnet {}",
        ip_pool.namespaced_name(),
        info.subnet
    );
    Ok(info)
}

/*
* Empty strings count as not set.
*/
fn parse_optional(field: &str, value: Option<&str>) -> Result<Option<Ipv4Addr>, PoolGuardError> {
    let value = match value {
        None | Some("") => return Ok(None),
        Some(v) => v,
    };
    match Ipv4Addr::from_str(value) {
        Ok(v) => Ok(Some(v)),
        Err(e) => {
            let message = format!("{field} {value:?} is invalid: {e}");
            let help = "Pool addresses must be ipv4 addresses, e.g. 192.168.0.1";
            Err(LibError::builder().msg(&message).help(help).build().into())
        }
    }
}

/**
* List the allocated addresses recorded in a pool status.
* Keys that are not ipv4 addresses are skipped.
*/
pub fn load_allocated(allocated: &BTreeMap<String, String>) -> Vec<Ipv4Addr> {
    allocated
        .keys()
        .filter_map(|e| match Ipv4Addr::from_str(e) {
            Ok(v) => Some(v),
            Err(_) => {
                trace!("skipped allocated entry {:?}", e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::pool::{IpPoolSpec, Ipv4Config, Pool};
    use pretty_assertions::assert_eq;

    fn ip_pool(cidr: &str) -> IpPool {
        let mut ip_pool = IpPool::default();
        ip_pool.metadata.name = "pool-1".to_owned();
        ip_pool.spec = IpPoolSpec {
            network_name: "net-1".to_owned(),
            ipv4_config: Ipv4Config {
                cidr: cidr.to_owned(),
                ..Default::default()
            },
        };
        ip_pool
    }

    #[test]
    fn load_full_pool() -> Result<()> {
        let mut ip_pool = ip_pool("192.168.0.0/24");
        ip_pool.spec.ipv4_config.server_ip = Some("192.168.0.2".to_owned());
        ip_pool.spec.ipv4_config.router = Some("192.168.0.1".to_owned());
        ip_pool.spec.ipv4_config.pool = Pool {
            start: Some("192.168.0.10".to_owned()),
            end: Some("192.168.0.200".to_owned()),
            exclude: vec![],
        };

        let info = load_pool(&ip_pool)?;
        assert_eq!(info.network, Ipv4Addr::new(192, 168, 0, 0));
        assert_eq!(info.broadcast, Ipv4Addr::new(192, 168, 0, 255));
        assert_eq!(info.start, Some(Ipv4Addr::new(192, 168, 0, 10)));
        assert_eq!(info.end, Some(Ipv4Addr::new(192, 168, 0, 200)));
        assert_eq!(info.server, Some(Ipv4Addr::new(192, 168, 0, 2)));
        assert_eq!(info.router, Some(Ipv4Addr::new(192, 168, 0, 1)));
        assert_eq!(info.network_name, "net-1");
        Ok(())
    }

    #[test]
    fn load_pool_without_optional_addresses() -> Result<()> {
        let mut ip_pool = ip_pool("10.0.0.0/8");
        ip_pool.spec.ipv4_config.server_ip = Some("".to_owned());

        let info = load_pool(&ip_pool)?;
        assert_eq!(info.start, None);
        assert_eq!(info.end, None);
        assert_eq!(info.server, None);
        assert_eq!(info.router, None);
        Ok(())
    }

    #[test]
    fn load_pool_truncates_host_bits() -> Result<()> {
        let info = load_pool(&ip_pool("172.16.5.9/16"))?;
        assert_eq!(info.subnet.to_string(), "172.16.0.0/16");
        assert_eq!(info.network, Ipv4Addr::new(172, 16, 0, 0));
        assert_eq!(info.broadcast, Ipv4Addr::new(172, 16, 255, 255));
        Ok(())
    }

    #[test]
    fn load_pool_with_invalid_fields() {
        let res = load_pool(&ip_pool("192.168.0.0/33"));
        assert!(res.unwrap_err().to_string().starts_with("cidr"));

        let mut ip_pool = ip_pool("192.168.0.0/24");
        ip_pool.spec.ipv4_config.router = Some("fe80::1".to_owned());
        let res = load_pool(&ip_pool);
        assert!(res.unwrap_err().to_string().starts_with("router ip"));
    }

    #[test]
    fn load_allocated_skips_garbage() {
        let allocated = BTreeMap::from([
            ("192.168.0.20".to_owned(), "52:54:00:00:00:01".to_owned()),
            ("192.168.0.3".to_owned(), "EXCLUDED".to_owned()),
            ("not-an-ip".to_owned(), "52:54:00:00:00:02".to_owned()),
        ]);
        let res = load_allocated(&allocated);
        assert_eq!(
            res,
            vec![Ipv4Addr::new(192, 168, 0, 20), Ipv4Addr::new(192, 168, 0, 3)]
        );
    }
}
