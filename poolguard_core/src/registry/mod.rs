pub mod memory;

// Reexport
pub use memory::{Consumer, MemoryRegistry, Network};

use crate::pool::{IpPool, DEFAULT_NAMESPACE};
use std::fmt;

// Error handling
use miette::Result;
use poolguard_error::PoolGuardError;

/// Answers whether an attached network exists.
pub trait NetworkRegistry {
    fn exists(&self, namespace: &str, name: &str) -> Result<bool, PoolGuardError>;
}

/// Lists the resources that still reference a pool.
pub trait DependencyRegistry {
    fn find_dependents(&self, ip_pool: &IpPool) -> Result<Vec<DependencyRecord>, PoolGuardError>;
}

/// A consumer bound to a pool.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DependencyRecord {
    pub namespace: String,
    pub name: String,
}
impl fmt::Display for DependencyRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}

/*
* Split "namespace/name" on the last slash.
* An unqualified name lives in the default namespace.
*/
pub fn split_namespaced(namespaced_name: &str) -> (String, String) {
    let (namespace, name) = match namespaced_name.rsplit_once('/') {
        Some((namespace, name)) => (namespace, name),
        None => ("", namespaced_name),
    };
    let namespace = if namespace.is_empty() {
        DEFAULT_NAMESPACE
    } else {
        namespace
    };
    (namespace.to_owned(), name.to_owned())
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_split_namespaced() {
        assert_eq!(
            split_namespaced("infra/net-1"),
            ("infra".to_owned(), "net-1".to_owned())
        );
        assert_eq!(
            split_namespaced("net-1"),
            ("default".to_owned(), "net-1".to_owned())
        );
        assert_eq!(
            split_namespaced("/net-1"),
            ("default".to_owned(), "net-1".to_owned())
        );
        assert_eq!(
            split_namespaced("a/b/net-1"),
            ("a/b".to_owned(), "net-1".to_owned())
        );
    }

    #[test]
    fn display_dependency_record() {
        let record = DependencyRecord {
            namespace: "default".to_owned(),
            name: "vm-1".to_owned(),
        };
        assert_eq!(record.to_string(), "default/vm-1");
    }
}
