use bon::bon;
use miette::{Diagnostic, Report};
pub use pipelight_error::{CastError, TomlError};
use std::fmt;
use std::net::Ipv4Addr;
use strum::Display;

use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum PoolGuardError {
    ////////////////////////////////
    // Lib native errors
    #[error(transparent)]
    #[diagnostic(transparent)]
    WrapError(#[from] WrapError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    LibError(#[from] LibError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    RequestError(#[from] RequestError),

    ////////////////////////////////
    // Admission verdicts
    #[error(transparent)]
    #[diagnostic(transparent)]
    ConstraintError(#[from] ConstraintError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    NotFoundError(#[from] NotFoundError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    DependencyError(#[from] DependencyError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    LookupError(#[from] LookupError),

    ////////////////////////////////
    // Type convertion
    #[error(transparent)]
    #[diagnostic(transparent)]
    CastError(#[from] CastError),

    #[error(transparent)]
    #[diagnostic(code(poolguard::io::error))]
    IoError(#[from] std::io::Error),
}

impl PoolGuardError {
    /// Return the innermost error, unwrapping request context.
    pub fn cause(&self) -> &PoolGuardError {
        match self {
            PoolGuardError::RequestError(e) => e.cause.cause(),
            _ => self,
        }
    }
}

/**
A config error with help higher origin
Can be recursively chained.
*/
#[derive(Debug, Error, Diagnostic)]
#[error("{}", message)]
#[diagnostic(code(poolguard::wrap::error))]
pub struct WrapError {
    pub message: String,
    #[diagnostic_source]
    pub origin: Report,
    #[help]
    pub help: String,
}

#[bon]
impl WrapError {
    #[builder]
    pub fn new(msg: &str, help: &str, origin: Report) -> Self {
        Self {
            message: msg.to_owned(),
            help: help.to_owned(),
            origin,
        }
    }
}

/**
A root cause error with no inner origin
*/
#[derive(Debug, Error, Diagnostic)]
#[error("{}", message)]
#[diagnostic(code(poolguard::lib::error))]
pub struct LibError {
    pub message: String,
    #[help]
    pub help: String,
}

#[bon]
impl LibError {
    #[builder]
    pub fn new(msg: &str, help: &str) -> Self {
        Self {
            message: msg.to_owned(),
            help: help.to_owned(),
        }
    }
}

/**
An error raised while handling an admission request,
prefixed with the operation and the identity of the object under review.
*/
#[derive(Debug, Error, Diagnostic)]
#[error("could not {operation} {kind} {namespace}/{name} because {cause}")]
#[diagnostic(code(poolguard::request::error))]
pub struct RequestError {
    pub operation: String,
    pub kind: String,
    pub namespace: String,
    pub name: String,
    #[source]
    pub cause: Box<PoolGuardError>,
}

#[bon]
impl RequestError {
    #[builder]
    pub fn new(
        operation: &str,
        kind: &str,
        namespace: &str,
        name: &str,
        cause: PoolGuardError,
    ) -> Self {
        Self {
            operation: operation.to_owned(),
            kind: kind.to_owned(),
            namespace: namespace.to_owned(),
            name: name.to_owned(),
            cause: Box::new(cause),
        }
    }
}

/// The pool field an address was declared for.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum AddressRole {
    Start,
    End,
    Server,
    Router,
}

/// The address rule that was broken.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Violation {
    NotInSubnet,
    SameAsNetwork,
    SameAsBroadcast,
    SameAsRouter,
    AlreadyAllocated,
}

/**
An address declared in a pool breaks one of the subnet rules.
*/
#[derive(Debug, Diagnostic)]
#[diagnostic(code(poolguard::constraint::error))]
pub struct ConstraintError {
    pub role: AddressRole,
    pub address: Ipv4Addr,
    pub violation: Violation,
}

impl ConstraintError {
    pub fn new(role: AddressRole, address: Ipv4Addr, violation: Violation) -> Self {
        Self {
            role,
            address,
            violation,
        }
    }
}

impl fmt::Display for ConstraintError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Server messages are worded as a prohibition.
        let same_as = match self.role {
            AddressRole::Server => "cannot be the same as",
            _ => "is the same as",
        };
        let rule = match self.violation {
            Violation::NotInSubnet => "is not within subnet".to_owned(),
            Violation::SameAsNetwork => format!("{same_as} network ip"),
            Violation::SameAsBroadcast => format!("{same_as} broadcast ip"),
            Violation::SameAsRouter => format!("{same_as} router ip"),
            Violation::AlreadyAllocated => "is already allocated".to_owned(),
        };
        write!(f, "{} ip {} {}", self.role, self.address, rule)
    }
}
impl std::error::Error for ConstraintError {}

/**
A referenced network attachment does not exist.
*/
#[derive(Debug, Error, Diagnostic)]
#[error("networkattachmentdefinitions.k8s.cni.cncf.io \"{namespace}/{name}\" not found")]
#[diagnostic(
    code(poolguard::not_found::error),
    help("Create the network attachment definition before the pool.")
)]
pub struct NotFoundError {
    pub namespace: String,
    pub name: String,
}

/**
The object is still referenced and cannot be deleted.
*/
#[derive(Debug, Error, Diagnostic)]
#[error(
    "it's still used by VirtualMachineNetworkConfig(s) {}, which must be removed at first",
    .dependents.join(", ")
)]
#[diagnostic(code(poolguard::dependency::error))]
pub struct DependencyError {
    pub dependents: Vec<String>,
}

/**
A registry could not answer a lookup.
*/
#[derive(Debug, Error, Diagnostic)]
#[error("{registry} lookup failed: {message}")]
#[diagnostic(code(poolguard::lookup::error))]
pub struct LookupError {
    pub registry: String,
    pub message: String,
}
