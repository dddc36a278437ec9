pub mod cli;
pub mod config;
pub mod pool;
pub mod registry;
pub mod validator;

pub use pool::{IpPool, PoolInfo};
pub use registry::{DependencyRecord, DependencyRegistry, NetworkRegistry};
pub use validator::Validator;
