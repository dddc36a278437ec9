pub mod load;

use crate::registry::{Consumer, MemoryRegistry, Network};

// Config
use serde::{Deserialize, Serialize};

pub const CONFIG_DIR: &'static str = "/etc/poolguard";

/*
* The poolguard cli configuration:
* a snapshot of the networks and the vm network configs admission checks run against.
*/
#[derive(Default, Debug, Clone, Deserialize, Serialize)]
pub struct PoolGuardConfig {
    #[serde(default)]
    pub network: Vec<Network>,
    #[serde(default)]
    pub consumer: Vec<Consumer>,
}

impl PoolGuardConfig {
    pub fn registry(&self) -> MemoryRegistry {
        MemoryRegistry::new(self.network.clone(), self.consumer.clone())
    }
}
