use super::PoolGuardConfig;
use super::CONFIG_DIR;

// Config
use std::fs;
use std::path::PathBuf;

// Error Handling
use log::{debug, info};
use miette::{Report, Result};
use poolguard_error::{CastError, PoolGuardError, TomlError, WrapError};

impl PoolGuardConfig {
    /*
     * Get config from crate directory
     */
    fn debug_path() -> PathBuf {
        let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        path.push("../poolguard.config.toml");
        path
    }
    /*
     * Get config from FHS path.
     */
    fn release_path() -> PathBuf {
        let mut path = PathBuf::from(CONFIG_DIR);
        path.push("config.toml");
        path
    }
    pub fn get() -> Result<Self, PoolGuardError> {
        info!("Search config file.");

        #[cfg(debug_assertions)]
        let path = Self::debug_path();

        #[cfg(not(debug_assertions))]
        let path = Self::release_path();

        let path = path.display().to_string();
        Self::from_file(&path)
    }
    pub fn from_file(path: &str) -> Result<Self, PoolGuardError> {
        debug!("Read config file {:?}", path);
        let string = match fs::read_to_string(path) {
            Ok(v) => v,
            Err(e) => {
                let message = format!("Couldn't read config file {:?}", path);
                let help = format!(
                    "Create one at {} or pass --config <FILE>",
                    Self::release_path().display()
                );
                let err = WrapError::builder()
                    .msg(&message)
                    .help(&help)
                    .origin(Report::from_err(e))
                    .build();
                return Err(err.into());
            }
        };
        Self::from_toml(&string)
    }
    pub fn from_toml(string: &str) -> Result<Self, PoolGuardError> {
        let res = toml::from_str::<Self>(string);
        let item = match res {
            Ok(res) => res,
            Err(e) => {
                let err = CastError::TomlError(TomlError::new(e, string));
                return Err(err.into());
            }
        };
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{DependencyRegistry, NetworkRegistry};
    use crate::pool::IpPool;
    use pretty_assertions::assert_eq;

    #[test]
    fn get_config_from_file() -> Result<()> {
        let res = PoolGuardConfig::get()?;
        assert!(!res.network.is_empty());
        Ok(())
    }

    #[test]
    fn get_config_from_missing_file() {
        let res = PoolGuardConfig::from_file("/nonexistent/poolguard.toml");
        let err = res.unwrap_err();
        assert!(matches!(err, PoolGuardError::WrapError(_)));
    }

    #[test]
    fn get_config_from_toml() -> Result<()> {
        let toml = r#"
            [[network]]
            name = "net-1"

            [[network]]
            namespace = "infra"
            name = "net-2"

            [[consumer]]
            name = "vm-a"
            networks = ["net-1"]

            [[consumer]]
            namespace = "infra"
            name = "vm-b"
            networks = ["infra/net-2", "default/net-1"]
        "#;

        let res = PoolGuardConfig::from_toml(toml)?;
        assert_eq!(res.network.len(), 2);
        assert_eq!(res.network[0].namespace, "default");

        let registry = res.registry();
        assert!(registry.exists("infra", "net-2")?);

        let mut ip_pool = IpPool::default();
        ip_pool.spec.network_name = "infra/net-2".to_owned();
        let dependents = registry.find_dependents(&ip_pool)?;
        assert_eq!(dependents.len(), 1);
        assert_eq!(dependents[0].to_string(), "infra/vm-b");
        Ok(())
    }
}
