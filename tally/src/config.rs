use serde::Deserialize;

use crate::{ConfigError, Product, Record, User};

/// Settings of a [`Store`](crate::Store).
///
/// Every field has a default, so a TOML document only needs the keys it changes:
///
/// ```
/// let config = tally::StoreConfig::from_toml_str("recent_limit = 3").unwrap();
/// assert_eq!(config.recent_limit, 3);
/// assert_eq!(config.users_key, "users");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// Persistence key of the user collection.
    pub users_key: String,
    /// Persistence key of the product collection.
    pub products_key: String,
    /// Persistence key of the id sequence table.
    pub manifest_key: String,
    /// Seed collections whose key is absent when [`Store::bootstrap`](crate::Store::bootstrap) runs.
    pub seed_on_bootstrap: bool,
    /// Limit used by [`Store::recent_default`](crate::Store::recent_default).
    pub recent_limit: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            users_key: User::COLLECTION.to_owned(),
            products_key: Product::COLLECTION.to_owned(),
            manifest_key: "manifest".to_owned(),
            seed_on_bootstrap: true,
            recent_limit: 5,
        }
    }
}

impl StoreConfig {
    /// Parses a TOML document and checks the keys.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the document is malformed or two keys collide.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: StoreConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the three persistence keys are non-empty and distinct.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidKey`] naming the offending key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let keys = [&self.users_key, &self.products_key, &self.manifest_key];
        for (i, key) in keys.iter().enumerate() {
            if key.trim().is_empty() || keys[..i].contains(key) {
                return Err(ConfigError::InvalidKey((*key).clone()));
            }
        }
        Ok(())
    }

    /// Resolves the persistence key of a collection.
    ///
    /// Collections other than users and products use their own name.
    pub fn key_for<'a>(&'a self, collection: &'a str) -> &'a str {
        if collection == User::COLLECTION {
            &self.users_key
        } else if collection == Product::COLLECTION {
            &self.products_key
        } else {
            collection
        }
    }

    /// Resolves the persistence key of a collection, refusing the sequence table key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReservedKey`] if the collection would be stored
    /// under [`Self::manifest_key`].
    pub fn collection_key<'a>(&'a self, collection: &'a str) -> Result<&'a str, ConfigError> {
        let key = self.key_for(collection);
        if key == self.manifest_key {
            return Err(ConfigError::ReservedKey {
                collection: collection.to_owned(),
                key: key.to_owned(),
            });
        }
        Ok(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.users_key, "users");
        assert_eq!(config.products_key, "products");
        assert_eq!(config.manifest_key, "manifest");
        assert!(config.seed_on_bootstrap);
        assert_eq!(config.recent_limit, 5);
    }

    #[test]
    fn test_partial_toml() {
        let config = StoreConfig::from_toml_str(
            r#"
            users_key = "admin.users"
            seed_on_bootstrap = false
            "#,
        )
        .unwrap();

        assert_eq!(config.key_for("users"), "admin.users");
        assert_eq!(config.key_for("products"), "products");
        assert_eq!(config.key_for("orders"), "orders");
        assert!(!config.seed_on_bootstrap);
    }

    #[test]
    fn test_rejects_colliding_keys() {
        let err = StoreConfig::from_toml_str(r#"products_key = "users""#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidKey(key) if key == "users"));
    }

    #[test]
    fn test_manifest_key_is_reserved() {
        let config = StoreConfig::default();
        assert_eq!(config.collection_key("users").unwrap(), "users");

        let err = config.collection_key("manifest").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ReservedKey { collection, key } if collection == "manifest" && key == "manifest"
        ));
    }

    #[test]
    fn test_validate_catches_struct_literals() {
        let config = StoreConfig {
            users_key: "manifest".into(),
            ..StoreConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidKey(key)) if key == "manifest"));
    }

    #[test]
    fn test_rejects_unknown_fields() {
        let err = StoreConfig::from_toml_str("recent = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
