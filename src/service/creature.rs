use std::sync::Arc;

use crate::error::ServiceError;
use crate::provider::DataProvider;
use crate::service::require_name;
use crate::store::{CreatureInfo, CreatureStore};

pub struct CreatureService {
    store: Arc<dyn CreatureStore>,
    provider: Arc<dyn DataProvider>,
}

impl CreatureService {
    pub fn new(store: Arc<dyn CreatureStore>, provider: Arc<dyn DataProvider>) -> Self {
        Self { store, provider }
    }

    /// Returns the stored record, fetching and storing it first if needed.
    pub fn get_creature_information(&self, name: &str) -> Result<CreatureInfo, ServiceError> {
        let name = require_name("name", name)?;
        if let Some(info) = self.store.find_by_name(&name)? {
            tracing::debug!("creature '{}' served from store", name);
            return Ok(info);
        }

        let data = self.provider.fetch_creature(&name)?;
        match self.store.create(CreatureInfo::from_creature_data(&data)) {
            Ok(info) => {
                tracing::info!("stored creature '{}' (id {})", info.name, info.id);
                Ok(info)
            }
            // Another lookup may have stored it between our read and create.
            Err(err) => match self.store.find_by_name(&data.name)? {
                Some(info) => {
                    tracing::debug!("creature '{}' was stored concurrently", info.name);
                    Ok(info)
                }
                None => Err(err.into()),
            },
        }
    }
}
