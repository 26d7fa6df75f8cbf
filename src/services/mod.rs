pub mod accounts;
pub mod firms;
pub mod jobbers;
pub mod locations;
pub mod lookups;
pub mod materials;
pub mod parties;

use std::sync::Arc;

use crate::auth::AuthService;
use crate::db::DbPool;
use crate::storage::MediaStore;

/// Services layer that encapsulates business logic used by HTTP handlers.
#[derive(Clone)]
pub struct AppServices {
    pub accounts: Arc<accounts::AccountService>,
    pub jobbers: Arc<jobbers::JobberService>,
    pub materials: Arc<materials::MaterialService>,
    pub parties: Arc<parties::PartyService>,
    pub locations: Arc<locations::LocationService>,
    pub firms: Arc<firms::FirmService>,
    pub lookups: Arc<lookups::LookupService>,
}

impl AppServices {
    pub fn new(db_pool: Arc<DbPool>, auth: Arc<AuthService>, media: MediaStore) -> Self {
        Self {
            accounts: Arc::new(accounts::AccountService::new(db_pool.clone(), auth)),
            jobbers: Arc::new(jobbers::JobberService::new(db_pool.clone())),
            materials: Arc::new(materials::MaterialService::new(db_pool.clone(), media)),
            parties: Arc::new(parties::PartyService::new(db_pool.clone())),
            locations: Arc::new(locations::LocationService::new(db_pool.clone())),
            firms: Arc::new(firms::FirmService::new(db_pool.clone())),
            lookups: Arc::new(lookups::LookupService::new(db_pool)),
        }
    }
}
