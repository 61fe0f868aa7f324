use std::sync::Arc;
use std::time::Instant;

use crate::auth::JwtValidator;
use crate::catalog::DefinitionCatalog;
use crate::config::Settings;
use crate::localization::Translator;
use crate::notification::{NotificationDispatcher, NotificationSender};
use crate::projection::CatalogProjector;

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub jwt_validator: Arc<JwtValidator>,
    pub catalog: Arc<DefinitionCatalog>,
    pub projector: Arc<CatalogProjector>,
    pub dispatcher: Arc<NotificationDispatcher>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(
        settings: Settings,
        catalog: Arc<DefinitionCatalog>,
        translator: Arc<dyn Translator>,
        sender: Arc<dyn NotificationSender>,
    ) -> Self {
        let jwt_validator = Arc::new(JwtValidator::new(&settings.jwt));
        let projector = Arc::new(CatalogProjector::new(catalog.clone(), translator));
        let dispatcher = Arc::new(NotificationDispatcher::new(catalog.clone(), sender));

        Self {
            settings: Arc::new(settings),
            jwt_validator,
            catalog,
            projector,
            dispatcher,
            start_time: Instant::now(),
        }
    }
}
