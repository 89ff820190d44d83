use std::sync::Arc;

use crate::{config::Settings, data::DataProvider, gateway::ModelGateway};

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub gateway: Arc<dyn ModelGateway>,
    pub data: DataProvider,
}

impl AppState {
    #[must_use]
    pub fn new(settings: Settings, gateway: Arc<dyn ModelGateway>) -> Self {
        let data = DataProvider::new(settings.seed_offset_hours);
        Self {
            settings: Arc::new(settings),
            gateway,
            data,
        }
    }
}
