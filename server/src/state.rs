use std::sync::Arc;

use form::sheets::SheetsGateway;

use super::config::Config;

pub struct AppState {
    pub config: Config,
    pub gateway: SheetsGateway,
}

impl AppState {
    pub fn new() -> Arc<Self> {
        let config = Config::load();
        let gateway = SheetsGateway::new(config.sheets_url.clone());

        Arc::new(Self { config, gateway })
    }
}
