use crate::config::AppConfig;
use crate::notify::EmailClient;
use crate::store::Store;

#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub email: EmailClient,
    pub config: AppConfig,
}
