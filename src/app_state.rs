use crate::config::Config;
use crate::store::AccountStore;

pub struct AppState {
    pub store: Box<dyn AccountStore>,
    pub config: Config,
}
