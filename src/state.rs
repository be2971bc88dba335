use std::sync::Arc;

use crate::config::Config;
use crate::form::{ContactFormConfig, FormVariant};
use crate::promo::PromoTrigger;
use crate::relay::Relay;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub relay: Arc<dyn Relay>,
    pub promo: PromoTrigger,
}

impl AppState {
    pub fn form(&self, variant: FormVariant) -> ContactFormConfig {
        ContactFormConfig::for_variant(variant, self.config.modal_reset)
    }
}
