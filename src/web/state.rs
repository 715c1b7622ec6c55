use std::sync::Arc;

use crate::chart::ChartService;
use crate::horoscope::HoroscopeService;

#[derive(Clone)]
pub struct AppState {
    pub charts: ChartService,
    pub horoscopes: Arc<HoroscopeService>,
}
