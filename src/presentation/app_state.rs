// Application state for HTTP handlers
use crate::application::prediction_service::PredictionService;
use crate::domain::view_state::ViewState;
use tokio::sync::watch;

#[derive(Clone)]
pub struct AppState {
    pub predictions: PredictionService,
    pub view: watch::Receiver<ViewState>,
}
