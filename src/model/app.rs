use crate::service::backend::BackendClient;

#[derive(Clone)]
pub struct AppState {
    pub backend: BackendClient,
}
