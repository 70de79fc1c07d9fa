use std::sync::Arc;

use crate::{clock::Clock, db::VolunteerStore};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn VolunteerStore>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(store: Arc<dyn VolunteerStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }
}
