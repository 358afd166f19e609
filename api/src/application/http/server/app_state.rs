use std::sync::Arc;

use glukosa_core::application::GlukosaService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: GlukosaService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: GlukosaService) -> Self {
        Self { args, service }
    }
}
