use std::sync::Arc;

use halalscan_core::application::HalalScanService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: HalalScanService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: HalalScanService) -> Self {
        Self { args, service }
    }
}
