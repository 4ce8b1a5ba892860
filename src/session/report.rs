//! Report trigger - hands confirmed generate requests to the report generator

use crate::command::GenerateRequest;
use tokio::sync::mpsc::UnboundedSender;

pub trait ReportTrigger: Send + Sync {
    fn request_report(&self, request: GenerateRequest);
}

impl ReportTrigger for UnboundedSender<GenerateRequest> {
    fn request_report(&self, request: GenerateRequest) {
        if self.send(request).is_err() {
            tracing::warn!("Report generator has shut down; request dropped");
        }
    }
}
