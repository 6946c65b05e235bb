mod dispatch_service;
mod report_session_service;

pub use dispatch_service::{DispatchOutcome, ReportDispatcher, SimulatedDispatcher};
pub use report_session_service::ReportSessionService;
