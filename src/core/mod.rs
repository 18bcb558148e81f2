pub mod planner;
pub mod session;
pub mod toast;

pub use planner::Planner;
pub use session::{LocationOutcome, PlannerForm, PlannerSession, SHARE_LOADED_MESSAGE};
pub use toast::{Toast, ToastQueue, DEFAULT_TOAST_TTL};
