use std::time::Instant;

use tracing::{info, warn};
use url::Url;

use super::planner::Planner;
use super::toast::{Toast, ToastQueue};
use crate::{
    error::Result,
    export::{export_itinerary, ExportArtifact},
    share,
    types::{Itinerary, PlannerRequest, TravelStyle, DEFAULT_DAYS},
};

/// Notification shown after a shared itinerary has been restored.
pub const SHARE_LOADED_MESSAGE: &str = "Itinéraire partagé chargé avec succès !";

/// Values held by the planner form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerForm {
    pub destination: String,
    pub days: u32,
    pub style: TravelStyle,
}

impl Default for PlannerForm {
    fn default() -> Self {
        Self {
            destination: String::new(),
            days: DEFAULT_DAYS,
            style: TravelStyle::default(),
        }
    }
}

impl PlannerForm {
    pub fn to_request(&self) -> PlannerRequest {
        PlannerRequest::new(self.destination.clone(), self.days, self.style)
    }
}

/// What a location change did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationOutcome {
    /// The location carries no shared itinerary.
    NoSharedState,
    /// A shared itinerary was installed and the fragment removed.
    Loaded,
    /// The shared link could not be decoded; the session is unchanged.
    Rejected,
}

/// State of one planning session.
///
/// The itinerary is either absent or complete; it is only ever replaced
/// wholesale. Operations that mutate the session take `&mut self`, so a second
/// submission cannot start while one is outstanding.
#[derive(Debug)]
pub struct PlannerSession {
    form: PlannerForm,
    itinerary: Option<Itinerary>,
    error: Option<String>,
    loading: bool,
    location: Url,
    toasts: ToastQueue,
}

impl PlannerSession {
    pub fn new(location: Url) -> Self {
        Self {
            form: PlannerForm::default(),
            itinerary: None,
            error: None,
            loading: false,
            location,
            toasts: ToastQueue::default(),
        }
    }

    pub fn form(&self) -> &PlannerForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut PlannerForm {
        &mut self.form
    }

    pub fn itinerary(&self) -> Option<&Itinerary> {
        self.itinerary.as_ref()
    }

    /// User-facing message of the last failure, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The location as currently shown to the user.
    pub fn location(&self) -> &Url {
        &self.location
    }

    /// Submit the form: validate, then issue exactly one generation request.
    pub async fn submit(&mut self, planner: &Planner) -> Result<&Itinerary> {
        let request = self.form.to_request();
        if let Err(err) = request.validate() {
            self.error = Some(err.user_message());
            return Err(err);
        }

        self.error = None;
        self.itinerary = None;
        self.loading = true;

        let outcome = planner.generate(&request).await;
        self.loading = false;

        match outcome {
            Ok(itinerary) => Ok(&*self.itinerary.insert(itinerary)),
            Err(err) => {
                self.error = Some(err.user_message());
                Err(err)
            }
        }
    }

    /// Back to the empty form.
    pub fn reset(&mut self) {
        self.itinerary = None;
        self.error = None;
        self.form.destination.clear();
    }

    /// Load or navigation hook: restore a shared itinerary from `location`.
    pub fn load_location(&mut self, location: Url) -> LocationOutcome {
        self.load_location_at(location, Instant::now())
    }

    pub fn load_location_at(&mut self, location: Url, now: Instant) -> LocationOutcome {
        let decoded = share::decode_location(&location);
        self.location = location;

        match decoded {
            None => LocationOutcome::NoSharedState,
            Some(Ok(itinerary)) => {
                info!(
                    target: "evasion::session",
                    destination = %itinerary.destination,
                    days = itinerary.day_count(),
                    "shared itinerary restored"
                );
                self.form.destination = itinerary.destination.clone();
                self.form.days = itinerary.day_count() as u32;
                self.itinerary = Some(itinerary);
                self.error = None;
                self.location = share::strip_fragment(&self.location);
                self.toasts.push(SHARE_LOADED_MESSAGE, now);
                LocationOutcome::Loaded
            }
            Some(Err(err)) => {
                warn!(target: "evasion::session", error = %err, "shared itinerary rejected");
                self.error = Some(err.user_message());
                LocationOutcome::Rejected
            }
        }
    }

    /// Link that restores the current itinerary.
    pub fn share_url(&self) -> Option<Result<Url>> {
        let itinerary = self.itinerary.as_ref()?;
        Some(share::share_url(&self.location, itinerary))
    }

    pub fn export(&self) -> Option<Result<ExportArtifact>> {
        self.itinerary.as_ref().map(export_itinerary)
    }

    pub fn active_toasts(&mut self, now: Instant) -> Vec<Toast> {
        self.toasts.active(now).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location() -> Url {
        Url::parse("https://planner.example/evasion/").unwrap()
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = PlannerSession::new(location());
        assert!(session.itinerary().is_none());
        assert!(session.error().is_none());
        assert!(!session.is_loading());
        assert_eq!(session.form().days, DEFAULT_DAYS);
        assert_eq!(session.form().style, TravelStyle::Relaxation);
        assert!(session.share_url().is_none());
        assert!(session.export().is_none());
    }

    #[test]
    fn test_plain_location_is_not_an_error() {
        let mut session = PlannerSession::new(location());
        let outcome = session.load_location(Url::parse("https://planner.example/#about").unwrap());
        assert_eq!(outcome, LocationOutcome::NoSharedState);
        assert!(session.error().is_none());
    }
}
