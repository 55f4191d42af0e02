#![allow(dead_code)]

//! Browser-side view flow, modeled as a typed state machine: the four
//! mutually exclusive views, their transitions, and the guard that keeps the
//! recommendations view from firing duplicate generation requests.

use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Hero,
    Profile,
    Chat,
    Recommendations,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEvent {
    /// Hero → Profile: the user starts the journey.
    StartJourney,
    /// Hero → Chat: the user opens the mentor chat directly.
    OpenMentorChat,
    /// Profile → Recommendations, carrying the newly created profile id.
    ProfileCompleted(Uuid),
    /// Chat → Hero: the user closes the chat.
    CloseChat,
    /// Recommendations → Chat: the user asks to discuss with the mentor.
    DiscussWithMentor,
}

/// Current view plus the profile id once one exists. Events that are not
/// defined for the current view are rejected without a state change.
#[derive(Debug)]
pub struct ViewFlow {
    view: View,
    profile_id: Option<Uuid>,
}

impl ViewFlow {
    pub fn new() -> Self {
        Self {
            view: View::Hero,
            profile_id: None,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn profile_id(&self) -> Option<Uuid> {
        self.profile_id
    }

    /// Applies an event. Returns `false` when the event is not a defined
    /// transition from the current view.
    pub fn apply(&mut self, event: ViewEvent) -> bool {
        match (self.view, event) {
            (View::Hero, ViewEvent::StartJourney) => {
                self.view = View::Profile;
                true
            }
            (View::Hero, ViewEvent::OpenMentorChat) => {
                self.view = View::Chat;
                true
            }
            (View::Profile, ViewEvent::ProfileCompleted(id)) => {
                self.profile_id = Some(id);
                self.view = View::Recommendations;
                true
            }
            (View::Chat, ViewEvent::CloseChat) => {
                self.view = View::Hero;
                true
            }
            (View::Recommendations, ViewEvent::DiscussWithMentor) => {
                self.view = View::Chat;
                true
            }
            _ => false,
        }
    }
}

impl Default for ViewFlow {
    fn default() -> Self {
        Self::new()
    }
}

/// Guard for the recommendations view's auto-generation: at most one request
/// in flight, never re-fired by re-renders, and never fired after a failure
/// until the user explicitly retries.
#[derive(Debug, Default)]
pub struct AnalysisTrigger {
    in_flight: bool,
    failed: bool,
}

impl AnalysisTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// Check-and-set: returns `true` exactly when a generation request should
    /// be sent now, and marks it in flight. Safe to call on every re-render.
    pub fn try_fire(&mut self, analysis_exists: bool, loading: bool) -> bool {
        if analysis_exists || loading || self.in_flight || self.failed {
            return false;
        }
        self.in_flight = true;
        true
    }

    /// Records the outcome of the in-flight request.
    pub fn complete(&mut self, success: bool) {
        self.in_flight = false;
        self.failed = !success;
    }

    /// Explicit user retry after a failure: re-arms and fires immediately.
    pub fn retry(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.failed = false;
        self.in_flight = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path_hero_to_chat_via_recommendations() {
        let mut flow = ViewFlow::new();
        assert_eq!(flow.view(), View::Hero);

        assert!(flow.apply(ViewEvent::StartJourney));
        assert_eq!(flow.view(), View::Profile);

        let id = Uuid::new_v4();
        assert!(flow.apply(ViewEvent::ProfileCompleted(id)));
        assert_eq!(flow.view(), View::Recommendations);
        assert_eq!(flow.profile_id(), Some(id));

        assert!(flow.apply(ViewEvent::DiscussWithMentor));
        assert_eq!(flow.view(), View::Chat);

        assert!(flow.apply(ViewEvent::CloseChat));
        assert_eq!(flow.view(), View::Hero);
    }

    #[test]
    fn test_direct_mentor_chat_from_hero() {
        let mut flow = ViewFlow::new();
        assert!(flow.apply(ViewEvent::OpenMentorChat));
        assert_eq!(flow.view(), View::Chat);
        assert_eq!(flow.profile_id(), None);
    }

    #[test]
    fn test_undefined_transitions_are_rejected() {
        let mut flow = ViewFlow::new();
        assert!(!flow.apply(ViewEvent::CloseChat));
        assert!(!flow.apply(ViewEvent::DiscussWithMentor));
        assert_eq!(flow.view(), View::Hero);

        flow.apply(ViewEvent::StartJourney);
        assert!(!flow.apply(ViewEvent::StartJourney));
        assert_eq!(flow.view(), View::Profile);
    }

    #[test]
    fn test_profile_id_survives_chat_round_trip() {
        let mut flow = ViewFlow::new();
        flow.apply(ViewEvent::StartJourney);
        let id = Uuid::new_v4();
        flow.apply(ViewEvent::ProfileCompleted(id));
        flow.apply(ViewEvent::DiscussWithMentor);
        assert_eq!(flow.profile_id(), Some(id));
    }

    #[test]
    fn test_trigger_fires_exactly_once_across_rerenders() {
        let mut trigger = AnalysisTrigger::new();
        assert!(trigger.try_fire(false, false));
        // Re-renders while the request is in flight must not fire again.
        assert!(!trigger.try_fire(false, false));
        assert!(!trigger.try_fire(false, false));
    }

    #[test]
    fn test_trigger_does_not_fire_when_analysis_exists_or_loading() {
        let mut trigger = AnalysisTrigger::new();
        assert!(!trigger.try_fire(true, false));
        assert!(!trigger.try_fire(false, true));
    }

    #[test]
    fn test_trigger_holds_after_failure_until_explicit_retry() {
        let mut trigger = AnalysisTrigger::new();
        assert!(trigger.try_fire(false, false));
        trigger.complete(false);
        // Auto-fire is off in the error state; only the retry action re-arms.
        assert!(!trigger.try_fire(false, false));
        assert!(trigger.retry());
        assert!(trigger.in_flight());
        trigger.complete(true);
        assert!(!trigger.try_fire(true, false));
    }
}
