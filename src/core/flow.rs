//! Submission state machine for the authentication forms
//!
//! `Idle -> Submitting -> { Error (failed, retry-ready), Confirmed (terminal) }`
//!
//! Only one submission can be in flight per form: [`SubmitFlow::begin`]
//! refuses while `Submitting` and after the terminal state. What happens after
//! a failed remote call is an explicit [`ErrorTransition`] decision.

use super::reply::SubmitError;

/// Form submission state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    /// Last submission failed; the form accepts a new one
    Error(String),
    /// Terminal: the login page navigates away, the signup page confirms
    Confirmed,
}

/// Transition taken when the remote call reports an error
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorTransition {
    /// Show the message and still enter the terminal state
    #[default]
    Proceed,
    /// Show the message and stay on the form
    Remain,
}

/// Side effects the view must apply once a submission settles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    /// Clear every field back to its default
    pub reset_fields: bool,
    /// The flow reached its terminal state
    pub terminal: bool,
}

/// Submission state plus the form-level error message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitFlow {
    state: SubmissionState,
    on_error: ErrorTransition,
    /// Message carried into the terminal state under `ErrorTransition::Proceed`
    carried_error: Option<String>,
}

impl SubmitFlow {
    pub fn new(on_error: ErrorTransition) -> Self {
        Self {
            on_error,
            ..Self::default()
        }
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    pub fn is_confirmed(&self) -> bool {
        self.state == SubmissionState::Confirmed
    }

    /// Message for the form-level message region
    pub fn submit_error(&self) -> Option<&str> {
        match &self.state {
            SubmissionState::Error(message) => Some(message),
            SubmissionState::Confirmed => self.carried_error.as_deref(),
            SubmissionState::Idle | SubmissionState::Submitting => None,
        }
    }

    /// Enter `Submitting`; returns false when a submission may not start
    pub fn begin(&mut self) -> bool {
        match self.state {
            SubmissionState::Idle | SubmissionState::Error(_) => {
                self.state = SubmissionState::Submitting;
                self.carried_error = None;
                true
            }
            SubmissionState::Submitting | SubmissionState::Confirmed => false,
        }
    }

    /// Apply the remote outcome of the in-flight submission
    pub fn settle(&mut self, outcome: Result<(), SubmitError>) -> Settlement {
        if !self.is_submitting() {
            return Settlement {
                reset_fields: false,
                terminal: self.is_confirmed(),
            };
        }

        match outcome {
            Ok(()) => {
                self.state = SubmissionState::Confirmed;
                Settlement {
                    reset_fields: false,
                    terminal: true,
                }
            }
            Err(error) => match self.on_error {
                ErrorTransition::Proceed => {
                    self.state = SubmissionState::Confirmed;
                    self.carried_error = Some(error.message());
                    Settlement {
                        reset_fields: true,
                        terminal: true,
                    }
                }
                ErrorTransition::Remain => {
                    self.state = SubmissionState::Error(error.message());
                    Settlement {
                        reset_fields: true,
                        terminal: false,
                    }
                }
            },
        }
    }

    /// Any field edit clears a displayed submit error
    pub fn field_changed(&mut self) {
        self.carried_error = None;
        if matches!(self.state, SubmissionState::Error(_)) {
            self.state = SubmissionState::Idle;
        }
    }
}

/// Colouring of the signup status panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelTone {
    Primary,
    Error,
}

impl PanelTone {
    pub fn class(&self) -> &'static str {
        match self {
            PanelTone::Primary => "bg-primary",
            PanelTone::Error => "bg-primary bg-red-500/10 border-red-500/50 text-red-700",
        }
    }
}

/// Panel shown in place of the signup form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusPanel {
    pub title: &'static str,
    pub description: String,
    pub tone: PanelTone,
    pub show_mail_icon: bool,
}

/// What the signup page renders for a given flow and link state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupView {
    pub show_fields: bool,
    pub panel: Option<StatusPanel>,
}

impl SignupView {
    /// The code-exchange error takes priority over any submission state
    pub fn resolve(confirmed: bool, link_error: Option<&str>) -> Self {
        let link_error = link_error.filter(|message| !message.is_empty());

        let panel = match link_error {
            Some(message) => Some(StatusPanel {
                title: "Invalid Link",
                description: message.to_string(),
                tone: PanelTone::Error,
                show_mail_icon: false,
            }),
            None if confirmed => Some(StatusPanel {
                title: "Check your email.",
                description: "An email confirmation has been sent.".to_string(),
                tone: PanelTone::Primary,
                show_mail_icon: true,
            }),
            None => None,
        };

        Self {
            show_fields: !confirmed && link_error.is_none(),
            panel,
        }
    }
}
