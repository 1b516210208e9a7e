//! Confirmation dialogs opened by the call-to-action buttons
//!
//! Dialog text is fixed. Choosing an option writes a fixed line to the
//! diagnostic log and closes the dialog; nothing else happens.

use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogChoice {
    pub label: &'static str,
    /// Line written to the log when chosen
    pub log_line: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    title: &'static str,
    message: &'static str,
    choices: Vec<DialogChoice>,
    selected: usize,
}

impl Dialog {
    /// Opened by "Get Started Today" and "Book Your First Consultation"
    pub fn welcome() -> Self {
        Self {
            title: "Welcome to MedGo+! 🏥",
            message: "Your healthcare journey begins here. Book your first consultation today!",
            choices: vec![
                DialogChoice {
                    label: "Book Now",
                    log_line: "Booking...",
                },
                DialogChoice {
                    label: "Learn More",
                    log_line: "Learning...",
                },
            ],
            selected: 0,
        }
    }

    /// Opened by "Learn More"
    pub fn features() -> Self {
        Self {
            title: "MedGo+ Features",
            message: "Discover how we're revolutionizing healthcare for senior citizens across India.",
            choices: vec![DialogChoice {
                label: "Got it!",
                log_line: "Understood",
            }],
            selected: 0,
        }
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn message(&self) -> &'static str {
        self.message
    }

    pub fn choices(&self) -> &[DialogChoice] {
        &self.choices
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.choices.len();
    }

    pub fn select_previous(&mut self) {
        self.selected = (self.selected + self.choices.len() - 1) % self.choices.len();
    }

    /// Consume the dialog, logging the selected choice
    pub fn confirm(self) -> DialogChoice {
        let choice = self.choices[self.selected];
        info!(target: "medgo::dialog", choice = choice.label, "{}", choice.log_line);
        choice
    }
}
