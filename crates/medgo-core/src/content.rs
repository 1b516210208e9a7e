//! Copy shown on the MedGo+ screens

pub const BRAND: &str = "MedGo";
pub const BRAND_ACCENT: &str = "+";
pub const TAGLINE: &str = "Healthcare at Your Doorstep";
pub const SUBTITLE: &str = "Connecting senior citizens with qualified doctors through doorstep \
consultations and secure video calls across urban and rural India.";
pub const GET_STARTED: &str = "Get Started Today 🚀";

pub const FEATURES_TITLE: &str = "Why Choose MedGo+?";
pub const FEATURES_SUBTITLE: &str =
    "Experience healthcare that comes to you, designed especially for India's senior citizens.";

pub const CTA_TITLE: &str = "Ready to Transform Your Healthcare Experience?";
pub const CTA_SUBTITLE: &str =
    "Join thousands of families who trust MedGo+ for their healthcare needs.";
pub const BOOK_CONSULTATION: &str = "Book Your First Consultation";
pub const LEARN_MORE: &str = "Learn More";

/// Placeholder shell
pub const WELCOME_SHELL_TEXT: &str = "Welcome to the Senior Health App";
pub const WELCOME_SHELL_BUTTON: &str = "Book Appointment";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 3] = [
    Feature {
        icon: "🏠",
        title: "Doorstep Care",
        description: "Qualified doctors visit you at home for comprehensive medical consultations and treatments.",
    },
    Feature {
        icon: "📱",
        title: "Video Consultations",
        description: "Secure, high-quality video calls with doctors when you need immediate medical advice.",
    },
    Feature {
        icon: "🌍",
        title: "Rural Reach",
        description: "Bridging healthcare gaps in both urban metros and remote rural areas across India.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub target: u64,
    pub label: &'static str,
}

pub const STATS: [Stat; 3] = [
    Stat {
        target: 1000,
        label: "Families Served",
    },
    Stat {
        target: 150,
        label: "Qualified Doctors",
    },
    Stat {
        target: 25,
        label: "Cities Covered",
    },
];
