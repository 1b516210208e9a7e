//! # MedGo+ Core Library
//!
//! Everything behind the MedGo+ landing screen that does not depend on a
//! particular terminal: the design-token library, style presets, the
//! frame-driven animation engine and the state of the landing page.
//!
//! ## Modules
//!
//! - `tokens`: colors, typography, spacing, radii and shadows
//! - `presets`: text, button, card and input styles built from the tokens
//! - `theme`: terminal styles for the parts of the screen
//! - `animation`: animated values with timed, spring, sequence and repeat transitions
//! - `timer`: one-shot and repeating timers fed with frame time
//! - `motion`: reveal, float, pop-in, pulse and tally components
//! - `landing`: the landing page and its call-to-action buttons
//! - `dialog`: confirmation dialogs opened by the buttons
//! - `content`: the copy shown on screen
//! - `settings`: application configuration

pub mod animation;
pub mod content;
pub mod dialog;
pub mod landing;
pub mod motion;
pub mod presets;
pub mod settings;
pub mod theme;
pub mod timer;
pub mod tokens;
