//! Interaction core: the input form state machine, the three-stage
//! generation pipeline, the dashboard synchronizer, and the shared tab
//! view model.
//!
//! Everything here is an explicit state object owned by one controller
//! per screen; transitions are plain methods with no ambient globals.

pub mod dashboard;
pub mod form;
pub mod history;
pub mod pipeline;
pub mod tabs;

pub use dashboard::{
    DashboardController, DashboardError, DashboardState, DashboardViewModel, RouteChange,
    SectionSource, SectionView, Sourced,
};
pub use form::{FieldState, FormError, FormField, InputForm, LockableField};
pub use history::{active_count, display_title, distinct_tag_count, format_created_at};
pub use pipeline::{submit, Route, SubmissionError, SubmissionOutcome};
pub use tabs::{Tab, TabState};
