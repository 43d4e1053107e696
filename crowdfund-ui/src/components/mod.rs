//! UI Components
//!
//! Leptos components for the dApp page.

pub mod loading;
pub mod nav;
pub mod new_project;
pub mod project_card;
pub mod toast;

pub use loading::{CardSkeleton, InlineLoading};
pub use nav::Nav;
pub use new_project::NewProjectForm;
pub use project_card::ProjectCardView;
pub use toast::Toast;
