//! Project renderer
//!
//! Turns the in-memory project list into display-ready cards. Pure: the
//! same projects always produce the same cards, and front-ends replace
//! their whole list with the result.

use serde::Serialize;

use crate::identicon;
use crate::project::Project;
use crate::units::{self, GOAL_PLACES};

/// Default block explorer for Alfajores
pub const DEFAULT_EXPLORER_URL: &str = "https://alfajores-blockscout.celo-testnet.org";

/// One rendered project
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectCard {
    pub index: u64,
    pub name: String,
    pub description: String,
    pub supporters: u64,
    /// Goal in whole tokens, four decimals
    pub goal: String,
    /// `invested / goal * 100`, unclamped
    pub progress: Option<f64>,
    pub progress_label: String,
    pub creator: String,
    pub identicon: String,
    pub explorer_link: String,
}

/// Builds cards for a block explorer
#[derive(Debug, Clone)]
pub struct Renderer {
    explorer_url: String,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(DEFAULT_EXPLORER_URL)
    }
}

impl Renderer {
    pub fn new(explorer_url: impl Into<String>) -> Self {
        let explorer_url: String = explorer_url.into();
        Self {
            explorer_url: explorer_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn render(&self, projects: &[Project]) -> Vec<ProjectCard> {
        projects.iter().map(|p| self.card(p)).collect()
    }

    fn card(&self, project: &Project) -> ProjectCard {
        let progress = project.progress();
        let creator = project.creator.to_string();

        ProjectCard {
            index: project.index,
            name: project.name.clone(),
            description: project.description.clone(),
            supporters: project.supporters,
            goal: units::format_amount(project.goal, GOAL_PLACES),
            progress,
            progress_label: progress
                .map(|p| format!("{:.2}", p))
                .unwrap_or_else(|| "n/a".to_string()),
            identicon: identicon::identicon_url(&project.creator),
            explorer_link: format!("{}/address/{}/transactions", self.explorer_url, creator),
            creator,
        }
    }
}
