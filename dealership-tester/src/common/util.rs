use anyhow::{Context, Result};
use chrono::Utc;
use dealership_core::{Catalog, ConditionFilter, FilterCriteria, filter};
use std::fmt::Write as _;
use std::{fs, path::Path};
use thirtyfour::prelude::*;

use crate::browser::{SiteState, TestBridge};

/// Dialogs whose markup is worth keeping when a run fails.
const DIALOG_SELECTOR: &str = "#car-modal, #purchase-modal, .success-modal";

pub fn artifacts_dir(base: &str, browser: &str, scenario: &str, seed: u64) -> String {
    let ts = Utc::now().format("%Y%m%dT%H%M%S");
    format!("{base}/{browser}/{scenario}/seed-{seed}/{ts}")
}

/// Inventory grid as shown versus what the core filter gives for the same criteria.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingDiff {
    pub expected: Vec<u32>,
    pub shown: Vec<u32>,
    pub missing: Vec<u32>,
    pub unexpected: Vec<u32>,
}

impl ListingDiff {
    #[must_use]
    pub fn for_state(catalog: &Catalog, state: &SiteState) -> Self {
        let criteria = FilterCriteria::new(
            state.search.clone(),
            ConditionFilter::parse(&state.condition),
        );
        let expected: Vec<u32> = filter(catalog.vehicles(), &criteria)
            .iter()
            .map(|v| v.id)
            .collect();
        let shown = state.visible_ids.clone();
        let missing = expected
            .iter()
            .copied()
            .filter(|id| !shown.contains(id))
            .collect();
        let unexpected = shown
            .iter()
            .copied()
            .filter(|id| !expected.contains(id))
            .collect();
        Self {
            expected,
            shown,
            missing,
            unexpected,
        }
    }

    /// Same records in the same order.
    #[must_use]
    pub fn matches(&self) -> bool {
        self.expected == self.shown
    }

    #[must_use]
    pub fn render(&self, state: &SiteState) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "search: {:?}  condition: {}  lang: {}",
            state.search, state.condition, state.lang
        );
        let _ = writeln!(out, "expected:   {:?}", self.expected);
        let _ = writeln!(out, "shown:      {:?}", self.shown);
        let _ = writeln!(out, "missing:    {:?}", self.missing);
        let _ = writeln!(out, "unexpected: {:?}", self.unexpected);
        if self.missing.is_empty() && self.unexpected.is_empty() && !self.matches() {
            let _ = writeln!(out, "order differs");
        }
        out
    }
}

/// What a failed browser run leaves behind.
#[derive(Debug, Default)]
struct FailureArtifacts {
    screenshot: Option<Vec<u8>>,
    dialogs: Vec<String>,
    state: Option<SiteState>,
    error_chain: String,
}

/// Save a screenshot, any open dialog markup, the bridge state with its
/// listing diff, and the error chain for a failed run.
pub async fn capture_artifacts(driver: &WebDriver, dir: &str, err: &anyhow::Error) -> Result<()> {
    let mut dialogs = Vec::new();
    if let Ok(elements) = driver.find_all(By::Css(DIALOG_SELECTOR)).await {
        for element in elements {
            if let Ok(markup) = element.outer_html().await {
                dialogs.push(markup);
            }
        }
    }
    let artifacts = FailureArtifacts {
        screenshot: driver.screenshot_as_png().await.ok(),
        dialogs,
        state: TestBridge::new(driver).state().await.ok(),
        error_chain: format!("{err:#}"),
    };
    write_artifact_files(Path::new(dir), &artifacts, &Catalog::load_from_static())
}

fn write_artifact_files(dir: &Path, artifacts: &FailureArtifacts, catalog: &Catalog) -> Result<()> {
    fs::create_dir_all(dir).context("creating artifacts dir")?;

    if let Some(png) = &artifacts.screenshot {
        let _ = fs::write(dir.join("screenshot.png"), png);
    }
    if !artifacts.dialogs.is_empty() {
        let _ = fs::write(dir.join("dialogs.html"), artifacts.dialogs.join("\n\n"));
    }
    if let Some(state) = &artifacts.state {
        let payload = serde_json::to_vec_pretty(state).unwrap_or_default();
        let _ = fs::write(dir.join("state.json"), payload);
        let diff = ListingDiff::for_state(catalog, state);
        let _ = fs::write(dir.join("listing.txt"), diff.render(state));
    }
    let _ = fs::write(dir.join("error.txt"), &artifacts.error_chain);

    Ok(())
}

pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}
