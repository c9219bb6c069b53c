use anyhow::Result;
use rand_chacha::ChaCha8Rng;
use thirtyfour::prelude::*;

use crate::browser::TestBridge;

pub mod filters;
pub mod forms;
pub mod localization;
pub mod pricing;
pub mod smoke;

#[derive(Debug, Clone)]
pub struct ScenarioCtx<'a> {
    pub base_url: String,
    pub seed: u64,
    pub bridge: TestBridge<'a>,
    pub verbose: bool,
}

/// One logic iteration, driven by a seeded generator.
pub type LogicCheck = fn(&mut ChaCha8Rng) -> Result<()>;

// Logic test scenario
#[derive(Debug, Clone)]
pub struct TestScenario {
    pub name: String,
    pub check: LogicCheck,
}

impl TestScenario {
    #[must_use]
    pub fn new(name: impl Into<String>, check: LogicCheck) -> Self {
        Self {
            name: name.into(),
            check,
        }
    }
}

// Browser test scenario
#[async_trait::async_trait]
pub trait BrowserScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()>;
}

// Combined scenario that can run both logic and browser tests
pub trait CombinedScenario: BrowserScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario>;
}

/// A scenario with no browser counterpart.
#[derive(Clone)]
pub struct LogicOnlyScenario {
    name: &'static str,
    check: LogicCheck,
}

impl LogicOnlyScenario {
    pub const fn new(name: &'static str, check: LogicCheck) -> Self {
        Self { name, check }
    }
}

#[async_trait::async_trait]
impl BrowserScenario for LogicOnlyScenario {
    async fn run_browser(&self, _driver: &WebDriver, _ctx: &ScenarioCtx<'_>) -> Result<()> {
        anyhow::bail!("Browser testing not implemented for {}", self.name)
    }
}

impl CombinedScenario for LogicOnlyScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new(self.name, self.check))
    }
}

pub fn get_scenario(name: &str) -> Option<Box<dyn CombinedScenario + Send + Sync>> {
    match name.to_lowercase().as_str() {
        "smoke" => Some(Box::new(smoke::SmokeScenario)),
        "filter-properties" | "filters" => Some(Box::new(filters::FilterPropertiesScenario)),
        "localization-coverage" | "localization" => Some(Box::new(LogicOnlyScenario::new(
            "Localization Coverage",
            localization::coverage_check,
        ))),
        "language-toggle" | "language" => Some(Box::new(localization::LanguageToggleScenario)),
        "form-validation" | "forms" => Some(Box::new(LogicOnlyScenario::new(
            "Form Validation Rules",
            forms::validation_check,
        ))),
        "price-format" | "prices" => Some(Box::new(LogicOnlyScenario::new(
            "Price and Mileage Formatting",
            pricing::format_check,
        ))),
        _ => None,
    }
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    vec![
        ("smoke", "Smoke Test"),
        ("filter-properties", "Filter Engine Properties"),
        ("localization-coverage", "Localization Coverage"),
        ("language-toggle", "Language Toggle Keeps Membership"),
        ("form-validation", "Form Validation Rules"),
        ("price-format", "Price and Mileage Formatting"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_scenario_resolves() {
        for (key, _) in list_scenarios() {
            let scenario = get_scenario(key).unwrap_or_else(|| panic!("{key} should resolve"));
            assert!(scenario.as_logic_scenario().is_some(), "{key} has a logic check");
        }
        assert!(get_scenario("unknown").is_none());
    }
}
