use anyhow::{Result, ensure};
use dealership_core::{
    Catalog, ConditionFilter, FilterCriteria, Lang, LocalizationTable, SessionState, Theme,
    project_catalog,
};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use thirtyfour::prelude::*;

use super::{BrowserScenario, CombinedScenario, ScenarioCtx, TestScenario};

pub fn coverage_check(_rng: &mut ChaCha8Rng) -> Result<()> {
    let table = LocalizationTable::builtin();
    for lang in Lang::ALL {
        let missing = table.missing_keys(lang);
        ensure!(
            missing.is_empty(),
            "{} is missing {} keys: {missing:?}",
            lang.code(),
            missing.len()
        );
    }
    Ok(())
}

pub struct LanguageToggleScenario;

fn toggle_check(rng: &mut ChaCha8Rng) -> Result<()> {
    let catalog = Catalog::load_from_static();
    let table = LocalizationTable::builtin();
    let vehicle = &catalog.vehicles()[rng.gen_range(0..catalog.len())];
    let condition = ConditionFilter::ALL[rng.gen_range(0..ConditionFilter::ALL.len())];
    let criteria = FilterCriteria::new(vehicle.make.clone(), condition);

    let english = project_catalog(
        &catalog,
        &criteria,
        &SessionState::new(Lang::En, Theme::Dark),
        table,
    );
    let spanish = project_catalog(
        &catalog,
        &criteria,
        &SessionState::new(Lang::Es, Theme::Dark),
        table,
    );
    ensure!(
        english.card_ids() == spanish.card_ids(),
        "Language changed membership for {criteria:?}"
    );
    Ok(())
}

#[async_trait::async_trait]
impl BrowserScenario for LanguageToggleScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        driver.goto(&ctx.base_url).await?;
        ctx.bridge.wait_for_site().await?;

        ctx.bridge.condition("used").await?;
        let before = ctx.bridge.state().await?;
        ctx.bridge.toggle_language().await?;
        let after = ctx.bridge.state().await?;
        ensure!(after.lang != before.lang, "Language toggle should flip the language");
        ensure!(
            after.visible_ids == before.visible_ids,
            "Language toggle changed the grid from {:?} to {:?}",
            before.visible_ids,
            after.visible_ids
        );
        let html_lang = driver
            .find(By::Css("html"))
            .await?
            .attr("lang")
            .await?
            .unwrap_or_default();
        ensure!(html_lang == after.lang, "<html lang> should follow the toggle");

        ctx.bridge.toggle_language().await?;
        ctx.bridge.condition("all").await?;
        Ok(())
    }
}

impl CombinedScenario for LanguageToggleScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new("Language Toggle Keeps Membership", toggle_check))
    }
}
