use anyhow::{Context, Result, ensure};
use dealership_core::{
    Catalog, FilterCriteria, LocalizationTable, SessionState, project_catalog,
};
use rand_chacha::ChaCha8Rng;
use thirtyfour::prelude::*;

use super::{BrowserScenario, CombinedScenario, ScenarioCtx, TestScenario};

pub struct SmokeScenario;

fn smoke_check(_rng: &mut ChaCha8Rng) -> Result<()> {
    let catalog = Catalog::load_from_static();
    ensure!(!catalog.is_empty(), "Static catalog should not be empty");
    let ids: Vec<u32> = catalog.vehicles().iter().map(|v| v.id).collect();
    ensure!(
        ids.windows(2).all(|pair| pair[0] < pair[1]),
        "Catalog ids should be strictly increasing, got {ids:?}"
    );
    let listing = project_catalog(
        &catalog,
        &FilterCriteria::default(),
        &SessionState::default(),
        LocalizationTable::builtin(),
    );
    ensure!(
        listing.card_ids() == ids,
        "Unfiltered listing should show every vehicle in catalog order"
    );
    Ok(())
}

#[async_trait::async_trait]
impl BrowserScenario for SmokeScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        driver.goto(&ctx.base_url).await?;
        driver
            .find(By::Css("#car-listings"))
            .await
            .context("inventory grid should render")?;

        let state = ctx.bridge.wait_for_site().await?;
        let expected: Vec<u32> = Catalog::load_from_static()
            .vehicles()
            .iter()
            .map(|v| v.id)
            .collect();
        ensure!(
            state.visible_ids == expected,
            "Initial grid {:?} should list the whole catalog {expected:?}",
            state.visible_ids
        );
        if ctx.verbose {
            println!("  🌐 Site loaded with {} vehicles", state.visible_ids.len());
        }

        let first = *expected.first().context("catalog has vehicles")?;
        ctx.bridge.select(first).await?;
        let state = ctx.bridge.state().await?;
        ensure!(
            state.detail_open == Some(first),
            "Selecting vehicle {first} should open its detail view"
        );
        driver
            .find(By::Id("car-modal"))
            .await
            .context("detail dialog should render")?;

        ctx.bridge.close().await?;
        let state = ctx.bridge.state().await?;
        ensure!(state.detail_open.is_none(), "Close should dismiss the detail view");

        let before = state.theme.clone();
        ctx.bridge.toggle_theme().await?;
        let state = ctx.bridge.state().await?;
        ensure!(state.theme != before, "Theme toggle should flip the theme");
        ctx.bridge.toggle_theme().await?;

        if ctx.verbose {
            println!("  📊 Final state: {state:?}");
        }
        Ok(())
    }
}

impl CombinedScenario for SmokeScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new("Smoke Test", smoke_check))
    }
}
