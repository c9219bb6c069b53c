use anyhow::{Result, ensure};
use dealership_core::{Catalog, ConditionFilter, FilterCriteria, VehicleRecord, filter};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thirtyfour::prelude::*;

use super::{BrowserScenario, CombinedScenario, ScenarioCtx, TestScenario};
use crate::common::util::ListingDiff;

pub struct FilterPropertiesScenario;

/// Search terms drawn from the catalog itself plus a few that match nothing.
fn search_pool(catalog: &Catalog) -> Vec<String> {
    let mut pool = vec![String::new(), "zzz".to_string(), "  ".to_string()];
    for vehicle in catalog.vehicles() {
        pool.push(vehicle.make.to_uppercase());
        pool.push(vehicle.model.chars().take(3).collect());
        pool.push(vehicle.year.to_string());
    }
    pool
}

fn random_criteria(rng: &mut ChaCha8Rng, pool: &[String]) -> FilterCriteria {
    let search = pool.choose(rng).cloned().unwrap_or_default();
    let condition = ConditionFilter::ALL[rng.gen_range(0..ConditionFilter::ALL.len())];
    FilterCriteria::new(search, condition)
}

/// Criteria for a browser run, reproducible from the run's seed.
pub fn seeded_criteria(seed: u64, catalog: &Catalog) -> FilterCriteria {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    random_criteria(&mut rng, &search_pool(catalog))
}

fn ids(records: &[&VehicleRecord]) -> Vec<u32> {
    records.iter().map(|v| v.id).collect()
}

pub fn check_properties(catalog: &Catalog, criteria: &FilterCriteria) -> Result<()> {
    let kept = filter(catalog.vehicles(), criteria);
    let kept_ids = ids(&kept);

    let mut cursor = catalog.vehicles().iter();
    for id in &kept_ids {
        ensure!(
            cursor.any(|v| v.id == *id),
            "{criteria:?} reordered the catalog: {kept_ids:?}"
        );
    }
    for vehicle in catalog.vehicles() {
        let shown = kept_ids.contains(&vehicle.id);
        ensure!(
            shown == criteria.matches(vehicle),
            "{criteria:?} disagrees with the predicate for vehicle {}",
            vehicle.id
        );
    }
    let again = filter(kept.iter().copied(), criteria);
    ensure!(ids(&again) == kept_ids, "{criteria:?} is not idempotent");
    Ok(())
}

fn filter_check(rng: &mut ChaCha8Rng) -> Result<()> {
    let catalog = Catalog::load_from_static();
    let everything = filter(catalog.vehicles(), &FilterCriteria::default());
    ensure!(
        everything.len() == catalog.len(),
        "Empty search with 'all' should keep every record"
    );
    let pool = search_pool(&catalog);
    for _ in 0..16 {
        check_properties(&catalog, &random_criteria(rng, &pool))?;
    }
    Ok(())
}

#[async_trait::async_trait]
impl BrowserScenario for FilterPropertiesScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        driver.goto(&ctx.base_url).await?;
        ctx.bridge.wait_for_site().await?;

        let catalog = Catalog::load_from_static();
        for condition in ConditionFilter::ALL {
            ctx.bridge.condition(condition.as_str()).await?;
            let state = ctx.bridge.state().await?;
            let expected = ids(&filter(
                catalog.vehicles(),
                &FilterCriteria::new("", condition),
            ));
            ensure!(
                state.visible_ids == expected,
                "Condition '{}' showed {:?}, expected {expected:?}",
                condition.as_str(),
                state.visible_ids
            );
            if ctx.verbose {
                println!("  🔎 {} -> {:?}", condition.as_str(), state.visible_ids);
            }
        }

        let criteria = seeded_criteria(ctx.seed, &catalog);
        ctx.bridge.search(&criteria.search).await?;
        ctx.bridge.condition(criteria.condition.as_str()).await?;
        let state = ctx.bridge.state().await?;
        let diff = ListingDiff::for_state(&catalog, &state);
        ensure!(
            state.search == criteria.search && diff.matches(),
            "Seed {} search mismatch:\n{}",
            ctx.seed,
            diff.render(&state)
        );
        if ctx.verbose {
            println!("  🔎 {:?} -> {:?}", criteria.search, state.visible_ids);
        }

        ctx.bridge.search("").await?;
        ctx.bridge.condition(ConditionFilter::All.as_str()).await?;
        Ok(())
    }
}

impl CombinedScenario for FilterPropertiesScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new("Filter Engine Properties", filter_check))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn properties_hold_for_seeded_criteria() {
        for seed in [1, 7, 1337] {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            filter_check(&mut rng).expect("filter properties");
        }
    }

    #[test]
    fn seeded_criteria_are_reproducible() {
        let catalog = Catalog::load_from_static();
        let pool = search_pool(&catalog);
        for seed in [1, 42, 1337] {
            let criteria = seeded_criteria(seed, &catalog);
            assert_eq!(criteria, seeded_criteria(seed, &catalog));
            assert!(pool.contains(&criteria.search));
        }
    }
}
