use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thirtyfour::prelude::*;

/// Snapshot returned by `window.__dealershipTest.state()`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteState {
    pub lang: String,
    pub theme: String,
    pub search: String,
    pub condition: String,
    pub visible_ids: Vec<u32>,
    pub detail_open: Option<u32>,
    pub confirmations: usize,
}

#[derive(Debug, Clone)]
pub struct TestBridge<'a> {
    driver: &'a WebDriver,
}

impl<'a> TestBridge<'a> {
    pub const fn new(driver: &'a WebDriver) -> Self {
        Self { driver }
    }

    pub async fn is_available(&self) -> Result<bool> {
        let result = self
            .driver
            .execute("return !!window.__dealershipTest", vec![])
            .await?;
        Ok(result.json().as_bool().unwrap_or(false))
    }

    /// Poll until the page has mounted and exposed the bridge, then snapshot it.
    pub async fn wait_for_site(&self) -> Result<SiteState> {
        for _ in 0..20 {
            if self.is_available().await? {
                return self.state().await;
            }
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        bail!("__dealershipTest is not available. Did you pass ?test=1?")
    }

    async fn call(&self, function: &str, args: Vec<serde_json::Value>) -> Result<()> {
        let script = format!("window.__dealershipTest.{function}.apply(null, arguments)");
        self.driver
            .execute(&script, args)
            .await
            .with_context(|| format!("calling bridge function {function}"))?;
        Ok(())
    }

    pub async fn search(&self, term: &str) -> Result<()> {
        self.call("search", vec![term.into()]).await
    }

    pub async fn condition(&self, condition: &str) -> Result<()> {
        self.call("condition", vec![condition.into()]).await
    }

    pub async fn select(&self, id: u32) -> Result<()> {
        self.call("select", vec![id.into()]).await
    }

    pub async fn close(&self) -> Result<()> {
        self.call("close", vec![]).await
    }

    pub async fn toggle_language(&self) -> Result<()> {
        self.call("toggleLanguage", vec![]).await
    }

    pub async fn toggle_theme(&self) -> Result<()> {
        self.call("toggleTheme", vec![]).await
    }

    pub async fn state(&self) -> Result<SiteState> {
        let result = self
            .driver
            .execute("return window.__dealershipTest.state()", vec![])
            .await?;
        let value = result.json().clone();
        serde_json::from_value(value).context("parsing SiteState")
    }
}
