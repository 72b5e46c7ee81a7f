use anyhow::{Context, Result};
use std::time::Duration;
use thirtyfour::prelude::*;

/// Page object for the rendered dashboard.
pub struct DashboardPage<'a> {
    driver: &'a WebDriver,
}

impl<'a> DashboardPage<'a> {
    /// Navigate to the dashboard and wait for the first state to render.
    pub async fn open(driver: &'a WebDriver, url: &str) -> Result<Self> {
        driver.goto(url).await.with_context(|| format!("opening {url}"))?;
        let page = Self { driver };
        page.wait_for("#cash", Duration::from_secs(10))
            .await
            .context("dashboard never showed the cash counter")?;
        Ok(page)
    }

    pub async fn wait_for(&self, css: &str, timeout: Duration) -> Result<WebElement> {
        self.driver
            .query(By::Css(css))
            .wait(timeout, Duration::from_millis(100))
            .first()
            .await
            .with_context(|| format!("waiting for {css}"))
    }

    pub async fn ensure_present(&self, css: &str) -> Result<()> {
        self.driver
            .find(By::Css(css))
            .await
            .with_context(|| format!("{css} is missing"))?;
        Ok(())
    }

    pub async fn click(&self, css: &str) -> Result<()> {
        let element = self
            .driver
            .find(By::Css(css))
            .await
            .with_context(|| format!("{css} is missing"))?;
        element.click().await.with_context(|| format!("clicking {css}"))?;
        Ok(())
    }

    /// Click the header tab whose route ends with `path`.
    pub async fn click_nav(&self, path: &str) -> Result<()> {
        self.click(&format!("nav button[data-route='{path}']")).await
    }

    /// Accept the `window.confirm` raised by destructive actions.
    pub async fn accept_confirm(&self) -> Result<()> {
        self.driver
            .accept_alert()
            .await
            .context("no confirmation dialog was shown")?;
        Ok(())
    }

    /// Numeric value of a counter, preferring its unformatted `data-value`.
    pub async fn counter(&self, id: &str) -> Result<f64> {
        let element = self
            .driver
            .find(By::Id(id))
            .await
            .with_context(|| format!("counter #{id} is missing"))?;
        let raw = match element.attr("data-value").await? {
            Some(value) => value,
            None => element.text().await?,
        };
        parse_counter(&raw).with_context(|| format!("counter #{id} shows {raw:?}"))
    }
}

/// Parse a displayed number, ignoring grouping separators and suffixes.
pub fn parse_counter(text: &str) -> Option<f64> {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | '-'))
        .collect();
    cleaned.parse().ok()
}
