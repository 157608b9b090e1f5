use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use headless_chrome::protocol::cdp::Page::CaptureScreenshotFormatOption;
use headless_chrome::{Browser, LaunchOptions};

const CHART_BASE: &str = "https://www.coingecko.com/en/coins";

/// The chart page is a JS-heavy SPA with no load event worth trusting;
/// a fixed delay after navigation lets the chart widget render.
const RENDER_DELAY: Duration = Duration::from_secs(5);

pub fn chart_url(coin_id: &str) -> String {
    format!("{CHART_BASE}/{coin_id}")
}

pub fn chart_path(coin_id: &str) -> PathBuf {
    PathBuf::from(format!("{coin_id}_chart.png"))
}

/// Capture a coin's chart page to `<coin>_chart.png` in the working
/// directory and return the path. Each call runs its own short-lived
/// Chrome instance; the process is torn down when `Browser` drops, on
/// error paths included.
pub async fn capture(coin_id: &str) -> Result<PathBuf> {
    let id = coin_id.to_string();
    tokio::task::spawn_blocking(move || capture_blocking(&id)).await?
}

fn capture_blocking(coin_id: &str) -> Result<PathBuf> {
    let options = LaunchOptions::default_builder()
        .headless(true)
        .sandbox(false)
        .window_size(Some((1920, 1080)))
        .build()
        .map_err(|e| anyhow::anyhow!("Invalid browser launch options: {e}"))?;
    let browser = Browser::new(options).context("Failed to launch headless browser")?;

    let tab = browser.new_tab()?;
    tab.navigate_to(&chart_url(coin_id))?;
    tab.wait_until_navigated()?;
    std::thread::sleep(RENDER_DELAY);

    let png = tab.capture_screenshot(CaptureScreenshotFormatOption::Png, None, None, true)?;
    let path = chart_path(coin_id);
    std::fs::write(&path, png)
        .with_context(|| format!("Failed to write chart screenshot {}", path.display()))?;
    Ok(path)
}
