use chrono::Timelike;
use std::sync::Arc;
use std::time::Duration;
use teloxide::prelude::*;

use crate::bot::reporter;
use crate::config::Config;
use crate::data::coins;

/// Daily report hours, local to REPORT_TZ.
const TRIGGER_HOURS: [u32; 3] = [0, 8, 16];
const REPORT_TZ: chrono_tz::Tz = chrono_tz::Asia::Shanghai;

pub async fn run(cfg: Arc<Config>, bot: Bot, client: reqwest::Client) {
    tracing::info!("Scheduler started");

    loop {
        let wait = wait_until_next_trigger(chrono::Utc::now().with_timezone(&REPORT_TZ));
        tracing::debug!(wait_secs = wait.as_secs(), "Next scheduled report in");
        tokio::time::sleep(wait).await;

        tracing::info!("Scheduled report run starting");
        match reporter::send_roster_report(&bot, &cfg, &client, coins::ALL).await {
            Ok(()) => tracing::info!("Scheduled report run completed"),
            Err(e) => tracing::error!(error = %e, "Scheduled report run aborted"),
        }
    }
}

/// Sleep needed to reach the next trigger instant. Asia/Shanghai has no
/// DST, so second-of-day arithmetic is safe. Missed triggers are not
/// caught up; the next one is always computed from the current clock.
fn wait_until_next_trigger(now: chrono::DateTime<chrono_tz::Tz>) -> Duration {
    let current = now.num_seconds_from_midnight() as i64;
    let next = TRIGGER_HOURS
        .iter()
        .map(|h| i64::from(*h) * 3600)
        .find(|t| *t > current)
        .unwrap_or(24 * 3600);
    Duration::from_secs((next - current).max(1) as u64)
}
