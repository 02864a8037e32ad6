//! Pure helpers behind the history screen: display titles, date
//! formatting, and the headline stats computed from the campaign list.

use chrono::{DateTime, Duration, Utc};
use launchkit_core::Campaign;

/// Campaigns created within this window count as "active".
const ACTIVE_WINDOW_DAYS: i64 = 30;

/// Title shown in the history list; falls back to the id when a record
/// carries no usable title.
#[must_use]
pub fn display_title(campaign: &Campaign) -> String {
    let title = campaign.title.trim();
    if title.is_empty() {
        format!("Campaign {}", campaign.id)
    } else {
        title.to_string()
    }
}

/// `MM/DD/YYYY`, matching the history list rendering.
#[must_use]
pub fn format_created_at(created_at: DateTime<Utc>) -> String {
    created_at.format("%m/%d/%Y").to_string()
}

/// Number of campaigns created in the trailing 30-day window.
#[must_use]
pub fn active_count(campaigns: &[Campaign], now: DateTime<Utc>) -> usize {
    let cutoff = now - Duration::days(ACTIVE_WINDOW_DAYS);
    campaigns.iter().filter(|c| c.created_at > cutoff).count()
}

/// Number of distinct non-empty tags across the list.
#[must_use]
pub fn distinct_tag_count(campaigns: &[Campaign]) -> usize {
    let mut tags: Vec<&str> = campaigns
        .iter()
        .filter_map(|c| c.tag.as_deref())
        .filter(|t| !t.trim().is_empty())
        .collect();
    tags.sort_unstable();
    tags.dedup();
    tags.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn campaign_at(id: &str, title: &str, created_at: DateTime<Utc>) -> Campaign {
        Campaign {
            id: id.to_string(),
            title: title.to_string(),
            tag: None,
            personas: None,
            messaging: None,
            channels: None,
            calendar: None,
            budget_kpis: None,
            competitors: None,
            risk_analysis: None,
            created_at,
        }
    }

    #[test]
    fn display_title_falls_back_to_id() {
        let now = Utc::now();
        assert_eq!(
            display_title(&campaign_at("abc-123", "AI CRM", now)),
            "AI CRM"
        );
        assert_eq!(
            display_title(&campaign_at("abc-123", "   ", now)),
            "Campaign abc-123"
        );
    }

    #[test]
    fn created_at_formats_as_month_day_year() {
        let date = Utc.with_ymd_and_hms(2026, 3, 7, 12, 0, 0).unwrap();
        assert_eq!(format_created_at(date), "03/07/2026");
    }

    #[test]
    fn active_count_uses_a_thirty_day_window() {
        let now = Utc.with_ymd_and_hms(2026, 8, 1, 0, 0, 0).unwrap();
        let campaigns = vec![
            campaign_at("a", "recent", now - Duration::days(5)),
            campaign_at("b", "edge", now - Duration::days(29)),
            campaign_at("c", "stale", now - Duration::days(45)),
        ];
        assert_eq!(active_count(&campaigns, now), 2);
    }

    #[test]
    fn distinct_tags_ignore_blank_and_duplicates() {
        let now = Utc::now();
        let mut campaigns = vec![
            campaign_at("a", "one", now),
            campaign_at("b", "two", now),
            campaign_at("c", "three", now),
            campaign_at("d", "four", now),
        ];
        campaigns[0].tag = Some("FinTech".to_string());
        campaigns[1].tag = Some("FinTech".to_string());
        campaigns[2].tag = Some("HealthTech".to_string());
        campaigns[3].tag = Some("  ".to_string());
        assert_eq!(distinct_tag_count(&campaigns), 2);
    }
}
