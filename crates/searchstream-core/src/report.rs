use rand::Rng;
use std::ops::RangeInclusive;

use crate::dates::DateRange;
use crate::googleads::{
    Campaign, ChannelType, Customer, Metrics, SearchResult, SearchStreamResponse, Segments,
};

pub const CLICKS: RangeInclusive<u64> = 0..=100;
pub const COST_MICROS: RangeInclusive<u64> = 1_000..=1_000_000;
pub const IMPRESSIONS: RangeInclusive<u64> = 0..=2_000;

pub const CURRENCY_CODE: &str = "EUR";
pub const FIELD_MASK: &str = "mock field mask";
pub const REQUEST_ID: &str = "mock request id";

/// Campaigns every report contains, in output order: id, channel, and the
/// label appended to `customer {id}` to form the name. Only the first label
/// carries a leading space; clients match on the exact names.
pub const MOCK_CAMPAIGNS: [(&str, ChannelType, &str); 4] = [
    ("14344919920", ChannelType::Display, " Mock Campaign 1"),
    ("14344919921", ChannelType::Search, "Mock Campaign 2"),
    ("143449199212", ChannelType::Search, "Mock Campaign 3"),
    ("14344919923", ChannelType::Display, "Mock Campaign 4"),
];

pub fn random_metrics<R: Rng + ?Sized>(rng: &mut R) -> Metrics {
    Metrics {
        clicks: rng.gen_range(CLICKS),
        cost_micros: rng.gen_range(COST_MICROS),
        impressions: rng.gen_range(IMPRESSIONS),
    }
}

/// Builds the mock report for `customer_id`. Every row is dated with the
/// range's end; the start only matters to the caller's query.
pub fn build_report<R: Rng + ?Sized>(
    customer_id: &str,
    range: &DateRange<'_>,
    rng: &mut R,
) -> SearchStreamResponse {
    let customer_resource = format!("customers/{}", customer_id);
    let results = MOCK_CAMPAIGNS
        .iter()
        .map(|(campaign_id, channel, label)| SearchResult {
            campaign: Campaign {
                resource_name: format!("{}/campaigns/{}", customer_resource, campaign_id),
                advertising_channel_type: *channel,
                name: format!("customer {}{}", customer_id, label),
                id: customer_id.to_string(),
            },
            metrics: random_metrics(rng),
            segments: Segments {
                date: range.end.to_string(),
            },
            customer: Customer {
                resource_name: customer_resource.clone(),
                currency_code: CURRENCY_CODE.to_string(),
            },
        })
        .collect();

    SearchStreamResponse {
        results,
        field_mask: FIELD_MASK.to_string(),
        request_id: REQUEST_ID.to_string(),
    }
}
