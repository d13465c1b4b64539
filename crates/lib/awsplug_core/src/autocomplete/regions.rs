//! Static region table and the region autocomplete.

use super::{AutocompleteError, AutocompleteItem, filter_items_by_query};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub id: &'static str,
    pub label: &'static str,
}

const fn region(id: &'static str, label: &'static str) -> Region {
    Region { id, label }
}

pub static ALL_AWS_REGIONS: &[Region] = &[
    region("us-east-1", "US East (N. Virginia)"),
    region("us-east-2", "US East (Ohio)"),
    region("us-west-1", "US West (N. California)"),
    region("us-west-2", "US West (Oregon)"),
    region("af-south-1", "Africa (Cape Town)"),
    region("ap-east-1", "Asia Pacific (Hong Kong)"),
    region("ap-south-1", "Asia Pacific (Mumbai)"),
    region("ap-south-2", "Asia Pacific (Hyderabad)"),
    region("ap-southeast-1", "Asia Pacific (Singapore)"),
    region("ap-southeast-2", "Asia Pacific (Sydney)"),
    region("ap-southeast-3", "Asia Pacific (Jakarta)"),
    region("ap-southeast-4", "Asia Pacific (Melbourne)"),
    region("ap-northeast-1", "Asia Pacific (Tokyo)"),
    region("ap-northeast-2", "Asia Pacific (Seoul)"),
    region("ap-northeast-3", "Asia Pacific (Osaka)"),
    region("ca-central-1", "Canada (Central)"),
    region("ca-west-1", "Canada West (Calgary)"),
    region("cn-north-1", "China (Beijing)"),
    region("eu-central-1", "Europe (Frankfurt)"),
    region("eu-central-2", "Europe (Zurich)"),
    region("eu-west-1", "Europe (Ireland)"),
    region("eu-west-2", "Europe (London)"),
    region("eu-west-3", "Europe (Paris)"),
    region("eu-south-1", "Europe (Milan)"),
    region("eu-south-2", "Europe (Spain)"),
    region("eu-north-1", "Europe (Stockholm)"),
    region("il-central-1", "Israel (Tel Aviv)"),
    region("me-south-1", "Middle East (Bahrain)"),
    region("me-central-1", "Middle East (UAE)"),
    region("sa-east-1", "South America (São Paulo)"),
    region("us-gov-east-1", "AWS GovCloud (US-East)"),
    region("us-gov-west-1", "AWS GovCloud (US-West)"),
];

/// All regions as `"<id> - <label>"` items, filtered by `query`.
pub fn list_regions(query: &str) -> Vec<AutocompleteItem> {
    let items = ALL_AWS_REGIONS
        .iter()
        .map(|r| AutocompleteItem::from_static(r.id, format!("{} - {}", r.id, r.label)))
        .collect();
    filter_items_by_query(items, query)
}

/// Human label for a region id.
pub fn region_label(region_id: &str) -> Result<&'static str, AutocompleteError> {
    ALL_AWS_REGIONS
        .iter()
        .find(|r| r.id == region_id)
        .map(|r| r.label)
        .ok_or_else(|| AutocompleteError::UnknownRegion(region_id.to_string()))
}
