use chrono::NaiveDateTime;
use crate::helpers::timestamps::parse_timestamp;
use crate::structs::resource_inventory::ResourceInventory;
use crate::structs::resource_record::ResourceRecord;

/// Derives "most recent activity" from an inventory: the maximum
/// parseable timestamp across every resource in every category.
pub struct ActivityExtractor;

impl ActivityExtractor {
    pub fn last_activity(inventory: &ResourceInventory) -> Option<NaiveDateTime> {
        inventory.iter_records().filter_map(Self::record_timestamp).max()
    }

    /// First timestamp field on the record that actually parses, in
    /// schema priority order. Malformed fields are skipped silently; a
    /// record where nothing parses contributes no timestamp at all.
    fn record_timestamp(record: &ResourceRecord) -> Option<NaiveDateTime> {
        record
            .timestamp_candidates()
            .find_map(|raw| parse_timestamp(raw).ok())
    }
}
