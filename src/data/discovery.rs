//! Phase discovery.

use pduwatch_types::Section;

/// Service name template for a discovered phase.
pub const SERVICE_NAME: &str = "Phase %s";

/// One item per phase in the section, in section order.
///
/// Phases without measurements are still discovered.
pub fn discover(section: &Section) -> Vec<String> {
    section.items().map(str::to_string).collect()
}

/// Name under which an item is shown, e.g. `Phase 1`.
pub fn service_name(item: &str) -> String {
    SERVICE_NAME.replace("%s", item)
}
