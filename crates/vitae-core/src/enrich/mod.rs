//! Deterministic icon enrichment.

mod icons;

pub use icons::{canonical_key, IconTables};

use tracing::debug;

use crate::models::resume::ResumeRecord;

/// Attach icons to every skill and education entry.
///
/// Existing icon values are overwritten, so the result depends only on the
/// names and the tables. Applying it twice is the same as applying it once.
pub fn assign_icons(mut record: ResumeRecord, tables: &IconTables) -> ResumeRecord {
    let mut mapped = 0usize;

    for category in &mut record.skills {
        for skill in &mut category.list {
            skill.icon = tables.skill_icon(&skill.name).to_string();
            mapped += usize::from(!skill.icon.is_empty());
        }
    }

    for entry in &mut record.education {
        entry.icon = tables.education_icon(&entry.name).to_string();
        mapped += usize::from(!entry.icon.is_empty());
    }

    debug_assert!(
        record
            .skills
            .iter()
            .flat_map(|c| c.list.iter().map(|s| s.icon.as_str()))
            .chain(record.education.iter().map(|e| e.icon.as_str()))
            .all(|icon| icon.is_empty() || tables.is_known_icon(icon)),
        "assigned an icon outside the lookup tables"
    );

    debug!(
        "Assigned {} icon(s) across {} skill(s) and {} education entries",
        mapped,
        record.skill_count(),
        record.education.len()
    );

    record
}
