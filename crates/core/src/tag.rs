use crate::version::VersionRecord;

/// Strip the `v` prefix source-control tags usually carry
///
/// Converts "v1.2.3" to "1.2.3", leaves "1.2.3" unchanged
pub fn strip_tag_prefix(tag: &str) -> &str {
    tag.trim_start_matches(['v', 'V'])
}

/// Compare versions - returns true if current >= latest
///
/// Compares the numeric core (major, minor, patch, build number) left to
/// right. Qualifiers are labels, not ordering information, and are ignored.
pub fn is_up_to_date(current: &VersionRecord, latest: &VersionRecord) -> bool {
    numeric_core(current) >= numeric_core(latest)
}

fn numeric_core(version: &VersionRecord) -> (u32, u32, u32, u64) {
    (
        version.major(),
        version.minor(),
        version.patch(),
        version.build_number(),
    )
}
