use dao_core::EntityKind;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `dao kinds`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&kind_names(), flags.format)
}

fn kind_names() -> Vec<&'static str> {
    EntityKind::ALL.iter().map(|kind| kind.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::kind_names;

    #[test]
    fn lists_every_kind_once() {
        let names = kind_names();
        assert!(names.contains(&"place_status"));
        assert!(names.contains(&"base_object"));
        let mut unique = names.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), names.len());
    }
}
