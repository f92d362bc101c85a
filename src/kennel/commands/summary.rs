use crate::commands::CmdResult;
use crate::error::Result;
use crate::registry::Registry;

/// Head counts per category and kind, plus every animal in registry order so
/// the UI can group them.
pub fn run(registry: &Registry) -> Result<CmdResult> {
    Ok(CmdResult::default()
        .with_counts(registry.count_by_category())
        .with_listed_animals(registry.iter().cloned().collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AnimalKind;
    use crate::registry::fixtures::{menagerie, new_animal};

    #[test]
    fn counts_by_category_and_kind() {
        let mut registry = menagerie();
        registry
            .add(new_animal(AnimalKind::Dog, "Ace", "2011-01-01", &[]), false)
            .unwrap();

        let result = run(&registry).unwrap();
        let counts = result.counts.unwrap();
        assert_eq!(counts.total, 7);
        assert_eq!(counts.pets, 4);
        assert_eq!(counts.pack_animals, 3);
        assert_eq!(counts.kind(AnimalKind::Dog), 2);
        assert_eq!(result.listed_animals.len(), 7);
    }

    #[test]
    fn empty_registry() {
        let result = run(&Registry::new()).unwrap();
        let counts = result.counts.unwrap();
        assert_eq!(counts.total, 0);
        assert!(counts.by_kind.values().all(|n| *n == 0));
    }
}
