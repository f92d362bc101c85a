use crate::commands::CmdResult;
use crate::error::Result;
use crate::registry::Registry;

/// All animals, oldest first.
pub fn run(registry: &Registry) -> Result<CmdResult> {
    let listed = registry.sorted_by_birth_date().cloned().collect();
    Ok(CmdResult::default().with_listed_animals(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::fixtures::menagerie;

    #[test]
    fn lists_oldest_first() {
        let registry = menagerie();
        let result = run(&registry).unwrap();
        let names: Vec<&str> = result.listed_animals.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Sahara", "Bolt", "Eeyore", "Tom", "Rex", "Chip"]);
    }

    #[test]
    fn empty_registry_lists_nothing() {
        let result = run(&Registry::new()).unwrap();
        assert!(result.listed_animals.is_empty());
    }
}
