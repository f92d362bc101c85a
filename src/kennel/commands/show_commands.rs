use crate::commands::CmdResult;
use crate::error::Result;
use crate::registry::Registry;

/// The commands an animal knows, in the order it learned them.
pub fn run(registry: &Registry, id: u64) -> Result<CmdResult> {
    let animal = registry.find(id)?;
    Ok(CmdResult::default()
        .with_commands(animal.commands.clone())
        .with_listed_animals(vec![animal.clone()]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KennelError;
    use crate::registry::fixtures::menagerie;

    #[test]
    fn lists_commands_in_learning_order() {
        let mut registry = menagerie();
        registry.train(1, "fetch").unwrap();
        let result = run(&registry, 1).unwrap();
        assert_eq!(result.commands, vec!["sit", "stay", "fetch"]);
        assert!(!result.is_mutation());
    }

    #[test]
    fn unknown_id() {
        let registry = menagerie();
        assert!(matches!(run(&registry, 77), Err(KennelError::NotFound(77))));
    }
}
