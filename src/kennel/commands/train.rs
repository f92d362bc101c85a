use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::registry::Registry;

pub fn run(registry: &mut Registry, id: u64, command: &str) -> Result<CmdResult> {
    let animal = registry.train(id, command)?.clone();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{} learned '{}'",
        animal.name,
        command.trim()
    )));
    result.affected_animals.push(animal);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KennelError;
    use crate::registry::fixtures::menagerie;

    #[test]
    fn teaches_new_command() {
        let mut registry = menagerie();
        let result = run(&mut registry, 4, "jump").unwrap();
        assert_eq!(result.affected_animals[0].commands, vec!["trot", "gallop", "jump"]);
        assert!(result.messages[0].content.contains("Bolt learned 'jump'"));
    }

    #[test]
    fn second_time_is_already_known() {
        let mut registry = menagerie();
        run(&mut registry, 4, "jump").unwrap();
        let err = run(&mut registry, 4, "  Jump").unwrap_err();
        assert!(matches!(err, KennelError::AlreadyKnown { id: 4, .. }));
        assert_eq!(registry.find(4).unwrap().commands.len(), 3);
    }
}
