use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NewAnimal;
use crate::registry::Registry;
use tracing::warn;

/// Registers a new animal. Without `allow_duplicate`, an identical animal
/// already in the registry makes this fail with `DuplicateFound`.
pub fn run(registry: &mut Registry, new: NewAnimal, allow_duplicate: bool) -> Result<CmdResult> {
    let animal = registry.add(new, allow_duplicate)?.clone();
    if allow_duplicate
        && registry
            .iter()
            .any(|a| a.id() != animal.id() && a.is_duplicate_of(&animal))
    {
        warn!(id = animal.id(), "registered a duplicate animal");
    }

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Animal added ({}): {} {}",
        animal.id(),
        animal.type_label(),
        animal.name
    )));
    result.affected_animals.push(animal);
    Ok(result)
}
