use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::registry::{AnimalUpdate, Registry};

pub fn run(registry: &mut Registry, id: u64, update: AnimalUpdate) -> Result<CmdResult> {
    let animal = registry.edit(id, update)?.clone();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Animal updated ({}): {} {}",
        id,
        animal.type_label(),
        animal.name
    )));
    result.affected_animals.push(animal);
    Ok(result)
}
