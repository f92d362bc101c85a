use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::registry::Registry;

pub fn run(registry: &mut Registry, id: u64) -> Result<CmdResult> {
    let animal = registry.remove(id)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Animal deleted ({}): {} {}",
        id,
        animal.type_label(),
        animal.name
    )));
    result.affected_animals.push(animal);
    Ok(result)
}
