use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::AnimalKind;
use crate::registry::Registry;

pub fn run(registry: &Registry, kind: AnimalKind) -> Result<CmdResult> {
    let listed = registry.filter_by_kind(kind).cloned().collect();
    Ok(CmdResult::default().with_listed_animals(listed))
}
