use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::registry::Registry;
use crate::store::DataStore;

pub fn run<S: DataStore>(registry: &Registry, store: &mut S) -> Result<CmdResult> {
    store.save(registry.as_slice())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Saved {} animal(s) to {}",
        registry.len(),
        store.location().display()
    )));
    Ok(result)
}
