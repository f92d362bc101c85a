use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::registry::Registry;
use crate::store::DataStore;
use tracing::info;

/// Replaces the registry with the stored collection. On any failure the
/// registry keeps its current contents.
pub fn run<S: DataStore>(registry: &mut Registry, store: &S) -> Result<CmdResult> {
    let animals = store.load()?;
    registry.replace_all(animals)?;
    info!(
        count = registry.len(),
        next_id = registry.next_id(),
        "registry loaded"
    );

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Loaded {} animal(s) from {}",
        registry.len(),
        store.location().display()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::save;
    use crate::error::KennelError;
    use crate::model::AnimalKind;
    use crate::registry::fixtures::{menagerie, new_animal};
    use crate::store::memory::InMemoryStore;

    #[test]
    fn round_trip_restores_records_and_counter() {
        let mut original = menagerie();
        original.remove(6).unwrap();
        original.train(2, "purr").unwrap();

        let mut store = InMemoryStore::new();
        save::run(&original, &mut store).unwrap();

        let mut restored = Registry::new();
        run(&mut restored, &store).unwrap();

        assert_eq!(restored.len(), original.len());
        assert_eq!(restored.next_id(), 6);
        for (a, b) in original.iter().zip(restored.iter()) {
            assert_eq!(a.id(), b.id());
            assert_eq!(a.kind(), b.kind());
            assert_eq!(a.name, b.name);
            assert_eq!(a.birth_date, b.birth_date);
            assert_eq!(a.commands, b.commands);
        }
    }

    #[test]
    fn next_add_after_load_continues_after_max_id() {
        let mut original = menagerie();
        original.remove(1).unwrap();
        let mut store = InMemoryStore::new();
        save::run(&original, &mut store).unwrap();

        let mut restored = Registry::new();
        run(&mut restored, &store).unwrap();
        let added = restored
            .add(new_animal(AnimalKind::Cat, "Kit", "2024-01-01", &[]), false)
            .unwrap();
        assert_eq!(added.id(), 7);
    }

    #[test]
    fn missing_data_leaves_registry_alone() {
        let mut registry = menagerie();
        let err = run(&mut registry, &InMemoryStore::new()).unwrap_err();
        assert!(matches!(err, KennelError::Io(_)));
        assert_eq!(registry.len(), 6);
    }

    #[test]
    fn corrupt_data_leaves_registry_alone() {
        let mut registry = menagerie();
        let store = InMemoryStore::with_raw(r#"[{"id": 1, "kind": "lizard"}]"#);
        let err = run(&mut registry, &store).unwrap_err();
        assert!(matches!(err, KennelError::CorruptData(_)));
        assert_eq!(registry.len(), 6);
        assert_eq!(registry.next_id(), 7);
    }

    #[test]
    fn loading_empty_collection_resets_counter() {
        let mut store = InMemoryStore::new();
        save::run(&Registry::new(), &mut store).unwrap();

        let mut registry = menagerie();
        run(&mut registry, &store).unwrap();
        assert!(registry.is_empty());
        assert_eq!(registry.next_id(), 1);
    }
}
