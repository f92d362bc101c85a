use chrono::NaiveDate;
use kennel::api::{KennelApi, KennelPaths};
use kennel::error::KennelError;
use kennel::model::{AnimalKind, NewAnimal};
use kennel::store::fs::FileStore;
use kennel::store::DataStore;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn api_at(dir: &Path, file: &str) -> KennelApi<FileStore> {
    let data_file = dir.join(file);
    let paths = KennelPaths {
        data_dir: dir.to_path_buf(),
        data_file: data_file.clone(),
    };
    KennelApi::new(FileStore::new(data_file), paths)
}

fn seed(api: &mut KennelApi<FileStore>) {
    let animals = [
        (AnimalKind::Dog, "Rex", "2020-01-01", vec!["sit", "stay"]),
        (AnimalKind::Camel, "Sahara", "2012-11-30", vec!["kneel"]),
        (AnimalKind::Hamster, "Chip", "2023-02-14", vec![]),
    ];
    for (kind, name, born, commands) in animals {
        api.add_animal(
            NewAnimal::new(kind, name, date(born)).with_commands(commands),
            false,
        )
        .unwrap();
    }
}

#[test]
fn save_and_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let mut writer = api_at(dir.path(), "animals.json");
    seed(&mut writer);
    writer.delete_animal(2).unwrap();
    writer.save().unwrap();

    let mut reader = api_at(dir.path(), "animals.json");
    reader.load().unwrap();

    let registry = reader.registry();
    assert_eq!(registry.len(), 2);
    let rex = registry.find(1).unwrap();
    assert_eq!(rex.kind(), AnimalKind::Dog);
    assert_eq!(rex.birth_date, date("2020-01-01"));
    assert_eq!(rex.commands, vec!["sit", "stay"]);
    assert!(registry.find(3).unwrap().commands.is_empty());
    assert!(registry.find(2).is_err());
}

#[test]
fn counter_moves_past_loaded_ids() {
    let dir = TempDir::new().unwrap();
    let mut writer = api_at(dir.path(), "animals.json");
    seed(&mut writer);
    writer.delete_animal(3).unwrap();
    writer.save().unwrap();

    let mut reader = api_at(dir.path(), "animals.json");
    reader.load().unwrap();
    assert_eq!(reader.registry().next_id(), 3);

    let added = reader
        .add_animal(
            NewAnimal::new(AnimalKind::Donkey, "Eeyore", date("2018-03-03")),
            false,
        )
        .unwrap();
    assert_eq!(added.affected_animals[0].id(), 3);
}

#[test]
fn file_is_a_json_array_of_records() {
    let dir = TempDir::new().unwrap();
    let mut api = api_at(dir.path(), "animals.json");
    seed(&mut api);
    api.save().unwrap();

    let content = fs::read_to_string(dir.path().join("animals.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    let records = value.as_array().unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["id"], 1);
    assert_eq!(records[0]["kind"], "dog");
    assert_eq!(records[0]["birth_date"], "2020-01-01");
    assert_eq!(records[1]["kind"], "camel");
}

#[test]
fn save_creates_missing_directories_and_leaves_no_temp_files() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("a").join("b");
    let mut api = api_at(&nested, "animals.json");
    seed(&mut api);
    api.save().unwrap();
    api.save().unwrap();

    let names: Vec<String> = fs::read_dir(&nested)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["animals.json"]);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().join("nope.json"));
    assert!(matches!(store.load(), Err(KennelError::Io(_))));

    let mut api = api_at(dir.path(), "nope.json");
    assert!(!api.load_if_present().unwrap());
}

#[test]
fn corrupt_file_leaves_registry_untouched() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("broken.json"), "[{\"id\": 1, \"kind\": \"lizard\"").unwrap();

    let mut api = api_at(dir.path(), "broken.json");
    seed(&mut api);

    let err = api.load().unwrap_err();
    assert!(matches!(err, KennelError::CorruptData(_)));
    assert_eq!(api.registry().len(), 3);
    assert_eq!(api.registry().next_id(), 4);
}

#[test]
fn repeated_ids_are_rejected() {
    let dir = TempDir::new().unwrap();
    let record = r#"{"id": 7, "kind": "cat", "name": "Tom", "birth_date": "2019-05-20", "commands": []}"#;
    fs::write(
        dir.path().join("animals.json"),
        format!("[{}, {}]", record, record),
    )
    .unwrap();

    let mut api = api_at(dir.path(), "animals.json");
    assert!(matches!(api.load(), Err(KennelError::CorruptData(_))));
    assert!(api.registry().is_empty());
}

#[test]
fn id_without_successor_is_corrupt() {
    let dir = TempDir::new().unwrap();
    let record = format!(
        r#"[{{"id": {}, "kind": "cat", "name": "Tom", "birth_date": "2019-05-20", "commands": []}}]"#,
        u64::MAX
    );
    fs::write(dir.path().join("animals.json"), record).unwrap();

    let mut api = api_at(dir.path(), "animals.json");
    seed(&mut api);
    assert!(matches!(api.load(), Err(KennelError::CorruptData(_))));
    assert_eq!(api.registry().len(), 3);
    assert_eq!(api.registry().next_id(), 4);
}

#[test]
fn failed_save_leaves_no_temp_files() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("animals.json")).unwrap();
    fs::write(dir.path().join("animals.json").join("keep"), "").unwrap();

    let mut api = api_at(dir.path(), "animals.json");
    seed(&mut api);
    assert!(matches!(api.save(), Err(KennelError::Io(_))));

    let names: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["animals.json"]);
}
