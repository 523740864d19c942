//! End-to-end session behavior over in-memory and file-backed stores

use nutrition_tracker::store::{FileStore, KeyValueStore, MemoryStore, FOODS_KEY};
use nutrition_tracker::tracker::{Action, Effect, Field, Mode, Nutrient, Requirements, Session};
use tempfile::tempdir;

fn add<S: KeyValueStore>(session: &mut Session<S>, name: &str, amount: &str, cal: &str, prot: &str) {
    for (field, value) in [
        (Field::Name, name),
        (Field::Amount, amount),
        (Field::CaloriesPerGm, cal),
        (Field::ProteinsPerGm, prot),
    ] {
        session
            .dispatch(Action::FieldChanged {
                field,
                value: value.to_string(),
            })
            .unwrap();
    }
    assert_eq!(session.dispatch(Action::Submit).unwrap(), Effect::SaveFoods);
}

#[test]
fn rice_example() {
    let mut session = Session::open(MemoryStore::new(), Requirements::default());
    add(&mut session, "Rice", "150", "1.3", "0.027");

    let rice = &session.foods()[0];
    assert_eq!(rice.total_calories, rice.amount * rice.calories_per_gm);
    assert_eq!(rice.total_proteins, rice.amount * rice.proteins_per_gm);
    assert_eq!(format!("{:.2}", rice.total_calories), "195.00");
    assert_eq!(format!("{:.2}", rice.total_proteins), "4.05");

    assert_eq!(session.chart(Nutrient::Calories).upper_bound, 2000.0);
}

#[test]
fn over_requirement_extends_axis() {
    let mut session = Session::open(MemoryStore::new(), Requirements::default());
    add(&mut session, "Pasta", "500", "3", "0.1");
    add(&mut session, "Cake", "250", "4", "0.05");

    let chart = session.chart(Nutrient::Calories);
    assert_eq!(chart.upper_bound, 2500.0);
    assert!(chart.requirement > 0.0 && chart.requirement < chart.upper_bound);
}

#[test]
fn incomplete_submit_changes_nothing() {
    let store = MemoryStore::new();
    let mut session = Session::open(store.clone(), Requirements::default());
    add(&mut session, "Rice", "150", "1.3", "0.027");

    session
        .dispatch(Action::FieldChanged {
            field: Field::Name,
            value: "Egg".to_string(),
        })
        .unwrap();
    let before = session.state().clone();
    let stored_before = store.get(FOODS_KEY).unwrap();

    assert_eq!(session.dispatch(Action::Submit).unwrap(), Effect::None);
    assert_eq!(session.state(), &before);
    assert_eq!(store.get(FOODS_KEY).unwrap(), stored_before);
}

#[test]
fn reload_round_trip() {
    let store = MemoryStore::new();
    let mut session = Session::open(store.clone(), Requirements::default());
    add(&mut session, "Rice", "150", "1.3", "0.027");
    add(&mut session, "Egg", "50", "1.55", "0.13");
    let before = session.foods().to_vec();
    drop(session);

    let reloaded = Session::open(store, Requirements::default());
    assert_eq!(reloaded.foods(), before.as_slice());
}

#[test]
fn clear_all_then_reload_is_empty() {
    let dir = tempdir().unwrap();
    let mut session = Session::open(FileStore::new(dir.path()), Requirements::default());
    add(&mut session, "Rice", "150", "1.3", "0.027");
    assert!(dir.path().join("foods.json").exists());

    assert_eq!(session.dispatch(Action::ClearAll).unwrap(), Effect::PurgeStore);
    assert!(session.foods().is_empty());
    assert!(!dir.path().join("foods.json").exists());

    let reloaded = Session::open(FileStore::new(dir.path()), Requirements::default());
    assert!(reloaded.foods().is_empty());
}

#[test]
fn edit_replaces_position_and_persists() {
    let store = MemoryStore::new();
    let mut session = Session::open(store.clone(), Requirements::default());
    add(&mut session, "Rice", "150", "1.3", "0.027");
    add(&mut session, "Egg", "50", "1.55", "0.13");
    add(&mut session, "Milk", "200", "0.42", "0.034");
    let before = session.foods().to_vec();

    session.edit_row(2).unwrap();
    assert_eq!(session.state().mode(), Mode::Editing(1));
    assert_eq!(session.state().submit_label(), "Update Entry");
    session.change_field("name", "Boiled egg").unwrap();
    session.change_field("amount", "60").unwrap();
    assert_eq!(session.dispatch(Action::Submit).unwrap(), Effect::SaveFoods);

    let after = session.foods();
    assert_eq!(after.len(), 3);
    assert_eq!(after[0], before[0]);
    assert_eq!(after[2], before[2]);
    assert_eq!(after[1].id, before[1].id);
    assert_eq!(after[1].name, "Boiled egg");
    assert_eq!(after[1].total_calories, 60.0 * 1.55);
    assert_eq!(session.state().mode(), Mode::Idle);

    let reloaded = Session::open(store, Requirements::default());
    assert_eq!(reloaded.foods(), after);
}

#[test]
fn corrupt_store_starts_empty() {
    let store = MemoryStore::new();
    store.set(FOODS_KEY, "[{\"id\": 42}").unwrap();

    let mut session = Session::open(store.clone(), Requirements::default());
    assert!(session.foods().is_empty());

    // The next change overwrites the corrupt value
    add(&mut session, "Rice", "150", "1.3", "0.027");
    let reloaded = Session::open(store, Requirements::default());
    assert_eq!(reloaded.foods().len(), 1);
}
