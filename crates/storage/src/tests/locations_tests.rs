use super::{create_test_storage, insert_frequency, insert_species};

#[test]
fn empty_store_has_no_locations() {
    let (storage, _temp_dir) = create_test_storage();

    let locations = storage.get_locations().unwrap();

    assert!(locations.states.is_empty());
    assert!(locations.districts.is_empty());
}

#[test]
fn distinct_states_and_districts() {
    let (storage, _temp_dir) = create_test_storage();
    insert_species(&storage, "House Sparrow", "bird");
    insert_frequency(&storage, "House Sparrow", "Mizoram", "Aizawl", 1);
    insert_frequency(&storage, "House Sparrow", "Mizoram", "Lunglei", 2);
    insert_frequency(&storage, "House Sparrow", "Assam", "Statewide", 3);

    let locations = storage.get_locations().unwrap();

    assert_eq!(locations.states, vec!["Assam", "Mizoram"]);
    assert_eq!(locations.districts["Mizoram"], vec!["Aizawl", "Lunglei"]);
    assert_eq!(locations.districts["Assam"], vec!["Statewide"]);
}

#[test]
fn duplicate_rows_collapse_to_distinct_values() {
    let (storage, _temp_dir) = create_test_storage();
    insert_species(&storage, "House Sparrow", "bird");
    insert_species(&storage, "Common Myna", "bird");
    insert_frequency(&storage, "House Sparrow", "Mizoram", "Aizawl", 1);
    insert_frequency(&storage, "Common Myna", "Mizoram", "Aizawl", 2);

    let locations = storage.get_locations().unwrap();

    assert_eq!(locations.states, vec!["Mizoram"]);
    assert_eq!(locations.districts["Mizoram"], vec!["Aizawl"]);
}
