use super::{
    create_test_storage, insert_frequency, insert_illustration, insert_name, insert_species,
};
use crate::StorageError;

#[test]
fn list_species_ordered_by_name() {
    let (storage, _temp_dir) = create_test_storage();
    insert_species(&storage, "Pied Kingfisher", "bird");
    insert_species(&storage, "Black Drongo", "bird");

    let species = storage.list_species().unwrap();

    assert_eq!(species.len(), 2);
    assert_eq!(species[0].english_name, "Black Drongo");
    assert_eq!(species[1].english_name, "Pied Kingfisher");
}

#[test]
fn get_species_unknown_name_is_not_found() {
    let (storage, _temp_dir) = create_test_storage();

    let err = storage.get_species("Dodo").unwrap_err();

    assert!(matches!(err, StorageError::NotFound { entity: "species", .. }));
}

#[test]
fn get_species_returns_attributes() {
    let (storage, _temp_dir) = create_test_storage();
    insert_species(&storage, "House Sparrow", "bird");

    let species = storage.get_species("House Sparrow").unwrap();

    assert_eq!(species.english_name, "House Sparrow");
    assert_eq!(species.category, "bird");
    assert_eq!(species.taxa, "birds");
}

#[test]
fn illustrations_batch_includes_non_default() {
    let (storage, _temp_dir) = create_test_storage();
    insert_species(&storage, "House Sparrow", "bird");
    insert_illustration(&storage, "House Sparrow", true);
    insert_illustration(&storage, "House Sparrow", false);

    let by_species =
        storage.get_illustrations_for_species(&["House Sparrow".to_owned()]).unwrap();

    let illustrations = &by_species["House Sparrow"];
    assert_eq!(illustrations.len(), 2);
    assert!(illustrations[0].is_default);
    assert!(!illustrations[1].is_default);
}

#[test]
fn illustration_details_carry_tag_fields() {
    let (storage, _temp_dir) = create_test_storage();
    insert_species(&storage, "House Sparrow", "bird");
    insert_illustration(&storage, "House Sparrow", true);

    let details = storage.get_illustration_details("House Sparrow").unwrap();

    assert_eq!(details.len(), 1);
    assert_eq!(details[0].image_name, "House Sparrow.jpg");
    assert!(details[0].sex.is_none());
}

#[test]
fn frequency_history_spans_regions() {
    let (storage, _temp_dir) = create_test_storage();
    insert_species(&storage, "House Sparrow", "bird");
    insert_frequency(&storage, "House Sparrow", "Mizoram", "Aizawl", 1);
    insert_frequency(&storage, "House Sparrow", "Assam", "Statewide", 4);

    let history = storage.get_frequency_for_species("House Sparrow").unwrap();

    assert_eq!(history.len(), 2);
    assert_eq!(history[0].state, "Assam");
    assert_eq!(history[1].district.as_deref(), Some("Aizawl"));
}

#[test]
fn names_lookup_for_species_without_rows_is_absent() {
    let (storage, _temp_dir) = create_test_storage();
    insert_species(&storage, "House Sparrow", "bird");
    insert_species(&storage, "Indian Robin", "bird");
    insert_name(&storage, "House Sparrow", "Hindi", "Gauraiya");

    let names = storage
        .get_names_for_species(&["House Sparrow".to_owned(), "Indian Robin".to_owned()])
        .unwrap();

    assert!(names.contains_key("House Sparrow"));
    assert!(!names.contains_key("Indian Robin"));
}
