use super::{
    create_test_storage, insert_frequency, insert_illustration, insert_name, insert_species,
};

#[test]
fn empty_store_yields_zero_counts() {
    let (storage, _temp_dir) = create_test_storage();

    let stats = storage.get_statistics().unwrap();

    assert_eq!(stats.species_count, 0);
    assert_eq!(stats.illustrations_count, 0);
    assert_eq!(stats.names_count, 0);
    assert_eq!(stats.frequency_count, 0);
    assert!(stats.species_by_type.is_empty());
    assert_eq!(stats.species_with_illustrations, 0);
    assert_eq!(stats.species_with_names, 0);
}

#[test]
fn counts_and_distribution() {
    let (storage, _temp_dir) = create_test_storage();
    insert_species(&storage, "House Sparrow", "bird");
    insert_species(&storage, "Common Myna", "bird");
    insert_species(&storage, "Mystery Warbler", "warbler");
    insert_frequency(&storage, "House Sparrow", "Mizoram", "Aizawl", 1);
    insert_illustration(&storage, "House Sparrow", true);
    insert_name(&storage, "House Sparrow", "Hindi", "Gauraiya");
    insert_name(&storage, "House Sparrow", "Mizo", "Chawngzawng");

    let stats = storage.get_statistics().unwrap();

    assert_eq!(stats.species_count, 3);
    assert_eq!(stats.frequency_count, 1);
    assert_eq!(stats.names_count, 2);
    assert_eq!(stats.species_by_type["bird"], 2);
    assert_eq!(stats.species_by_type["warbler"], 1);
    // distinct species, not raw row counts
    assert_eq!(stats.species_with_illustrations, 1);
    assert_eq!(stats.species_with_names, 1);
}

#[test]
fn multiple_illustrations_count_species_once() {
    let (storage, _temp_dir) = create_test_storage();
    insert_species(&storage, "House Sparrow", "bird");
    insert_illustration(&storage, "House Sparrow", true);
    insert_illustration(&storage, "House Sparrow", false);

    let stats = storage.get_statistics().unwrap();

    assert_eq!(stats.illustrations_count, 2);
    assert_eq!(stats.species_with_illustrations, 1);
}
