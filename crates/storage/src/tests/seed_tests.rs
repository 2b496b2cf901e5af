use super::{create_test_storage, insert_species};

#[test]
fn seed_populates_empty_store() {
    let (storage, _temp_dir) = create_test_storage();

    let report = storage.seed_sample_data().unwrap();

    assert!(!report.already_populated);
    assert_eq!(report.species, 10);
    assert_eq!(report.frequency_records, 15);
    assert_eq!(report.illustrations, 5);

    let stats = storage.get_statistics().unwrap();
    assert_eq!(stats.species_count, 10);
    assert_eq!(stats.species_with_illustrations, 5);
}

#[test]
fn seed_is_noop_on_populated_store() {
    let (storage, _temp_dir) = create_test_storage();
    insert_species(&storage, "House Sparrow", "bird");

    let report = storage.seed_sample_data().unwrap();

    assert!(report.already_populated);
    assert_eq!(report.species, 1);

    let stats = storage.get_statistics().unwrap();
    assert_eq!(stats.species_count, 1);
}

#[test]
fn seeded_region_query_returns_aizawl_birds_by_rank() {
    let (storage, _temp_dir) = create_test_storage();
    storage.seed_sample_data().unwrap();

    let rows = storage.get_region_birds("Mizoram", Some("Aizawl")).unwrap();

    assert_eq!(rows.len(), 10);
    assert_eq!(rows[0].english_name, "House Sparrow");
    assert_eq!(rows[0].frequency_rank, 1);
    assert!(rows.windows(2).all(|w| w[0].frequency_rank <= w[1].frequency_rank));
}
