use mend_core::store_keys;

#[test]
fn patient_key_round_trips_id() {
    let key = store_keys::patient("ana_20250301T090000");
    assert_eq!(key, "patients/ana_20250301T090000.json");
    assert_eq!(store_keys::patient_id(&key), Some("ana_20250301T090000"));
    assert_eq!(store_keys::patient_id("other/x.json"), None);
}

#[test]
fn submission_id_uses_encoded_name_and_compact_time() {
    let at = jiff::civil::date(2025, 3, 1).at(14, 5, 9, 0);
    assert_eq!(
        store_keys::submission_id("Ana María", at),
        "Ana%20Mar%C3%ADa_20250301T140509"
    );
}

#[test]
fn plain_names_are_kept_verbatim() {
    assert_eq!(store_keys::imported_id("  Ana_Lee-2 "), "Ana_Lee-2_imported");
    assert_eq!(store_keys::imported_id("Bo/Lee"), "Bo%2FLee_imported");
}

#[test]
fn lookalike_names_get_distinct_ids() {
    let names = ["Ana B", "Ana-B", "Ana.B", "Ana%2EB", "Ana_B"];
    let ids: std::collections::BTreeSet<String> =
        names.iter().map(|n| store_keys::imported_id(n)).collect();
    assert_eq!(ids.len(), names.len());

    let at = jiff::civil::date(2025, 3, 1).at(9, 0, 0, 0);
    assert_ne!(
        store_keys::submission_id("Ana B", at),
        store_keys::submission_id("Ana-B", at)
    );
}
