// Integration tests for the doctor directory: add, update, list and search.

mod common;

use common::setup_store;
use medical_booking::{
    add_doctor, find_doctor, list_doctors, update_doctor, DoctorInput, Specialty, Store,
    DEFAULT_IMAGE_URL,
};

fn input(name: &str, specialty: Specialty, rating: f64, image_url: &str) -> DoctorInput {
    DoctorInput {
        name: name.to_string(),
        specialty,
        rating,
        image_url: image_url.to_string(),
    }
}

fn seed(store: &Store) {
    add_doctor(store, &input("Dr. Sara Khalil", Specialty::Dentistry, 4.8, "")).unwrap();
    add_doctor(store, &input("Dr. Hana Derman", Specialty::Surgery, 4.1, "")).unwrap();
    add_doctor(
        store,
        &input("Dr. Youssef Adel", Specialty::InternalMedicine, 3.9, ""),
    )
    .unwrap();
}

#[test]
fn add_with_blank_image_stores_placeholder() {
    let (_tmp, store) = setup_store();

    let doctor = add_doctor(&store, &input("Dr. Sara Khalil", Specialty::Dentistry, 4.5, "")).unwrap();

    assert_eq!(doctor.image_url, DEFAULT_IMAGE_URL);
    let stored = find_doctor(&store, doctor.id).unwrap().unwrap();
    assert_eq!(stored.image_url, DEFAULT_IMAGE_URL);
    assert_eq!(stored.name, "Dr. Sara Khalil");
    assert_eq!(stored.specialty, Specialty::Dentistry);
    assert_eq!(stored.rating, 4.5);
}

#[test]
fn add_with_image_stores_it_verbatim() {
    let (_tmp, store) = setup_store();
    let url = "https://example.org/portraits/khalil.png?size=large";

    let doctor = add_doctor(&store, &input("Dr. Sara Khalil", Specialty::Dentistry, 4.5, url)).unwrap();

    assert_eq!(find_doctor(&store, doctor.id).unwrap().unwrap().image_url, url);
}

#[test]
fn update_overwrites_only_the_target_record() {
    let (_tmp, store) = setup_store();
    seed(&store);
    let before = list_doctors(&store, None).unwrap();
    let target = before[1].id;

    let updated = update_doctor(
        &store,
        target,
        &input(
            "Dr. Hana Derman-Aziz",
            Specialty::Physiotherapy,
            2.3,
            "https://example.org/hana.jpg",
        ),
    )
    .unwrap();
    assert!(updated);

    let after = list_doctors(&store, None).unwrap();
    assert_eq!(after.len(), 3);
    assert_eq!(after[0], before[0]);
    assert_eq!(after[2], before[2]);

    let changed = &after[1];
    assert_eq!(changed.id, target);
    assert_eq!(changed.name, "Dr. Hana Derman-Aziz");
    assert_eq!(changed.specialty, Specialty::Physiotherapy);
    assert_eq!(changed.rating, 2.3);
    assert_eq!(changed.image_url, "https://example.org/hana.jpg");
}

#[test]
fn update_with_blank_image_restores_placeholder() {
    let (_tmp, store) = setup_store();
    let doctor = add_doctor(
        &store,
        &input("Dr. Sara Khalil", Specialty::Dentistry, 4.5, "https://example.org/a.png"),
    )
    .unwrap();

    update_doctor(&store, doctor.id, &input("Dr. Sara Khalil", Specialty::Dentistry, 4.5, "")).unwrap();

    assert_eq!(
        find_doctor(&store, doctor.id).unwrap().unwrap().image_url,
        DEFAULT_IMAGE_URL
    );
}

#[test]
fn update_of_unknown_id_changes_nothing() {
    let (_tmp, store) = setup_store();
    seed(&store);
    let before = list_doctors(&store, None).unwrap();

    let updated = update_doctor(&store, 999, &input("Ghost", Specialty::Surgery, 5.0, "")).unwrap();

    assert!(!updated);
    assert_eq!(list_doctors(&store, None).unwrap(), before);
}

#[test]
fn store_accepts_ratings_outside_slider_range() {
    let (_tmp, store) = setup_store();

    let doctor = add_doctor(&store, &input("Dr. Off Scale", Specialty::Surgery, 7.5, "")).unwrap();
    assert_eq!(find_doctor(&store, doctor.id).unwrap().unwrap().rating, 7.5);

    update_doctor(&store, doctor.id, &input("Dr. Off Scale", Specialty::Surgery, -1.0, "")).unwrap();
    assert_eq!(find_doctor(&store, doctor.id).unwrap().unwrap().rating, -1.0);
}

#[test]
fn empty_filter_returns_all_in_store_order() {
    let (_tmp, store) = setup_store();
    seed(&store);

    let all = list_doctors(&store, None).unwrap();
    let names: Vec<&str> = all.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(
        names,
        ["Dr. Sara Khalil", "Dr. Hana Derman", "Dr. Youssef Adel"]
    );
    assert!(all.windows(2).all(|pair| pair[0].id < pair[1].id));

    assert_eq!(list_doctors(&store, Some("")).unwrap(), all);
}

#[test]
fn filter_matches_name_or_specialty_case_insensitively() {
    let (_tmp, store) = setup_store();
    seed(&store);

    let derm = list_doctors(&store, Some("derm")).unwrap();
    assert_eq!(derm.len(), 1);
    assert_eq!(derm[0].name, "Dr. Hana Derman");

    let medicine = list_doctors(&store, Some("MEDICINE")).unwrap();
    assert_eq!(medicine.len(), 1);
    assert_eq!(medicine[0].specialty, Specialty::InternalMedicine);

    let dr = list_doctors(&store, Some("dr.")).unwrap();
    assert_eq!(dr.len(), 3);

    assert!(list_doctors(&store, Some("cardio")).unwrap().is_empty());
}

#[test]
fn find_unknown_doctor_returns_none() {
    let (_tmp, store) = setup_store();
    assert!(find_doctor(&store, 42).unwrap().is_none());
}

#[test]
fn reopening_the_store_keeps_records() {
    let (tmp, store) = setup_store();
    seed(&store);
    drop(store);

    let reopened = Store::open(tmp.path().join("medical.db")).unwrap();
    assert_eq!(list_doctors(&reopened, None).unwrap().len(), 3);
}

#[test]
fn rows_with_unknown_specialty_are_skipped() {
    let (_tmp, store) = setup_store();
    let surgeon = add_doctor(&store, &input("Dr. Hana Derman", Specialty::Surgery, 4.1, "")).unwrap();
    let conn = store.connect().unwrap();
    conn.execute(
        "INSERT INTO doctors (name, specialty, rating, image_url) VALUES ('Dr. Skin', 'Dermatology', 4.0, '')",
        [],
    )
    .unwrap();
    let stray = conn.last_insert_rowid();

    let all = list_doctors(&store, None).unwrap();
    assert_eq!(all, vec![surgeon.clone()]);
    assert!(list_doctors(&store, Some("skin")).unwrap().is_empty());
    assert!(find_doctor(&store, stray).unwrap().is_none());
    assert_eq!(find_doctor(&store, surgeon.id).unwrap(), Some(surgeon));
}
