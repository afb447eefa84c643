// Integration tests for registration and login.

mod common;

use common::setup_store;
use medical_booking::auth::MAX_PASSWORD_BYTES;
use medical_booking::error::ValidationError;
use medical_booking::{login, logout, register, Session};

#[test]
fn register_then_login_round_trip() {
    let (_tmp, store) = setup_store();
    let mut session = Session::new();

    assert!(register(&store, "a@x.com", "pw1").unwrap());
    assert!(login(&store, &mut session, "a@x.com", "pw1").unwrap());
    assert!(session.is_logged_in());
    assert_eq!(session.user(), Some("a@x.com"));
}

#[test]
fn duplicate_email_is_rejected() {
    let (_tmp, store) = setup_store();

    assert!(register(&store, "a@x.com", "pw1").unwrap());
    assert!(!register(&store, "a@x.com", "pw2").unwrap());
    assert!(!register(&store, "a@x.com", "pw1").unwrap());

    // The first password still works, the second was never stored.
    let mut session = Session::new();
    assert!(login(&store, &mut session, "a@x.com", "pw1").unwrap());
    let mut other = Session::new();
    assert!(!login(&store, &mut other, "a@x.com", "pw2").unwrap());
}

#[test]
fn wrong_and_near_miss_passwords_fail() {
    let (_tmp, store) = setup_store();
    register(&store, "a@x.com", "pw1").unwrap();

    for attempt in ["wrong", "pw1 ", " pw1", "PW1", "pw", ""] {
        let mut session = Session::new();
        assert!(
            !login(&store, &mut session, "a@x.com", attempt).unwrap(),
            "password {attempt:?} should be rejected"
        );
        assert!(!session.is_logged_in());
    }
}

#[test]
fn unknown_email_fails_like_wrong_password() {
    let (_tmp, store) = setup_store();
    let mut session = Session::new();

    assert!(!login(&store, &mut session, "nobody@x.com", "pw1").unwrap());
    assert!(!session.is_logged_in());
}

#[test]
fn password_is_stored_hashed() {
    let (_tmp, store) = setup_store();
    register(&store, "a@x.com", "pw1").unwrap();

    let conn = store.connect().unwrap();
    let stored: String = conn
        .query_row(
            "SELECT password FROM users WHERE email = ?1",
            ["a@x.com"],
            |r| r.get(0),
        )
        .unwrap();

    assert_ne!(stored, "pw1");
    assert!(stored.starts_with("$2"));
    assert!(bcrypt::verify("pw1", &stored).unwrap());
}

#[test]
fn same_password_gets_distinct_salts() {
    let (_tmp, store) = setup_store();
    register(&store, "a@x.com", "shared").unwrap();
    register(&store, "b@x.com", "shared").unwrap();

    let conn = store.connect().unwrap();
    let hashes: Vec<String> = conn
        .prepare("SELECT password FROM users ORDER BY id")
        .unwrap()
        .query_map([], |r| r.get(0))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(hashes.len(), 2);
    assert_ne!(hashes[0], hashes[1]);
}

#[test]
fn corrupted_hash_is_treated_as_failed_login() {
    let (_tmp, store) = setup_store();
    let conn = store.connect().unwrap();
    conn.execute(
        "INSERT INTO users (email, password) VALUES ('a@x.com', 'not-a-hash')",
        [],
    )
    .unwrap();

    let mut session = Session::new();
    assert!(!login(&store, &mut session, "a@x.com", "not-a-hash").unwrap());
}

#[test]
fn logout_resets_session() {
    let (_tmp, store) = setup_store();
    register(&store, "a@x.com", "pw1").unwrap();
    let mut session = Session::new();
    login(&store, &mut session, "a@x.com", "pw1").unwrap();
    session.begin_booking(1);

    logout(&mut session);

    assert_eq!(session, Session::new());
}

#[test]
fn scenario_from_registration_to_duplicate() {
    let (_tmp, store) = setup_store();
    let mut session = Session::new();

    assert!(register(&store, "a@x.com", "pw1").unwrap());
    assert!(login(&store, &mut session, "a@x.com", "pw1").unwrap());
    assert!(!login(&store, &mut Session::new(), "a@x.com", "wrong").unwrap());
    assert!(!register(&store, "a@x.com", "pw2").unwrap());
}

#[test]
fn password_longer_than_bcrypt_input_is_rejected() {
    let (_tmp, store) = setup_store();
    let long = format!("{}REAL-SECRET", "a".repeat(MAX_PASSWORD_BYTES));

    let err = register(&store, "a@x.com", &long).unwrap_err();
    assert_eq!(
        err.downcast_ref::<ValidationError>(),
        Some(&ValidationError::PasswordTooLong)
    );

    let conn = store.connect().unwrap();
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM users", [], |r| r.get(0))
        .unwrap();
    assert_eq!(count, 0);
}

#[test]
fn passwords_sharing_a_72_byte_prefix_do_not_log_in() {
    let (_tmp, store) = setup_store();
    let exact = "a".repeat(MAX_PASSWORD_BYTES);
    assert!(register(&store, "a@x.com", &exact).unwrap());

    let mut session = Session::new();
    let other = format!("{exact}something-else");
    assert!(!login(&store, &mut session, "a@x.com", &other).unwrap());
    assert!(!session.is_logged_in());

    assert!(login(&store, &mut session, "a@x.com", &exact).unwrap());
}
