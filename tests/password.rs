use argonite::derivation::{InvalidParameters, Params};
use argonite::password::{
    PasswordError, hash_password, hash_password_with_salt, needs_rehash, verify_password,
};
use argonite::phc::MalformedEncoding;

fn fast_params() -> Params {
    Params {
        mem_kib: 64,
        time: 1,
        lanes: 1,
        tag_len: 32,
        salt_len: 16,
        ..Params::default()
    }
}

#[test]
fn hash_then_verify_round_trip() {
    let encoded = hash_password(b"correct horse battery staple", &fast_params()).unwrap();

    assert!(verify_password(&encoded, b"correct horse battery staple").unwrap());
    assert!(!verify_password(&encoded, b"correct horse battery stable").unwrap());
}

#[test]
fn fresh_salts_give_distinct_hashes_that_both_verify() {
    let params = fast_params();

    let a = hash_password(b"password", &params).unwrap();
    let b = hash_password(b"password", &params).unwrap();

    assert_ne!(a, b);
    assert!(verify_password(&a, b"password").unwrap());
    assert!(verify_password(&b, b"password").unwrap());
}

#[test]
fn fixed_salt_hashing_is_deterministic() {
    let params = fast_params();

    let a = hash_password_with_salt(b"password", b"somesaltsomesalt", &params).unwrap();
    let b = hash_password_with_salt(b"password", b"somesaltsomesalt", &params).unwrap();

    assert_eq!(a, b);
}

/// End-to-end scenario with production-grade parameters.
#[test]
fn strong_password_scenario() {
    let params = Params {
        mem_kib: 15000,
        time: 2,
        lanes: 1,
        tag_len: 32,
        salt_len: 16,
        ..Params::default()
    };

    let encoded = hash_password("MinhaSenhaMuitoForte!123".as_bytes(), &params).unwrap();

    assert!(encoded.starts_with("$argon2id$v=19$m=15000,t=2,p=1$"));
    assert!(verify_password(&encoded, "MinhaSenhaMuitoForte!123".as_bytes()).unwrap());
    assert!(!verify_password(&encoded, "senha-errada".as_bytes()).unwrap());
}

#[test]
fn verify_surfaces_malformed_hashes_as_errors() {
    // A parse failure must be distinguishable from a wrong password.
    let result = verify_password("$argon2i$v=19$m=15000,t=2,p=1$abc$def", b"password");

    assert_eq!(
        result,
        Err(PasswordError::MalformedEncoding(
            MalformedEncoding::UnknownAlgorithm("argon2i".to_string())
        ))
    );
}

#[test]
fn verify_surfaces_invalid_embedded_parameters_as_errors() {
    // Well-formed string, but m=4 violates the 8 KiB per lane minimum.
    let result = verify_password(
        "$argon2id$v=19$m=4,t=2,p=1$c29tZXNhbHRzb21lc2FsdA$dGFndGFndGFndGFn",
        b"password",
    );

    assert_eq!(
        result,
        Err(PasswordError::InvalidParameters(
            InvalidParameters::MemoryTooSmall
        ))
    );
}

#[test]
fn hash_rejects_invalid_parameters_up_front() {
    let mut params = fast_params();
    params.mem_kib = 16;
    params.lanes = 4;

    assert_eq!(
        hash_password(b"password", &params),
        Err(PasswordError::InvalidParameters(
            InvalidParameters::MemoryTooSmall
        ))
    );
}

#[test]
fn needs_rehash_detects_parameter_drift() {
    let params = fast_params();
    let encoded = hash_password(b"password", &params).unwrap();

    assert!(!needs_rehash(&encoded, &params).unwrap());

    let mut bumped = params.clone();
    bumped.time = 2;
    assert!(needs_rehash(&encoded, &bumped).unwrap());

    let mut bumped = params.clone();
    bumped.mem_kib = 128;
    assert!(needs_rehash(&encoded, &bumped).unwrap());

    let mut bumped = params.clone();
    bumped.lanes = 2;
    assert!(needs_rehash(&encoded, &bumped).unwrap());

    let mut bumped = params.clone();
    bumped.tag_len = 64;
    assert!(needs_rehash(&encoded, &bumped).unwrap());

    let mut bumped = params;
    bumped.salt_len = 24;
    assert!(needs_rehash(&encoded, &bumped).unwrap());
}

#[test]
fn needs_rehash_rejects_malformed_input() {
    assert_eq!(
        needs_rehash("not a phc string", &fast_params()),
        Err(MalformedEncoding::WrongFieldCount)
    );
}
