//! Admin gate tests: password hashing, verification, and the configured
//! credential.

mod common;

use pa95::auth::gate::AdminCredential;
use pa95::auth::password;
use common::ADMIN_PASS;

#[test]
fn test_hash_password_success() {
    let hash = password::hash_password(ADMIN_PASS)
        .expect("Failed to hash password");

    assert!(!hash.is_empty());
    assert!(hash.len() > 20); // Argon2 hashes are long
}

#[test]
fn test_verify_password_correct() {
    let hash = password::hash_password(ADMIN_PASS)
        .expect("Failed to hash password");

    let verified = password::verify_password(ADMIN_PASS, &hash)
        .expect("Verification failed");

    assert!(verified);
}

#[test]
fn test_verify_password_incorrect() {
    let hash = password::hash_password(ADMIN_PASS)
        .expect("Failed to hash password");

    let verified = password::verify_password("wrong", &hash)
        .expect("Verification failed");

    assert!(!verified);
}

#[test]
fn test_hash_password_randomness() {
    let hash1 = password::hash_password(ADMIN_PASS)
        .expect("Failed to hash first password");
    let hash2 = password::hash_password(ADMIN_PASS)
        .expect("Failed to hash second password");

    // Same password should produce different hashes (different salts)
    assert_ne!(hash1, hash2);

    assert!(password::verify_password(ADMIN_PASS, &hash1)
        .expect("Verification 1 failed"));
    assert!(password::verify_password(ADMIN_PASS, &hash2)
        .expect("Verification 2 failed"));
}

#[test]
fn test_credential_grants_configured_password_only() {
    let credential = AdminCredential::new(ADMIN_PASS)
        .expect("Failed to build credential");

    assert!(credential.verify("prince95arthur").expect("verify"));
    assert!(!credential.verify("wrong").expect("verify"));
    assert!(!credential.verify("").expect("verify"));
}
