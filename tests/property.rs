//! Property-based tests for password hashing and tokens

use authgate::backend::auth::{issue_token, verify_token, PasswordHasher, SigningSecret};
use proptest::prelude::*;
use uuid::Uuid;

fn fast() -> PasswordHasher {
    PasswordHasher::with_cost(4)
}

proptest! {
    // bcrypt is deliberately slow, even at the minimum cost
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn test_hash_verifies_own_password(password in "[ -~]{1,64}") {
        let hashed = fast().hash(&password).unwrap();
        prop_assert!(fast().verify(&password, &hashed));
    }

    #[test]
    fn test_hash_rejects_other_password(a in "[a-z0-9]{1,32}", b in "[a-z0-9]{1,32}") {
        prop_assume!(a != b);
        let hashed = fast().hash(&b).unwrap();
        prop_assert!(!fast().verify(&a, &hashed));
    }

    #[test]
    fn test_hash_is_salted(password in "[ -~]{1,32}") {
        let first = fast().hash(&password).unwrap();
        let second = fast().hash(&password).unwrap();
        prop_assert_ne!(&first, &second);
        prop_assert!(fast().verify(&password, &first));
        prop_assert!(fast().verify(&password, &second));
    }
}

proptest! {
    #[test]
    fn test_token_round_trip(bytes in any::<[u8; 16]>(), secret in "[ -~]{1,64}") {
        let subject = Uuid::from_bytes(bytes);
        let secret = SigningSecret::new(secret);

        let token = issue_token(subject, &secret).unwrap();
        let claims = verify_token(&token, &secret).unwrap();
        prop_assert_eq!(claims.sub, subject);
    }

    #[test]
    fn test_token_rejected_under_other_secret(
        bytes in any::<[u8; 16]>(),
        a in "[a-z0-9]{1,32}",
        b in "[a-z0-9]{1,32}",
    ) {
        prop_assume!(a != b);
        let token = issue_token(Uuid::from_bytes(bytes), &SigningSecret::new(a)).unwrap();
        prop_assert!(verify_token(&token, &SigningSecret::new(b)).is_err());
    }

    #[test]
    fn test_garbage_never_verifies(token in "[A-Za-z0-9._-]{0,80}") {
        prop_assert!(verify_token(&token, &SigningSecret::new("secret")).is_err());
    }
}
