use super::*;

mod email {
    use super::*;

    #[test]
    fn test_purdue_address_accepted() {
        assert_eq!(super::email("pete@purdue.edu", &AccountConfig::default()), Ok(()));
    }

    #[test]
    fn test_other_domains_rejected() {
        let account = AccountConfig::default();

        for address in ["pete@gmail.com", "@purdue.edu", "pete@purdue.edu.evil", ""] {
            assert_eq!(
                super::email(address, &account),
                Err(ValidationError::InvalidEmail),
                "{address}"
            );
        }
    }

    #[test]
    fn test_configured_domain() {
        let account = AccountConfig {
            email_domain: "iu.edu".to_string(),
            ..AccountConfig::default()
        };

        assert_eq!(super::email("sam@iu.edu", &account), Ok(()));
        assert_eq!(
            super::email("pete@purdue.edu", &account),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn test_overlong_address_rejected() {
        let account = AccountConfig::default();
        let address = format!("{}@purdue.edu", "a".repeat(100));

        assert_eq!(super::email(&address, &account), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_message() {
        assert_eq!(
            ValidationError::InvalidEmail.to_string(),
            "Email must be a Purdue address"
        );
    }
}

mod password {
    use super::*;

    #[test]
    fn test_bounds_inclusive() {
        let account = AccountConfig::default();

        assert!(super::password(&"p".repeat(10), &account).is_ok());
        assert!(super::password(&"p".repeat(100), &account).is_ok());
        assert!(super::password(&"p".repeat(9), &account).is_err());
        assert!(super::password(&"p".repeat(101), &account).is_err());
        assert!(super::password("", &account).is_err());
    }

    #[test]
    fn test_message_names_minimum() {
        let err = super::password("short", &AccountConfig::default()).unwrap_err();

        assert_eq!(err.to_string(), "Password must be 10+ characters");
    }

    #[test]
    fn test_confirmation_mismatch() {
        assert_eq!(confirmation("hunter2hunter2", "hunter2hunter2"), Ok(()));
        assert_eq!(
            confirmation("hunter2hunter2", "hunter3hunter3"),
            Err(ValidationError::PasswordMismatch)
        );
    }
}

mod code {
    use super::*;

    #[test]
    fn test_six_digits() {
        let account = AccountConfig::default();

        assert!(super::code("012345", &account).is_ok());
        assert!(super::code("12345", &account).is_err());
        assert!(super::code("1234567", &account).is_err());
        assert!(super::code("12a456", &account).is_err());
        assert!(super::code("", &account).is_err());
    }

    #[test]
    fn test_message_names_length() {
        let err = super::code("abc", &AccountConfig::default()).unwrap_err();

        assert_eq!(err.to_string(), "Only 6 numbers");
    }
}

mod description {
    use super::*;

    #[test]
    fn test_length_window() {
        let reviews = ReviewsConfig::default();

        assert!(super::description(&"x".repeat(10), &reviews).is_ok());
        assert!(super::description(&"x".repeat(350), &reviews).is_ok());
        assert!(super::description(&"x".repeat(9), &reviews).is_err());
        assert!(super::description(&"x".repeat(351), &reviews).is_err());
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let reviews = ReviewsConfig::default();

        assert!(super::description(&"é".repeat(10), &reviews).is_ok());
    }
}
