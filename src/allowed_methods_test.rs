use super::*;

mod list {
    use super::*;

    #[test]
    fn when_config_value_is_star_should_select_any() {
        // Arrange & Act
        let methods = AllowedMethods::list([" * "]);

        // Assert
        assert_eq!(methods, AllowedMethods::Any);
    }

    #[test]
    fn when_star_is_mixed_with_names_should_keep_it_as_entry() {
        // Arrange & Act
        let methods = AllowedMethods::list(["GET", "*"]);

        // Assert
        assert_eq!(
            methods,
            AllowedMethods::List(vec!["GET".to_string(), "*".to_string()])
        );
        assert_eq!(methods.invalid_entry(), Some("*"));
    }
}

mod allows_method {
    use super::*;

    #[test]
    fn when_backend_allows_any_should_admit_custom_verbs() {
        // Arrange
        let methods = AllowedMethods::list(["*"]);

        // Act & Assert
        assert!(methods.allows_method("PATCH"));
        assert!(methods.allows_method("PROPFIND"));
    }

    #[test]
    fn when_list_configured_should_compare_ignoring_case_and_padding() {
        // Arrange
        let methods = AllowedMethods::list(["GET", "POST"]);

        // Act & Assert
        assert!(methods.allows_method(" post "));
        assert!(!methods.allows_method("DELETE"));
    }
}

mod header_value {
    use super::*;

    #[test]
    fn when_any_should_emit_literal_star() {
        assert_eq!(AllowedMethods::any().header_value().as_deref(), Some("*"));
    }

    #[test]
    fn when_default_should_emit_common_methods_in_order() {
        // Arrange & Act
        let value = AllowedMethods::default().header_value();

        // Assert
        assert_eq!(value.as_deref(), Some("GET,HEAD,PUT,PATCH,POST,DELETE"));
    }

    #[test]
    fn when_list_is_empty_should_emit_nothing() {
        assert_eq!(AllowedMethods::list(Vec::<String>::new()).header_value(), None);
    }
}

mod invalid_entry {
    use super::*;

    #[test]
    fn when_method_has_space_should_report_it() {
        // Arrange
        let methods = AllowedMethods::list(["GET", "PO ST"]);

        // Act & Assert
        assert_eq!(methods.invalid_entry(), Some("PO ST"));
        assert_eq!(AllowedMethods::default().invalid_entry(), None);
    }
}
