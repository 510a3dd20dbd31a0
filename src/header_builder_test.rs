use super::*;
use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::exposed_headers::ExposedHeaders;
use crate::origin::Origin;

const PREVIEW: &str = "https://deploy-preview-7.netlify.app";

fn backend_options() -> CorsOptions {
    CorsOptions::new()
        .origin(Origin::list(["http://localhost:5173"]))
        .methods(AllowedMethods::any())
        .allowed_headers(AllowedHeaders::any())
        .credentials(true)
        .max_age(3600)
}

fn pairs(headers: &Headers) -> Vec<(&str, &str)> {
    headers
        .iter()
        .map(|(name, value)| (name.as_str(), value.as_str()))
        .collect()
}

mod allow_origin {
    use super::*;

    #[test]
    fn when_mirrored_should_echo_origin_and_vary_on_it() {
        // Arrange
        let options = backend_options();

        // Act
        let headers = HeaderBuilder::new(&options)
            .allow_origin(OriginDecision::Mirror, PREVIEW)
            .build();

        // Assert
        assert_eq!(
            pairs(&headers),
            [
                (header::ACCESS_CONTROL_ALLOW_ORIGIN, PREVIEW),
                (header::VARY, header::ORIGIN),
            ]
        );
    }

    #[test]
    fn when_any_should_answer_star_without_vary() {
        // Arrange
        let options = CorsOptions::default();

        // Act
        let headers = HeaderBuilder::new(&options)
            .allow_origin(OriginDecision::Any, PREVIEW)
            .build();

        // Assert
        assert_eq!(pairs(&headers), [(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")]);
    }

    #[test]
    fn when_disallowed_should_write_nothing() {
        // Arrange
        let options = backend_options();

        // Act
        let headers = HeaderBuilder::new(&options)
            .allow_origin(OriginDecision::Disallow, PREVIEW)
            .build();

        // Assert
        assert!(headers.is_empty());
    }
}

mod vary_on_request {
    use super::*;

    #[test]
    fn when_origin_is_echoed_should_add_request_tokens_after_origin() {
        // Arrange
        let options = backend_options();

        // Act
        let headers = HeaderBuilder::new(&options)
            .allow_origin(OriginDecision::Mirror, PREVIEW)
            .vary_on_request(OriginDecision::Mirror)
            .build();

        // Assert
        assert_eq!(
            headers.get(header::VARY).map(String::as_str),
            Some("Origin, Access-Control-Request-Method, Access-Control-Request-Headers")
        );
    }

    #[test]
    fn when_origin_is_star_should_not_vary() {
        // Arrange
        let options = CorsOptions::default();

        // Act
        let headers = HeaderBuilder::new(&options)
            .vary_on_request(OriginDecision::Any)
            .build();

        // Assert
        assert!(!headers.contains_key(header::VARY));
    }
}

mod backend_groups {
    use super::*;

    #[test]
    fn when_backend_policy_should_emit_credentials_stars_and_max_age() {
        // Arrange
        let options = backend_options();

        // Act
        let headers = HeaderBuilder::new(&options)
            .credentials()
            .methods()
            .allowed_headers()
            .max_age()
            .build();

        // Assert
        assert_eq!(
            pairs(&headers),
            [
                (header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true"),
                (header::ACCESS_CONTROL_ALLOW_METHODS, "*"),
                (header::ACCESS_CONTROL_ALLOW_HEADERS, "*"),
                (header::ACCESS_CONTROL_MAX_AGE, "3600"),
            ]
        );
    }

    #[test]
    fn when_groups_unconfigured_should_emit_only_default_methods() {
        // Arrange
        let options = CorsOptions::default();

        // Act
        let headers = HeaderBuilder::new(&options)
            .credentials()
            .methods()
            .allowed_headers()
            .exposed_headers()
            .max_age()
            .build();

        // Assert
        assert_eq!(
            pairs(&headers),
            [(header::ACCESS_CONTROL_ALLOW_METHODS, "GET,HEAD,PUT,PATCH,POST,DELETE")]
        );
    }

    #[test]
    fn when_exposed_headers_configured_should_emit_them() {
        // Arrange
        let options = CorsOptions::new().exposed_headers(ExposedHeaders::list(["X-Total-Count"]));

        // Act
        let headers = HeaderBuilder::new(&options).exposed_headers().build();

        // Assert
        assert_eq!(
            pairs(&headers),
            [(header::ACCESS_CONTROL_EXPOSE_HEADERS, "X-Total-Count")]
        );
    }
}
