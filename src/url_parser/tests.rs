#[cfg(test)]
mod tests {
    use crate::error::ParseError;
    use crate::url_parser::{
        normalize_domain, options_for_domain, parse_root, root_url, validate_scheme,
        validate_url,
    };

    // Candidate expansion
    #[test]
    fn test_options_for_second_level_domain() {
        assert_eq!(
            options_for_domain("google.com"),
            vec!["google.com", "www.google.com"]
        );
    }

    #[test]
    fn test_options_for_subdomain() {
        assert_eq!(
            options_for_domain("email.google.com"),
            vec!["email.google.com", "google.com", "www.google.com"]
        );
    }

    #[test]
    fn test_options_for_deep_subdomain() {
        assert_eq!(
            options_for_domain("x1.y2.email.google.com"),
            vec![
                "x1.y2.email.google.com",
                "y2.email.google.com",
                "email.google.com",
                "google.com",
                "www.google.com",
            ]
        );
    }

    #[test]
    fn test_options_for_single_label() {
        assert_eq!(options_for_domain("google"), vec!["google", "www.google"]);
    }

    #[test]
    fn test_options_length_matches_label_count() {
        for domain in ["a.b", "a.b.c", "a.b.c.d", "a.b.c.d.e.f"] {
            let labels = domain.split('.').count();
            let options = options_for_domain(domain);

            assert_eq!(options.len(), labels, "candidates for {}", domain);
            // Each step strips exactly one leading label
            for pair in options[..labels - 1].windows(2) {
                let expected = pair[0].split_once('.').map(|(_, rest)| rest);
                assert_eq!(expected, Some(pair[1].as_str()));
            }
            let root: Vec<&str> = domain.rsplitn(3, '.').take(2).collect();
            assert_eq!(
                options.last().unwrap(),
                &format!("www.{}.{}", root[1], root[0])
            );
        }
    }

    #[test]
    fn test_options_skip_duplicate_www() {
        // The www variant already appears as the input
        assert_eq!(
            options_for_domain("www.google.com"),
            vec!["www.google.com", "google.com"]
        );
    }

    #[test]
    fn test_normalize_domain() {
        assert_eq!(normalize_domain("  Example.COM. ").unwrap(), "example.com");
        assert_eq!(normalize_domain("google").unwrap(), "google");

        for bad in ["", "   ", ".", "https://example.com", "example.com/about", "exa mple.com"] {
            assert!(
                matches!(normalize_domain(bad), Err(ParseError::InvalidDomain(_))),
                "{:?} should be rejected",
                bad
            );
        }
    }

    // Root URL normalization
    #[test]
    fn test_root_url_clears_path_query_and_fragment() {
        assert_eq!(
            root_url("https://example.com/about/team?lang=en#top").unwrap(),
            "https://example.com/"
        );
        assert_eq!(
            root_url("http://api.example.com:8443/v1/users").unwrap(),
            "http://api.example.com:8443/"
        );
    }

    #[test]
    fn test_root_url_is_idempotent() {
        let root = root_url("https://example.com/path").unwrap();
        assert_eq!(root_url(&root).unwrap(), root);
        assert_eq!(root_url("https://example.com").unwrap(), "https://example.com/");
    }

    #[test]
    fn test_root_url_rejects_malformed_input() {
        for bad in ["not a url", "example.com", "https://", "http://exa mple.com"] {
            assert!(
                matches!(root_url(bad), Err(ParseError::InvalidUrl { .. })),
                "{:?} should not parse",
                bad
            );
        }
    }

    // Validation
    #[test]
    fn test_validate_url_limits() {
        assert!(validate_url("https://example.com", 2048).is_ok());
        assert!(matches!(validate_url("", 2048), Err(ParseError::EmptyUrl)));

        let long = format!("https://example.com/{}", "a".repeat(100));
        assert!(matches!(
            validate_url(&long, 50),
            Err(ParseError::UrlTooLong { max: 50 })
        ));
    }

    #[test]
    fn test_validate_scheme() {
        let allowed = vec!["http".to_string(), "https".to_string()];

        let https = parse_root("https://example.com").unwrap();
        assert!(validate_scheme(&https, &allowed).is_ok());

        let ftp = parse_root("ftp://example.com/file").unwrap();
        let err = validate_scheme(&ftp, &allowed).unwrap_err();
        assert_eq!(err.to_string(), "URL scheme 'ftp' is not allowed");
    }
}
