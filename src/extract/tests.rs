#[cfg(test)]
mod tests {
    use crate::extract::{Field, FieldResolver, MetaRule};
    use crate::model::Info;

    const PAGE_URL: &str = "https://default.com/";

    const FIRST_CHOICE: &str = r#"<!DOCTYPE html>
<html lang="en-US">
<head>
    <meta charset="UTF-8">
    <meta name='robots' content='index, follow, max-image-preview:large' />
    <title>Home - EverHealth</title>
    <meta name="descriPTION" content="No tiers, no restrictions, all the benefits." />
    <meta property="og:locale" content="en_US" />
    <meta property="og:type" content="website" />
    <meta property="og:description" content="Reimagining the Way You Work." />
    <meta property="og:url" content="https://www.everhealth.com/meta" />
    <meta property="og:site_name" content="EverHealth" />
    <meta name="twitter:card" content="summary_large_image" />
</head>
</html>"#;

    const FALLBACKS: &str = r#"<!DOCTYPE html>
<html lang="en-US">
<head>
    <meta charset="UTF-8">
    <title>Home - EverHealth</title>
    <link rel="canonical" href="https://www.everhealth.com/link" />
    <meta property="og:description" content="Reimagining the Way You Work." />
    <meta property="og:url" content="https://www.everhealth.com/meta" />
    <meta content="University of California, San Diego" name="ORGANIzation"/>
    <meta name="author" content="Web Team" />
</head>
</html>"#;

    const DUPLICATES: &str = r#"<!DOCTYPE html>
<html lang="en-US">
<head>
    <link rel="canonical" href="https://www.everhealth.com/link" />
    <link rel="canonical" href="https://www.everhealth.com/other" />
    <meta property="og:description" content="Reimagining the Way You Work." />
    <meta property="og:description" content="We're in Oregon now." />
    <meta content="University of California, San Diego" name="ORGANIzation"/>
    <meta content="University of Oregon, Portland" name="ORGANIzation"/>
</head>
</html>"#;

    const OUTSIDE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en-US">
<head>
    <title>Home - EverHealth</title>
    <link rel="canonical" href="https://www.everhealth.com/link" />
</head>
<body></body>
<meta property="og:description" content="Reimagining the Way You Work." />
<meta property="og:url" content="https://www.everhealth.com/meta" />
<meta content="University of California, San Diego" name="ORGANIzation"/>
</html>"#;

    const LINKED_DATA: &str = r#"<!DOCTYPE html>
<html lang="en-US">
<head>
    <title>Lumen</title>
    <meta property="og:site_name" content="Lumen Meta" />
    <meta name="description" content="From the meta tag" />
    <script type="application/ld+json">
        {
          "@context": "https://schema.org/",
          "@type": "Corporation",
          "url": "https://www.lumen.me/",
          "legalName": "Lumen",
          "name": "Lumen Inc",
          "description": "Lumen measures metabolism.",
          "address": { "@type": "PostalAddress", "postalCode": "10013" },
          "sameAs": ["https://www.lumen.me/about"]
        }
    </script>
</head>
</html>"#;

    const BROKEN_LINKED_DATA: &str = r#"<!DOCTYPE html>
<html>
<head>
    <script type="application/ld+json">{ "name": "Lumen Inc", </script>
    <meta property="og:site_name" content="Lumen" />
    <meta property="og:description" content="Metabolism, measured." />
    <meta property="og:url" content="https://www.lumen.me/" />
</head>
</html>"#;

    fn resolve(html: &str) -> Info {
        FieldResolver::new().resolve_html(html, PAGE_URL)
    }

    #[test]
    fn test_first_choice_sources() {
        assert_eq!(
            resolve(FIRST_CHOICE),
            Info {
                owner: "EverHealth".to_string(),
                homepage: "https://www.everhealth.com/meta".to_string(),
                description: "No tiers, no restrictions, all the benefits.".to_string(),
            }
        );
    }

    #[test]
    fn test_fallback_sources() {
        // Canonical link beats og:url, organization beats author
        assert_eq!(
            resolve(FALLBACKS),
            Info {
                owner: "University of California, San Diego".to_string(),
                homepage: "https://www.everhealth.com/link".to_string(),
                description: "Reimagining the Way You Work.".to_string(),
            }
        );
    }

    #[test]
    fn test_author_is_last_resort_for_owner() {
        let html = r#"<head><meta name="AUTHOR" content="Jane Doe"></head>"#;
        assert_eq!(resolve(html).owner, "Jane Doe");
    }

    #[test]
    fn test_duplicates_use_first_instance() {
        let info = resolve(DUPLICATES);
        assert_eq!(info.owner, "University of California, San Diego");
        assert_eq!(info.homepage, "https://www.everhealth.com/link");
        assert_eq!(info.description, "Reimagining the Way You Work.");
    }

    #[test]
    fn test_meta_tags_outside_head() {
        assert_eq!(
            resolve(OUTSIDE_HEAD),
            Info {
                owner: "University of California, San Diego".to_string(),
                homepage: "https://www.everhealth.com/link".to_string(),
                description: "Reimagining the Way You Work.".to_string(),
            }
        );
    }

    #[test]
    fn test_linked_data_takes_priority() {
        // Linked data carries no homepage, so it comes from the page root
        assert_eq!(
            resolve(LINKED_DATA),
            Info {
                owner: "Lumen Inc".to_string(),
                homepage: PAGE_URL.to_string(),
                description: "Lumen measures metabolism.".to_string(),
            }
        );
    }

    #[test]
    fn test_malformed_linked_data_falls_back() {
        assert_eq!(
            resolve(BROKEN_LINKED_DATA),
            Info {
                owner: "Lumen".to_string(),
                homepage: "https://www.lumen.me/".to_string(),
                description: "Metabolism, measured.".to_string(),
            }
        );
    }

    #[test]
    fn test_empty_document_has_only_homepage() {
        assert_eq!(
            resolve("<html><head></head><body></body></html>"),
            Info {
                homepage: PAGE_URL.to_string(),
                ..Info::default()
            }
        );
    }

    #[test]
    fn test_first_matching_rule_settles_field() {
        // og:site_name is present but empty; organization is not consulted
        let html = r#"<head>
            <meta property="og:site_name" content="">
            <meta name="organization" content="Acme">
        </head>"#;
        assert_eq!(resolve(html).owner, "");
    }

    #[test]
    fn test_custom_rule_table() {
        let resolver = FieldResolver::with_rules(vec![MetaRule::meta_name(
            Field::Owner,
            "application-name",
        )]);
        let html = r#"<head>
            <meta name="application-name" content="Acme App">
            <meta property="og:site_name" content="Acme">
        </head>"#;

        let info = resolver.resolve_html(html, PAGE_URL);
        assert_eq!(info.owner, "Acme App");
        assert_eq!(info.homepage, PAGE_URL);
    }
}
