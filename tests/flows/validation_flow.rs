/// Validation Flow Test
///
/// Host field value → registry → domain rule → format check → DNS check →
/// message resolution → attribute errors

#[path = "../common/mod.rs"]
mod common;
use common::{CountingResolver, TestDomains};

use dnsvet_application::services::FieldRules;
use dnsvet_domain::{
    Config, DnsCheckOptions, DomainError, DomainRuleConfig, IssueKind, ReferenceDomain,
};
use dnsvet_infrastructure::bootstrap::{build_registry, build_registry_with_resolver};
use std::sync::Arc;

fn config() -> Config {
    Config::from_toml(
        r#"
locale = "en"

[messages.en]
incorrect_dns_record = "points somewhere else"

[messages.pt]
invalid_domain = "é inválido"
"#,
    )
    .unwrap()
}

// ============================================================================
// Full validation flow
// ============================================================================

#[tokio::test]
async fn test_invalid_format_stops_before_dns() {
    let resolver = Arc::new(CountingResolver::new());
    let registry = build_registry_with_resolver(&config(), resolver.clone()).unwrap();
    let rule = DomainRuleConfig::new().verify_dns(true);

    let errors = registry
        .validate("domain", Some(TestDomains::single_label()), &rule)
        .await
        .unwrap();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, IssueKind::InvalidDomain);
    assert_eq!(errors[0].message, "is invalid");
    assert_eq!(resolver.calls(), 0, "format failure must not trigger a lookup");
}

#[tokio::test]
async fn test_rule_loaded_from_toml_runs_same_ip_check() {
    let resolver = Arc::new(CountingResolver::new());
    let registry = build_registry_with_resolver(&config(), resolver.clone()).unwrap();
    let rule: DomainRuleConfig = toml::from_str(
        r#"
[verify_dns]
same_ip_as = "example.com"
"#,
    )
    .unwrap();

    let matching = registry
        .validate("domain", Some(TestDomains::www_example()), &rule)
        .await
        .unwrap();
    let mismatched = registry
        .validate("domain", Some(TestDomains::rubygems()), &rule)
        .await
        .unwrap();

    assert!(matching.is_empty());
    assert_eq!(mismatched.len(), 1);
    assert_eq!(mismatched[0].kind, IssueKind::IncorrectDnsRecord);
    assert_eq!(mismatched[0].message, "points somewhere else");
    assert_eq!(
        resolver.lookups(),
        vec!["www.example.com", "example.com", "rubygems.org", "example.com"]
    );
}

#[tokio::test]
async fn test_deferred_reference_from_other_field() {
    let resolver = Arc::new(CountingResolver::new());
    let registry = build_registry_with_resolver(&config(), resolver).unwrap();
    let canonical_host = Arc::new(String::from("www.example.com"));
    let host = Arc::clone(&canonical_host);
    let rule = DomainRuleConfig::new().verify_dns(DnsCheckOptions::same_ip_as(
        ReferenceDomain::deferred(move || host.to_string()),
    ));

    let errors = registry
        .validate("domain", Some(TestDomains::example()), &rule)
        .await
        .unwrap();

    assert!(errors.is_empty());
}

#[tokio::test]
async fn test_locale_override_uses_catalog() {
    let registry = build_registry_with_resolver(&config(), Arc::new(CountingResolver::new())).unwrap();

    let errors = registry
        .validate_with_locale("domain", Some("-abc.com"), &DomainRuleConfig::default(), "pt")
        .await
        .unwrap();

    assert_eq!(errors[0].message, "é inválido");
}

#[tokio::test]
async fn test_field_rules_through_registry() {
    let registry = build_registry_with_resolver(&config(), Arc::new(CountingResolver::new())).unwrap();
    let rules = FieldRules::new().with_rule(
        "domain",
        DomainRuleConfig::new().allow_nil(true).verify_dns(
            DnsCheckOptions::default()
                .with_issue_message(IssueKind::MissingDnsRecord, "missing record"),
        ),
    );

    let absent = rules.validate(&registry, None).await.unwrap();
    let missing = rules
        .validate(&registry, Some(TestDomains::without_record()))
        .await
        .unwrap();

    assert!(absent.is_empty());
    assert_eq!(missing.len(), 1);
    assert_eq!(missing[0].message, "missing record");
}

#[tokio::test]
async fn test_unresolvable_reference_propagates() {
    let registry = build_registry_with_resolver(&config(), Arc::new(CountingResolver::new())).unwrap();
    let rule = DomainRuleConfig::new().verify_dns(DnsCheckOptions::same_ip_as("gone.example"));

    let result = registry
        .validate("domain", Some(TestDomains::example()), &rule)
        .await;

    assert!(matches!(
        result,
        Err(DomainError::ReferenceResolutionFailed { .. })
    ));
}

// ============================================================================
// Live network (run with `cargo test -- --ignored`)
// ============================================================================

#[tokio::test]
#[ignore]
async fn test_live_flow_with_system_resolver() {
    let registry = build_registry(&Config::default()).expect("system resolver available");
    let rule = DomainRuleConfig::new().verify_dns(true);

    let valid = registry
        .validate("domain", Some(TestDomains::example()), &rule)
        .await
        .unwrap();
    let missing = registry
        .validate(
            "domain",
            Some("zjnajkndsjkangunausgnasngiuansiugnaiusngansjkgnaskjnaksjdn.com"),
            &rule,
        )
        .await
        .unwrap();

    assert!(valid.is_empty());
    assert_eq!(missing[0].kind, IssueKind::MissingDnsRecord);
}
