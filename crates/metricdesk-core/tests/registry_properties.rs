//! Registry invariants and lookups over the built-in catalog.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::HashSet;

use metricdesk_core::{MetricDescriptor, MetricDeskError, MetricRegistry};

fn registry() -> MetricRegistry {
    MetricRegistry::builtin().expect("builtin catalog must validate")
}

#[test]
fn identifiers_are_unique() {
    let reg = registry();
    let ids: HashSet<&str> = reg.identifiers().collect();
    assert_eq!(ids.len(), reg.len());
    assert_eq!(reg.len(), 14);
}

#[test]
fn tag_mapped_metrics_have_tags_path() {
    for m in registry().list_metrics() {
        if m.requires_tag_mapping {
            let tags = m.tags_path().unwrap_or_default();
            assert!(!tags.is_empty(), "metric={}", m.identifier);
        }
    }
}

#[test]
fn dependencies_resolve_to_other_entries() {
    let reg = registry();
    for m in reg.list_metrics() {
        for dep in &m.depends_on {
            assert_ne!(dep, &m.identifier, "metric={}", m.identifier);
            assert!(reg.contains(dep), "metric={} dep={}", m.identifier, dep);
        }
    }
}

#[test]
fn get_metric_returns_matching_identifier() {
    let reg = registry();
    for id in reg.identifiers() {
        let m = reg.get_metric(id).unwrap();
        assert_eq!(m.identifier, id);
    }
}

#[test]
fn get_metric_unknown_is_not_found() {
    let err = registry().get_metric("DoesNotExist").expect_err("must fail");
    assert!(matches!(err, MetricDeskError::NotFound(ref id) if id == "DoesNotExist"));
    assert_eq!(err.client_code().as_str(), "NOT_FOUND");
    assert!(registry().find("DoesNotExist").is_none());
}

#[test]
fn lookup_is_exact_match() {
    let reg = registry();
    assert!(reg.find("lcom4").is_none());
    assert!(reg.find("Cyclomatic Complexity").is_some());
}

#[test]
fn list_order_is_declaration_order() {
    let reg = registry();
    let first: Vec<&str> = reg.identifiers().take(3).collect();
    assert_eq!(first, ["LCOM4", "LCOMHS", "DefectScore"]);
    assert_eq!(reg.list_metrics().last().unwrap().identifier, "FIFO");

    let again = registry();
    assert_eq!(reg.list_metrics(), again.list_metrics());
}

#[test]
fn instability_depends_on_coupling_metrics() {
    let reg = registry();
    let m = reg.get_metric("Instability").unwrap();
    assert_eq!(m.depends_on, ["AfferentCoupling", "EfferentCoupling"]);
    assert!(m.is_derived());

    let deps: Vec<&str> = reg
        .dependencies_of("Instability")
        .unwrap()
        .into_iter()
        .map(|d| d.identifier())
        .collect();
    assert_eq!(deps, ["AfferentCoupling", "EfferentCoupling"]);
    assert!(reg.dependencies_of("LCOM4").unwrap().is_empty());
}

#[test]
fn defect_score_requires_tag_mapping() {
    let reg = registry();
    let m = reg.get_metric("DefectScore").unwrap();
    assert!(m.requires_tag_mapping);
    assert_eq!(m.tags_path(), Some("defectscore/labelmapping"));
    assert_eq!(m.label(), "Defect Score");
    assert_eq!(m.is_class_scoped(), Some(false));
}

#[test]
fn keys_are_carried_verbatim() {
    let reg = registry();
    let halstead = reg.get_metric("Halstead").unwrap();
    assert_eq!(halstead.history_key.as_deref(), Some("lcomhs_halstead"));

    let coverage = reg.get_metric("Code coverage").unwrap();
    assert_eq!(coverage.benchmark_key, "cc_benchmark");
    assert_eq!(coverage.calc_path, "cc");
    assert_eq!(coverage.current_key.as_deref(), Some("current_cct"));
}

#[test]
fn descriptor_json_omits_absent_fields() {
    let reg = registry();
    let v = serde_json::to_value(reg.get_metric("LCOM4").unwrap()).unwrap();
    assert_eq!(v["identifier"], "LCOM4");
    assert_eq!(v["benchmarkKey"], "lcom4_benchmark");
    assert_eq!(v["historyKey"], "lcom4_history");
    assert_eq!(v["classScoped"], true);
    assert!(v.get("requiresTagMapping").is_none());
    assert!(v.get("extraPaths").is_none());
    assert!(v.get("dependsOn").is_none());

    let v = serde_json::to_value(reg.get_metric("DefectScore").unwrap()).unwrap();
    assert_eq!(v["extraPaths"]["tags"], "defectscore/labelmapping");
}

#[test]
fn registry_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MetricRegistry>();
    assert_send_sync::<MetricDescriptor>();
}
