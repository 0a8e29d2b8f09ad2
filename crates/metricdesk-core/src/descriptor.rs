//! Metric descriptor: the fetch coordinates of one dashboard metric.
//!
//! Every key and path held here is opaque. Consumers compose them into
//! request paths against their own data layer; this crate never interprets
//! them beyond the registry invariants.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Auxiliary kind holding the label-mapping resource of tag-mapped metrics.
pub const AUX_TAGS: &str = "tags";

/// Auxiliary resource paths keyed by kind (e.g. `tags`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuxiliaryPaths(BTreeMap<String, String>);

impl AuxiliaryPaths {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, kind: impl Into<String>, path: impl Into<String>) {
        self.0.insert(kind.into(), path.into());
    }

    pub fn get(&self, kind: &str) -> Option<&str> {
        self.0.get(kind).map(String::as_str)
    }

    /// Label-mapping path, if any.
    pub fn tags(&self) -> Option<&str> {
        self.get(AUX_TAGS)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `(kind, path)` pairs in kind order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

fn is_false(v: &bool) -> bool {
    !*v
}

/// One supported metric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct MetricDescriptor {
    /// Stable key the rest of the system refers to this metric by.
    pub identifier: String,
    pub display_label: String,

    /// Metric is only interpretable with the `tags` auxiliary resource.
    #[serde(default, skip_serializing_if = "is_false")]
    pub requires_tag_mapping: bool,

    /// Resource holding the reference/benchmark value.
    pub benchmark_key: String,
    /// Path fragment of the raw computation results.
    pub calc_path: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history_key: Option<String>,

    /// `Some(true)` per class, `Some(false)` per codebase/module.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_scoped: Option<bool>,

    #[serde(default, skip_serializing_if = "AuxiliaryPaths::is_empty")]
    pub extra_paths: AuxiliaryPaths,

    /// Metrics that must be available before this one can be derived.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<String>,
}

impl MetricDescriptor {
    pub fn new(
        identifier: impl Into<String>,
        display_label: impl Into<String>,
        benchmark_key: impl Into<String>,
        calc_path: impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            display_label: display_label.into(),
            requires_tag_mapping: false,
            benchmark_key: benchmark_key.into(),
            calc_path: calc_path.into(),
            current_key: None,
            history_key: None,
            class_scoped: None,
            extra_paths: AuxiliaryPaths::new(),
            depends_on: Vec::new(),
        }
    }

    pub fn with_current_key(mut self, key: impl Into<String>) -> Self {
        self.current_key = Some(key.into());
        self
    }

    pub fn with_history_key(mut self, key: impl Into<String>) -> Self {
        self.history_key = Some(key.into());
        self
    }

    pub fn class_scoped(mut self, scoped: bool) -> Self {
        self.class_scoped = Some(scoped);
        self
    }

    /// Mark the metric as tag-mapped and record its label-mapping path.
    pub fn with_tags(mut self, path: impl Into<String>) -> Self {
        self.requires_tag_mapping = true;
        self.extra_paths.insert(AUX_TAGS, path);
        self
    }

    pub fn depends_on<I, S>(mut self, identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.depends_on = identifiers.into_iter().map(Into::into).collect();
        self
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn label(&self) -> &str {
        &self.display_label
    }

    pub fn tags_path(&self) -> Option<&str> {
        self.extra_paths.tags()
    }

    pub fn is_class_scoped(&self) -> Option<bool> {
        self.class_scoped
    }

    /// Derived metrics are computed from other registered metrics.
    pub fn is_derived(&self) -> bool {
        !self.depends_on.is_empty()
    }
}
