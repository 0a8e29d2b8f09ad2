//! Immutable metric registry.
//!
//! The registry is built once through [`MetricRegistry::new`], which checks
//! every invariant, and is read-only afterwards. Lookups scan in declaration
//! order, so the first entry wins if identifiers were ever duplicated (they
//! cannot be once validation passed).

use std::collections::{HashMap, HashSet};

use crate::descriptor::MetricDescriptor;
use crate::error::{MetricDeskError, Result};

#[derive(Debug, Clone)]
pub struct MetricRegistry {
    metrics: Vec<MetricDescriptor>,
}

impl MetricRegistry {
    /// Build a registry, rejecting data that breaks any invariant.
    pub fn new(metrics: Vec<MetricDescriptor>) -> Result<Self> {
        Self::validate(&metrics)?;
        tracing::debug!(metrics = metrics.len(), "metric registry validated");
        Ok(Self { metrics })
    }

    /// Registry over the built-in dashboard catalog.
    pub fn builtin() -> Result<Self> {
        Self::new(crate::builtin::builtin_metrics())
    }

    /// All descriptors in declaration order.
    pub fn list_metrics(&self) -> &[MetricDescriptor] {
        &self.metrics
    }

    pub fn find(&self, identifier: &str) -> Option<&MetricDescriptor> {
        self.metrics.iter().find(|m| m.identifier == identifier)
    }

    pub fn get_metric(&self, identifier: &str) -> Result<&MetricDescriptor> {
        self.find(identifier)
            .ok_or_else(|| MetricDeskError::NotFound(identifier.to_string()))
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.find(identifier).is_some()
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.metrics.iter().map(|m| m.identifier.as_str())
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    /// Resolve the declared dependencies of `identifier`, in declared order.
    pub fn dependencies_of(&self, identifier: &str) -> Result<Vec<&MetricDescriptor>> {
        let metric = self.get_metric(identifier)?;
        metric
            .depends_on
            .iter()
            .map(|dep| self.get_metric(dep))
            .collect()
    }

    /// Check uniqueness, tag-mapping, dependency and required-key invariants.
    pub fn validate(metrics: &[MetricDescriptor]) -> Result<()> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(metrics.len());

        for m in metrics {
            if m.identifier.trim().is_empty() {
                return Err(invalid("metric identifier must not be empty".into()));
            }
            if !seen.insert(m.identifier.as_str()) {
                return Err(invalid(format!("duplicate metric identifier: {}", m.identifier)));
            }
            if m.benchmark_key.is_empty() {
                return Err(invalid(format!("{}: benchmarkKey must not be empty", m.identifier)));
            }
            if m.calc_path.is_empty() {
                return Err(invalid(format!("{}: calcPath must not be empty", m.identifier)));
            }
            if m.requires_tag_mapping && m.tags_path().is_none_or(str::is_empty) {
                return Err(invalid(format!(
                    "{}: requiresTagMapping needs a non-empty extraPaths.tags",
                    m.identifier
                )));
            }
            if let Some((kind, _)) = m.extra_paths.iter().find(|(_, path)| path.is_empty()) {
                return Err(invalid(format!(
                    "{}: extraPaths.{kind} must not be empty",
                    m.identifier
                )));
            }
        }

        for m in metrics {
            for dep in &m.depends_on {
                if dep == &m.identifier {
                    return Err(invalid(format!("{}: depends on itself", m.identifier)));
                }
                if !seen.contains(dep.as_str()) {
                    return Err(invalid(format!(
                        "{}: depends on unknown metric {dep}",
                        m.identifier
                    )));
                }
            }
        }

        check_acyclic(metrics)
    }
}

fn invalid(msg: String) -> MetricDeskError {
    MetricDeskError::InvalidRegistry(msg)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Done,
}

// Iterative DFS over `depends_on`; identifiers are known to be unique and resolvable.
fn check_acyclic(metrics: &[MetricDescriptor]) -> Result<()> {
    let index: HashMap<&str, usize> = metrics
        .iter()
        .enumerate()
        .map(|(i, m)| (m.identifier.as_str(), i))
        .collect();
    let mut marks = vec![Mark::Unvisited; metrics.len()];

    for root in 0..metrics.len() {
        if marks[root] != Mark::Unvisited {
            continue;
        }
        let mut stack: Vec<(usize, usize)> = vec![(root, 0)];
        marks[root] = Mark::InProgress;

        while let Some((node, next)) = stack.pop() {
            let deps = &metrics[node].depends_on;
            if next == deps.len() {
                marks[node] = Mark::Done;
                continue;
            }
            stack.push((node, next + 1));

            let Some(&child) = index.get(deps[next].as_str()) else {
                continue;
            };
            match marks[child] {
                Mark::InProgress => {
                    return Err(invalid(format!(
                        "dependency cycle through {} and {}",
                        metrics[node].identifier, metrics[child].identifier
                    )));
                }
                Mark::Unvisited => {
                    marks[child] = Mark::InProgress;
                    stack.push((child, 0));
                }
                Mark::Done => {}
            }
        }
    }
    Ok(())
}
