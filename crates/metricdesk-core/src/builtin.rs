//! Built-in dashboard catalog.
//!
//! Order is the dashboard's menu order. Keys are carried verbatim from the
//! backend, irregular ones included.

use crate::descriptor::MetricDescriptor;

pub fn builtin_metrics() -> Vec<MetricDescriptor> {
    vec![
        MetricDescriptor::new("LCOM4", "LCOM4", "lcom4_benchmark", "lcom4")
            .with_current_key("current_lcom4")
            .with_history_key("lcom4_history")
            .class_scoped(true),
        MetricDescriptor::new("LCOMHS", "LCOMHS", "lcomhs_benchmark", "lcomhs")
            .with_current_key("current_lcomhs")
            .with_history_key("lcomhs_history")
            .class_scoped(true),
        MetricDescriptor::new("DefectScore", "Defect Score", "defect_score_benchmark", "defectscore")
            .with_tags("defectscore/labelmapping")
            .with_current_key("current_defect_score")
            .with_history_key("defect_score_history")
            .class_scoped(false),
        MetricDescriptor::new(
            "AfferentCoupling",
            "Afferent Coupling",
            "afferent_coupling_benchmark",
            "afferentcoupling",
        )
        .with_current_key("current_afferent")
        .with_history_key("afferent_history")
        .class_scoped(true),
        MetricDescriptor::new(
            "EfferentCoupling",
            "Efferent Coupling",
            "efferent_coupling_benchmark",
            "efferentcoupling",
        )
        .with_current_key("current_efferent")
        .with_history_key("efferent_history")
        .class_scoped(true),
        MetricDescriptor::new(
            "DefectDensityAnalysis",
            "Defect Density Analysis",
            "defect_density_analysis_benchmark",
            "defectdensity",
        )
        .with_current_key("current_defect_density")
        .with_history_key("defect_density_history")
        .class_scoped(false),
        MetricDescriptor::new("Instability", "Instability", "instability_benchmark", "instability")
            .with_current_key("current_instability")
            .with_history_key("instability_history")
            .class_scoped(true)
            .depends_on(["AfferentCoupling", "EfferentCoupling"]),
        MetricDescriptor::new("Halstead", "Halstead", "halstead_benchmark", "halstead")
            .with_current_key("current_halstead")
            .with_history_key("lcomhs_halstead")
            .class_scoped(true),
        MetricDescriptor::new(
            "Cyclomatic Complexity",
            "Cyclomatic Complexity",
            "cyclomatic_benchmark",
            "cyclo",
        )
        .with_current_key("current_cyclo")
        .with_history_key("cyclo_history")
        .class_scoped(true),
        MetricDescriptor::new("Defects Over Time", "Defects Over Time", "dot_benchmark", "dot")
            .with_current_key("current_dot")
            .with_history_key("dot_history")
            .class_scoped(true),
        MetricDescriptor::new("Code coverage", "Code coverage", "cc_benchmark", "cc")
            .with_current_key("current_cct")
            .with_history_key("cc_history")
            .class_scoped(true),
        MetricDescriptor::new("Fog index", "Fog index", "fog_benchmark", "fog")
            .with_current_key("current_fog")
            .with_history_key("fog_history")
            .class_scoped(true),
        MetricDescriptor::new("Code churn", "Code churn", "codechurn_benchmark", "codechurn")
            .with_current_key("current_codechurn")
            .with_history_key("codechurn_history")
            .class_scoped(true),
        MetricDescriptor::new("FIFO", "FIFO", "fifo_benchmark", "fifo")
            .with_current_key("current_fifo")
            .with_history_key("codechurn_fifo")
            .class_scoped(true),
    ]
}
