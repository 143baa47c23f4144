//! Generator definitions: which templates are rendered against which rows, in what order.

use crate::catalog::{
    AppChannel, FieldSet, MOBILE_SEARCH_APP_CHANNELS, MOBILE_SEARCH_STABLE_APP_CHANNELS,
};

/// One common table expression produced by a pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CteSpec {
    /// CTE name in the emitted `WITH` chain.
    pub name: &'static str,
    /// Template file name, relative to the pipeline's template directory.
    pub template: &'static str,
    /// Fields the template may reference.
    pub fields: FieldSet,
}

/// A named generator: a configuration table and the CTEs rendered from it.
#[derive(Debug, Clone, Copy)]
pub struct Pipeline {
    pub name: &'static str,
    pub description: &'static str,
    /// Directory holding the pipeline's templates, relative to the templates root.
    pub template_dir: &'static str,
    pub rows: &'static [AppChannel],
    /// Emitted in order; the first opens the `WITH` chain.
    pub ctes: &'static [CteSpec],
}

const FENIX_METRICS: CteSpec =
    CteSpec { name: "fenix_metrics", template: "fenix_metrics.template.sql", fields: FieldSet::Full };

// Older clients don't send locale in metrics, so it is recovered from baseline pings.
const FENIX_CLIENT_LOCALE: CteSpec = CteSpec {
    name: "fenix_client_locale",
    template: "fenix_baseline.template.sql",
    fields: FieldSet::Namespace,
};

/// Every pipeline known to the generator. Names are unique.
pub static PIPELINES: [Pipeline; 2] = [
    Pipeline {
        name: "mobile_search_clients_daily",
        description: "Fenix baseline locale and search metrics per app channel",
        template_dir: "sql/search_derived/mobile_search_clients_daily_v1",
        rows: &MOBILE_SEARCH_APP_CHANNELS,
        ctes: &[FENIX_CLIENT_LOCALE, FENIX_METRICS],
    },
    Pipeline {
        name: "mobile_search_clients_daily_stable",
        description: "Fenix search metrics read from the stable tables",
        template_dir: "sql/search_derived/mobile_search_clients_daily_stable_v1",
        rows: &MOBILE_SEARCH_STABLE_APP_CHANNELS,
        ctes: &[FENIX_METRICS],
    },
];

/// Looks up a pipeline by name.
#[must_use]
pub fn find_pipeline(name: &str) -> Option<&'static Pipeline> {
    PIPELINES.iter().find(|p| p.name == name)
}

impl Pipeline {
    /// Names of the CTEs this pipeline emits, in order.
    pub fn cte_names(&self) -> impl Iterator<Item = &'static str> {
        self.ctes.iter().map(|c| c.name)
    }
}
