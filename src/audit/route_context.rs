/// ISO 9001 clause the page on screen is audited against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteContext {
    pub clause: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

const fn ctx(clause: &'static str, title: &'static str, description: &'static str) -> RouteContext {
    RouteContext {
        clause,
        title,
        description,
    }
}

/// Application path prefix to clause context
pub static ROUTE_CONTEXTS: &[(&str, RouteContext)] = &[
    (
        "/contexto",
        ctx(
            "4.1",
            "Understanding the organization and its context",
            "Are internal and external issues relevant to the QMS determined and reviewed?",
        ),
    ),
    (
        "/processos",
        ctx(
            "4.4",
            "Quality management system and its processes",
            "Are processes, their inputs, outputs, owners and interactions defined?",
        ),
    ),
    (
        "/politica",
        ctx(
            "5.2",
            "Quality policy",
            "Is the quality policy established, communicated and available as documented information?",
        ),
    ),
    (
        "/riscos",
        ctx(
            "6.1",
            "Actions to address risks and opportunities",
            "Are risks and opportunities identified, with actions planned and evaluated for effectiveness?",
        ),
    ),
    (
        "/objetivos",
        ctx(
            "6.2",
            "Quality objectives and planning to achieve them",
            "Are objectives measurable, monitored and supported by plans with owners and deadlines?",
        ),
    ),
    (
        "/treinamentos",
        ctx(
            "7.2",
            "Competence",
            "Is competence determined, ensured through training and retained as evidence?",
        ),
    ),
    (
        "/documentos",
        ctx(
            "7.5",
            "Documented information",
            "Are documents identified, reviewed, approved, version controlled and protected?",
        ),
    ),
    (
        "/fornecedores",
        ctx(
            "8.4",
            "Control of externally provided processes, products and services",
            "Are suppliers evaluated, selected and monitored against defined criteria?",
        ),
    ),
    (
        "/achados",
        ctx(
            "9.2",
            "Internal audit",
            "Are audit findings reported to management and followed up without undue delay?",
        ),
    ),
    (
        "/indicadores",
        ctx(
            "9.1",
            "Monitoring, measurement, analysis and evaluation",
            "Are indicators defined, measured at planned intervals and analysed?",
        ),
    ),
    (
        "/auditorias",
        ctx(
            "9.2",
            "Internal audit",
            "Is an audit programme planned and are audits conducted with results reported to management?",
        ),
    ),
    (
        "/analise-critica",
        ctx(
            "9.3",
            "Management review",
            "Does top management review the QMS at planned intervals with the required inputs?",
        ),
    ),
    (
        "/nao-conformidades",
        ctx(
            "10.2",
            "Nonconformity and corrective action",
            "Are nonconformities reacted to, root causes analysed and corrections recorded?",
        ),
    ),
    (
        "/acoes-corretivas",
        ctx(
            "10.2",
            "Nonconformity and corrective action",
            "Are corrective actions implemented and their effectiveness reviewed?",
        ),
    ),
];

/// Looks up the clause context for `path`.
///
/// Matches the longest table prefix that ends on a path segment boundary, so
/// `/documentos/42` resolves like `/documentos` but `/documentosx` does not.
/// Query strings and fragments are ignored.
pub fn route_context_for(path: &str) -> Option<&'static RouteContext> {
    let path = path
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim_end_matches('/');

    ROUTE_CONTEXTS
        .iter()
        .filter(|(prefix, _)| {
            path.strip_prefix(*prefix)
                .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
        })
        .max_by_key(|(prefix, _)| prefix.len())
        .map(|(_, context)| context)
}
