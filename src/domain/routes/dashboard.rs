use super::{PlaceholderResolver, RouteDeclaration};

/// Business-admin dashboard modules: (path, title, description)
const DASHBOARD_ROUTES: &[(&str, &str, &str)] = &[
    ("/crm", "CRM", "Companies, contacts and sales pipeline"),
    ("/hr", "HR", "Recruitment, trainings and performance reviews"),
    ("/legal", "Legal", "Contracts, signatures and terms acceptance"),
    ("/logistics", "Logistics", "Shipments, stock and deliveries"),
    ("/marketing", "Marketing", "Campaigns and marketing analytics"),
    ("/support", "Support", "Tickets and notifications"),
    ("/compliance", "Compliance", "Regulatory filings and audits"),
    ("/finance", "Finance", "Invoices, expenses and banking"),
    ("/projects", "Projects", "Deliverables and time tracking"),
];

pub fn dashboard_declarations() -> Vec<RouteDeclaration> {
    DASHBOARD_ROUTES
        .iter()
        .map(|(path, title, description)| RouteDeclaration {
            path: path.to_string(),
            module: None,
            title: Some(title.to_string()),
            description: Some(description.to_string()),
        })
        .collect()
}

/// Resolver over the built-in dashboard routes; every module starts as a
/// placeholder.
pub fn dashboard_resolver() -> PlaceholderResolver {
    PlaceholderResolver::from_declarations(dashboard_declarations())
}
