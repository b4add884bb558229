//! Projects (requires the projects module in Fiken).

use super::params::{COMPANY_SLUG, PAGE, PAGE_SIZE};
use crate::domains::tools::endpoint::{Endpoint, PathParam, QueryParam};
use crate::fiken::HttpMethod;

const PROJECT_ID: PathParam = PathParam::new("project_id", "The project ID");

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        name: "get_projects",
        description: "Returns all projects for a company (requires projects module)",
        method: HttpMethod::Get,
        path: "/companies/{company_slug}/projects",
        path_params: &[COMPANY_SLUG],
        query_params: &[
            PAGE,
            PAGE_SIZE,
            QueryParam::string(
                "completed",
                "completed",
                "Filter by completed status: 'true' or 'false'",
            ),
        ],
        body: None,
        deleted: None,
    },
    Endpoint {
        name: "get_project",
        description: "Returns a specific project",
        method: HttpMethod::Get,
        path: "/companies/{company_slug}/projects/{project_id}",
        path_params: &[COMPANY_SLUG, PROJECT_ID],
        query_params: &[],
        body: None,
        deleted: None,
    },
    Endpoint {
        name: "create_project",
        description: "Creates a new project",
        method: HttpMethod::Post,
        path: "/companies/{company_slug}/projects",
        path_params: &[COMPANY_SLUG],
        query_params: &[],
        body: Some("JSON body with project details (name, description, startDate, endDate, etc.)"),
        deleted: None,
    },
    Endpoint {
        name: "update_project",
        description: "Updates an existing project",
        method: HttpMethod::Put,
        path: "/companies/{company_slug}/projects/{project_id}",
        path_params: &[COMPANY_SLUG, PROJECT_ID],
        query_params: &[],
        body: Some("JSON body with project fields to update"),
        deleted: None,
    },
];
