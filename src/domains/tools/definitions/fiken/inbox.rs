//! Document inbox.

use super::params::{COMPANY_SLUG, PAGE, PAGE_SIZE, SORT_BY};
use crate::domains::tools::endpoint::{Endpoint, PathParam, QueryParam};
use crate::fiken::HttpMethod;

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        name: "get_inbox",
        description: "Returns all documents in the inbox for a company",
        method: HttpMethod::Get,
        path: "/companies/{company_slug}/inbox",
        path_params: &[COMPANY_SLUG],
        query_params: &[
            PAGE,
            PAGE_SIZE,
            QueryParam::string("status", "status", "Filter by status"),
            QueryParam::string("name", "name", "Filter by document name"),
            SORT_BY,
        ],
        body: None,
        deleted: None,
    },
    Endpoint {
        name: "get_inbox_item",
        description: "Returns a specific inbox document",
        method: HttpMethod::Get,
        path: "/companies/{company_slug}/inbox/{inbox_document_id}",
        path_params: &[
            COMPANY_SLUG,
            PathParam::new("inbox_document_id", "The inbox document ID"),
        ],
        query_params: &[],
        body: None,
        deleted: None,
    },
];
