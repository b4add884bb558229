//! User and company endpoints.

use super::params::{COMPANY_SLUG, PAGE, PAGE_SIZE};
use crate::domains::tools::endpoint::{Endpoint, QueryParam};
use crate::fiken::HttpMethod;

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        name: "get_user",
        description: "Returns information about the authenticated Fiken user",
        method: HttpMethod::Get,
        path: "/user",
        path_params: &[],
        query_params: &[],
        body: None,
        deleted: None,
    },
    Endpoint {
        name: "get_companies",
        description: "Returns all companies the user has access to",
        method: HttpMethod::Get,
        path: "/companies",
        path_params: &[],
        query_params: &[
            PAGE,
            PAGE_SIZE,
            QueryParam::string(
                "sort_by",
                "sortBy",
                "Sort order, e.g. 'name asc' or 'createdDate desc'",
            ),
        ],
        body: None,
        deleted: None,
    },
    Endpoint {
        name: "get_company",
        description: "Returns details of a specific company",
        method: HttpMethod::Get,
        path: "/companies/{company_slug}",
        path_params: &[COMPANY_SLUG],
        query_params: &[],
        body: None,
        deleted: None,
    },
];
