//! Customers and suppliers.

use super::params::{
    COMPANY_SLUG, LAST_MODIFIED, LAST_MODIFIED_GE, LAST_MODIFIED_GT, LAST_MODIFIED_LE,
    LAST_MODIFIED_LT, PAGE, PAGE_SIZE, SORT_BY,
};
use crate::domains::tools::endpoint::{Endpoint, PathParam, QueryParam};
use crate::fiken::HttpMethod;

const CONTACT_ID: PathParam = PathParam::new("contact_id", "The contact ID");

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        name: "get_contacts",
        description: "Retrieves all contacts for a company",
        method: HttpMethod::Get,
        path: "/companies/{company_slug}/contacts",
        path_params: &[COMPANY_SLUG],
        query_params: &[
            PAGE,
            PAGE_SIZE,
            SORT_BY,
            QueryParam::string("name", "name", "Filter by name"),
            QueryParam::string("email", "email", "Filter by email"),
            QueryParam::string(
                "organization_number",
                "organizationNumber",
                "Filter by organization number",
            ),
            QueryParam::string("supplier_number", "supplierNumber", "Filter by supplier number"),
            QueryParam::string("customer_number", "customerNumber", "Filter by customer number"),
            QueryParam::string("group", "group", "Filter by group"),
            LAST_MODIFIED,
            LAST_MODIFIED_LE,
            LAST_MODIFIED_LT,
            LAST_MODIFIED_GE,
            LAST_MODIFIED_GT,
        ],
        body: None,
        deleted: None,
    },
    Endpoint {
        name: "get_contact",
        description: "Retrieves a specific contact",
        method: HttpMethod::Get,
        path: "/companies/{company_slug}/contacts/{contact_id}",
        path_params: &[COMPANY_SLUG, CONTACT_ID],
        query_params: &[],
        body: None,
        deleted: None,
    },
    Endpoint {
        name: "create_contact",
        description: "Creates a new contact",
        method: HttpMethod::Post,
        path: "/companies/{company_slug}/contacts",
        path_params: &[COMPANY_SLUG],
        query_params: &[],
        body: Some(
            "JSON body with contact details (name, email, organizationNumber, customer, supplier, etc.)",
        ),
        deleted: None,
    },
    Endpoint {
        name: "update_contact",
        description: "Updates an existing contact",
        method: HttpMethod::Put,
        path: "/companies/{company_slug}/contacts/{contact_id}",
        path_params: &[COMPANY_SLUG, CONTACT_ID],
        query_params: &[],
        body: Some("JSON body with contact fields to update"),
        deleted: None,
    },
    Endpoint {
        name: "delete_contact",
        description: "Deletes a contact (or sets to inactive if it has associated records)",
        method: HttpMethod::Delete,
        path: "/companies/{company_slug}/contacts/{contact_id}",
        path_params: &[COMPANY_SLUG, CONTACT_ID],
        query_params: &[],
        body: None,
        deleted: Some("Contact"),
    },
];
