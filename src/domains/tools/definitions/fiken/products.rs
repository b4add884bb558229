//! Product register.

use super::params::{COMPANY_SLUG, PAGE, PAGE_SIZE};
use crate::domains::tools::endpoint::{Endpoint, PathParam, QueryParam};
use crate::fiken::HttpMethod;

const PRODUCT_ID: PathParam = PathParam::new("product_id", "The product ID");

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        name: "get_products",
        description: "Returns all products for a company",
        method: HttpMethod::Get,
        path: "/companies/{company_slug}/products",
        path_params: &[COMPANY_SLUG],
        query_params: &[
            PAGE,
            PAGE_SIZE,
            QueryParam::string("name", "name", "Filter by product name"),
            QueryParam::string("product_number", "productNumber", "Filter by product number"),
            QueryParam::string("active", "active", "Filter by active status: 'true' or 'false'"),
        ],
        body: None,
        deleted: None,
    },
    Endpoint {
        name: "get_product",
        description: "Returns a specific product",
        method: HttpMethod::Get,
        path: "/companies/{company_slug}/products/{product_id}",
        path_params: &[COMPANY_SLUG, PRODUCT_ID],
        query_params: &[],
        body: None,
        deleted: None,
    },
    Endpoint {
        name: "create_product",
        description: "Creates a new product",
        method: HttpMethod::Post,
        path: "/companies/{company_slug}/products",
        path_params: &[COMPANY_SLUG],
        query_params: &[],
        body: Some("JSON body with product details (name, unitPrice, incomeAccount, vatType, etc.)"),
        deleted: None,
    },
    Endpoint {
        name: "update_product",
        description: "Updates an existing product",
        method: HttpMethod::Put,
        path: "/companies/{company_slug}/products/{product_id}",
        path_params: &[COMPANY_SLUG, PRODUCT_ID],
        query_params: &[],
        body: Some("JSON body with product fields to update"),
        deleted: None,
    },
    Endpoint {
        name: "delete_product",
        description: "Deletes a product",
        method: HttpMethod::Delete,
        path: "/companies/{company_slug}/products/{product_id}",
        path_params: &[COMPANY_SLUG, PRODUCT_ID],
        query_params: &[],
        body: None,
        deleted: Some("Product"),
    },
];
