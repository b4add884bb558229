//! Purchases, sales, offers and order confirmations.

use super::params::{COMPANY_SLUG, PAGE, PAGE_SIZE, SORT_BY};
use crate::domains::tools::endpoint::{Endpoint, PathParam, QueryParam};
use crate::fiken::HttpMethod;

const DATE: QueryParam = QueryParam::string("date", "date", "Filter by date (YYYY-MM-DD)");

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        name: "get_purchases",
        description: "Returns all purchases for a company",
        method: HttpMethod::Get,
        path: "/companies/{company_slug}/purchases",
        path_params: &[COMPANY_SLUG],
        query_params: &[PAGE, PAGE_SIZE, DATE, SORT_BY],
        body: None,
        deleted: None,
    },
    Endpoint {
        name: "get_purchase",
        description: "Returns a specific purchase",
        method: HttpMethod::Get,
        path: "/companies/{company_slug}/purchases/{purchase_id}",
        path_params: &[COMPANY_SLUG, PathParam::new("purchase_id", "The purchase ID")],
        query_params: &[],
        body: None,
        deleted: None,
    },
    Endpoint {
        name: "create_purchase",
        description: "Creates a new purchase (supplier invoice, receipt or cash purchase)",
        method: HttpMethod::Post,
        path: "/companies/{company_slug}/purchases",
        path_params: &[COMPANY_SLUG],
        query_params: &[],
        body: Some("JSON body with purchase details (date, kind, lines, supplierId, paymentAccount, etc.)"),
        deleted: None,
    },
    Endpoint {
        name: "get_sales",
        description: "Returns all sales (other than invoices) for a company",
        method: HttpMethod::Get,
        path: "/companies/{company_slug}/sales",
        path_params: &[COMPANY_SLUG],
        query_params: &[PAGE, PAGE_SIZE, DATE, SORT_BY],
        body: None,
        deleted: None,
    },
    Endpoint {
        name: "get_sale",
        description: "Returns a specific sale",
        method: HttpMethod::Get,
        path: "/companies/{company_slug}/sales/{sale_id}",
        path_params: &[COMPANY_SLUG, PathParam::new("sale_id", "The sale ID")],
        query_params: &[],
        body: None,
        deleted: None,
    },
    Endpoint {
        name: "create_sale",
        description: "Creates a new sale (cash sale or external invoice)",
        method: HttpMethod::Post,
        path: "/companies/{company_slug}/sales",
        path_params: &[COMPANY_SLUG],
        query_params: &[],
        body: Some("JSON body with sale details (date, kind, lines, customerId, paymentAccount, etc.)"),
        deleted: None,
    },
    Endpoint {
        name: "get_offers",
        description: "Returns all offers for a company",
        method: HttpMethod::Get,
        path: "/companies/{company_slug}/offers",
        path_params: &[COMPANY_SLUG],
        query_params: &[PAGE, PAGE_SIZE],
        body: None,
        deleted: None,
    },
    Endpoint {
        name: "get_offer",
        description: "Returns a specific offer",
        method: HttpMethod::Get,
        path: "/companies/{company_slug}/offers/{offer_id}",
        path_params: &[COMPANY_SLUG, PathParam::new("offer_id", "The offer ID")],
        query_params: &[],
        body: None,
        deleted: None,
    },
    Endpoint {
        name: "get_order_confirmations",
        description: "Returns all order confirmations for a company",
        method: HttpMethod::Get,
        path: "/companies/{company_slug}/orderConfirmations",
        path_params: &[COMPANY_SLUG],
        query_params: &[PAGE, PAGE_SIZE],
        body: None,
        deleted: None,
    },
    Endpoint {
        name: "get_order_confirmation",
        description: "Returns a specific order confirmation",
        method: HttpMethod::Get,
        path: "/companies/{company_slug}/orderConfirmations/{confirmation_id}",
        path_params: &[
            COMPANY_SLUG,
            PathParam::new("confirmation_id", "The order confirmation ID"),
        ],
        query_params: &[],
        body: None,
        deleted: None,
    },
];
