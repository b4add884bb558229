//! Invoices, invoice drafts and credit notes.

use super::params::{COMPANY_SLUG, CUSTOMER_ID, ISSUE_DATE, LAST_MODIFIED, PAGE, PAGE_SIZE, SETTLED};
use crate::domains::tools::endpoint::{Endpoint, PathParam, QueryParam};
use crate::fiken::HttpMethod;

const INVOICE_ID: PathParam = PathParam::new("invoice_id", "The invoice ID");
const DRAFT_ID: PathParam = PathParam::new("draft_id", "The draft ID");

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        name: "get_invoices",
        description: "Returns all invoices for a company",
        method: HttpMethod::Get,
        path: "/companies/{company_slug}/invoices",
        path_params: &[COMPANY_SLUG],
        query_params: &[
            PAGE,
            PAGE_SIZE,
            ISSUE_DATE,
            LAST_MODIFIED,
            SETTLED,
            CUSTOMER_ID,
            QueryParam::string("order_reference", "orderReference", "Filter by order reference"),
        ],
        body: None,
        deleted: None,
    },
    Endpoint {
        name: "get_invoice",
        description: "Returns a specific invoice",
        method: HttpMethod::Get,
        path: "/companies/{company_slug}/invoices/{invoice_id}",
        path_params: &[COMPANY_SLUG, INVOICE_ID],
        query_params: &[],
        body: None,
        deleted: None,
    },
    Endpoint {
        name: "create_invoice",
        description: "Creates a new invoice",
        method: HttpMethod::Post,
        path: "/companies/{company_slug}/invoices",
        path_params: &[COMPANY_SLUG],
        query_params: &[],
        body: Some("JSON body with invoice details (issueDate, dueDate, customerId, lines, etc.)"),
        deleted: None,
    },
    Endpoint {
        name: "update_invoice",
        description: "Updates an existing invoice",
        method: HttpMethod::Put,
        path: "/companies/{company_slug}/invoices/{invoice_id}",
        path_params: &[COMPANY_SLUG, INVOICE_ID],
        query_params: &[],
        body: Some("JSON body with invoice fields to update"),
        deleted: None,
    },
    Endpoint {
        name: "get_invoice_drafts",
        description: "Returns all invoice drafts for a company",
        method: HttpMethod::Get,
        path: "/companies/{company_slug}/invoices/drafts",
        path_params: &[COMPANY_SLUG],
        query_params: &[PAGE, PAGE_SIZE],
        body: None,
        deleted: None,
    },
    Endpoint {
        name: "get_invoice_draft",
        description: "Returns a specific invoice draft",
        method: HttpMethod::Get,
        path: "/companies/{company_slug}/invoices/drafts/{draft_id}",
        path_params: &[COMPANY_SLUG, DRAFT_ID],
        query_params: &[],
        body: None,
        deleted: None,
    },
    Endpoint {
        name: "create_invoice_draft",
        description: "Creates a new invoice draft",
        method: HttpMethod::Post,
        path: "/companies/{company_slug}/invoices/drafts",
        path_params: &[COMPANY_SLUG],
        query_params: &[],
        body: Some("JSON body with invoice draft details"),
        deleted: None,
    },
    Endpoint {
        name: "update_invoice_draft",
        description: "Updates an existing invoice draft",
        method: HttpMethod::Put,
        path: "/companies/{company_slug}/invoices/drafts/{draft_id}",
        path_params: &[COMPANY_SLUG, DRAFT_ID],
        query_params: &[],
        body: Some("JSON body with invoice draft fields to update"),
        deleted: None,
    },
    Endpoint {
        name: "delete_invoice_draft",
        description: "Deletes an invoice draft",
        method: HttpMethod::Delete,
        path: "/companies/{company_slug}/invoices/drafts/{draft_id}",
        path_params: &[COMPANY_SLUG, DRAFT_ID],
        query_params: &[],
        body: None,
        deleted: Some("Invoice draft"),
    },
    Endpoint {
        name: "create_invoice_from_draft",
        description: "Creates an invoice from an existing draft",
        method: HttpMethod::Post,
        path: "/companies/{company_slug}/invoices/drafts/{draft_id}/createInvoice",
        path_params: &[COMPANY_SLUG, DRAFT_ID],
        query_params: &[],
        body: None,
        deleted: None,
    },
    Endpoint {
        name: "get_credit_notes",
        description: "Returns all credit notes for a company",
        method: HttpMethod::Get,
        path: "/companies/{company_slug}/creditNotes",
        path_params: &[COMPANY_SLUG],
        query_params: &[PAGE, PAGE_SIZE, ISSUE_DATE, LAST_MODIFIED, SETTLED, CUSTOMER_ID],
        body: None,
        deleted: None,
    },
    Endpoint {
        name: "get_credit_note",
        description: "Returns a specific credit note",
        method: HttpMethod::Get,
        path: "/companies/{company_slug}/creditNotes/{credit_note_id}",
        path_params: &[
            COMPANY_SLUG,
            PathParam::new("credit_note_id", "The credit note ID"),
        ],
        query_params: &[],
        body: None,
        deleted: None,
    },
];
