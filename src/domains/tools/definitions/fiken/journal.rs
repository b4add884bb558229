//! Journal entries and transactions.

use super::params::{
    COMPANY_SLUG, LAST_MODIFIED, LAST_MODIFIED_GE, LAST_MODIFIED_GT, LAST_MODIFIED_LE,
    LAST_MODIFIED_LT, PAGE, PAGE_SIZE,
};
use crate::domains::tools::endpoint::{Endpoint, PathParam, QueryParam};
use crate::fiken::HttpMethod;

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        name: "get_journal_entries",
        description: "Returns all general journal entries for the specified company",
        method: HttpMethod::Get,
        path: "/companies/{company_slug}/journalEntries",
        path_params: &[COMPANY_SLUG],
        query_params: &[
            PAGE,
            PAGE_SIZE,
            QueryParam::string("date", "date", "Filter by date (YYYY-MM-DD)"),
            QueryParam::string("date_le", "dateLe", "Filter: date ≤ value"),
            QueryParam::string("date_lt", "dateLt", "Filter: date < value"),
            QueryParam::string("date_ge", "dateGe", "Filter: date ≥ value"),
            QueryParam::string("date_gt", "dateGt", "Filter: date > value"),
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
        name: "get_journal_entry",
        description: "Returns a specific journal entry",
        method: HttpMethod::Get,
        path: "/companies/{company_slug}/journalEntries/{journal_entry_id}",
        path_params: &[
            COMPANY_SLUG,
            PathParam::new("journal_entry_id", "The journal entry ID"),
        ],
        query_params: &[],
        body: None,
        deleted: None,
    },
    Endpoint {
        name: "create_general_journal_entry",
        description: "Creates a new general journal entry (fri postering)",
        method: HttpMethod::Post,
        path: "/companies/{company_slug}/generalJournalEntries",
        path_params: &[COMPANY_SLUG],
        query_params: &[],
        body: Some("JSON body with journal entry details (description, date, lines, etc.)"),
        deleted: None,
    },
    Endpoint {
        name: "get_transactions",
        description: "Returns all transactions for a company",
        method: HttpMethod::Get,
        path: "/companies/{company_slug}/transactions",
        path_params: &[COMPANY_SLUG],
        query_params: &[
            PAGE,
            PAGE_SIZE,
            LAST_MODIFIED,
            LAST_MODIFIED_LE,
            LAST_MODIFIED_LT,
            LAST_MODIFIED_GE,
            LAST_MODIFIED_GT,
            QueryParam::string("created_date", "createdDate", "Filter by created date (YYYY-MM-DD)"),
            QueryParam::string("created_date_le", "createdDateLe", "Filter: created date ≤ value"),
            QueryParam::string("created_date_lt", "createdDateLt", "Filter: created date < value"),
            QueryParam::string("created_date_ge", "createdDateGe", "Filter: created date ≥ value"),
            QueryParam::string("created_date_gt", "createdDateGt", "Filter: created date > value"),
        ],
        body: None,
        deleted: None,
    },
];
