//! Bank accounts and bank balances.

use super::params::{COMPANY_SLUG, PAGE, PAGE_SIZE};
use crate::domains::tools::endpoint::{Endpoint, PathParam, QueryParam};
use crate::fiken::HttpMethod;

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        name: "get_bank_accounts",
        description: "Retrieves all bank accounts for a company",
        method: HttpMethod::Get,
        path: "/companies/{company_slug}/bankAccounts",
        path_params: &[COMPANY_SLUG],
        query_params: &[
            PAGE,
            PAGE_SIZE,
            QueryParam::string(
                "inactive",
                "inactive",
                "'true' to return inactive accounts, 'false' for active",
            ),
        ],
        body: None,
        deleted: None,
    },
    Endpoint {
        name: "get_bank_account",
        description: "Retrieves a specific bank account",
        method: HttpMethod::Get,
        path: "/companies/{company_slug}/bankAccounts/{bank_account_id}",
        path_params: &[
            COMPANY_SLUG,
            PathParam::new("bank_account_id", "The bank account ID"),
        ],
        query_params: &[],
        body: None,
        deleted: None,
    },
    Endpoint {
        name: "create_bank_account",
        description: "Creates a new bank account. Types: NORMAL, TAX_DEDUCTION, FOREIGN, CREDIT_CARD",
        method: HttpMethod::Post,
        path: "/companies/{company_slug}/bankAccounts",
        path_params: &[COMPANY_SLUG],
        query_params: &[],
        body: Some("JSON body with bank account details (name, bankAccountNumber, type, etc.)"),
        deleted: None,
    },
    Endpoint {
        name: "get_bank_balances",
        description: "Retrieves all bank balances for a company",
        method: HttpMethod::Get,
        path: "/companies/{company_slug}/bankBalances",
        path_params: &[COMPANY_SLUG],
        query_params: &[
            QueryParam::string("date", "date", "Date in YYYY-MM-DD format"),
            PAGE,
            PAGE_SIZE,
        ],
        body: None,
        deleted: None,
    },
];
