//! Bookkeeping accounts and balances.

use super::params::{COMPANY_SLUG, FROM_ACCOUNT, PAGE, PAGE_SIZE, TO_ACCOUNT};
use crate::domains::tools::endpoint::{Endpoint, PathParam, QueryParam};
use crate::fiken::HttpMethod;

const BALANCE_DATE: QueryParam =
    QueryParam::string("date", "date", "Date in YYYY-MM-DD format").required();

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        name: "get_accounts",
        description: "Retrieves the bookkeeping accounts for the current year",
        method: HttpMethod::Get,
        path: "/companies/{company_slug}/accounts",
        path_params: &[COMPANY_SLUG],
        query_params: &[FROM_ACCOUNT, TO_ACCOUNT, PAGE, PAGE_SIZE],
        body: None,
        deleted: None,
    },
    Endpoint {
        name: "get_account",
        description: "Retrieves a specific bookkeeping account",
        method: HttpMethod::Get,
        path: "/companies/{company_slug}/accounts/{account_code}",
        path_params: &[
            COMPANY_SLUG,
            PathParam::new(
                "account_code",
                "The account code (e.g. '3020' or '1500:10001')",
            ),
        ],
        query_params: &[],
        body: None,
        deleted: None,
    },
    Endpoint {
        name: "get_account_balances",
        description: "Retrieves bookkeeping accounts and closing balances for a given date",
        method: HttpMethod::Get,
        path: "/companies/{company_slug}/accountBalances",
        path_params: &[COMPANY_SLUG],
        query_params: &[BALANCE_DATE, FROM_ACCOUNT, TO_ACCOUNT, PAGE, PAGE_SIZE],
        body: None,
        deleted: None,
    },
    Endpoint {
        name: "get_account_balance",
        description: "Retrieves balance for a specific bookkeeping account on a given date",
        method: HttpMethod::Get,
        path: "/companies/{company_slug}/accountBalances/{account_code}",
        path_params: &[COMPANY_SLUG, PathParam::new("account_code", "The account code")],
        query_params: &[BALANCE_DATE],
        body: None,
        deleted: None,
    },
];
