//! Parameters shared by many endpoints.

use crate::domains::tools::endpoint::{PathParam, QueryParam};

pub const COMPANY_SLUG: PathParam = PathParam::new("company_slug", "The company slug identifier");

pub const PAGE: QueryParam = QueryParam::integer("page", "page", "Page number (0-based)");

pub const PAGE_SIZE: QueryParam = QueryParam::integer(
    "page_size",
    "pageSize",
    "Number of results per page (max 100)",
);

pub const SORT_BY: QueryParam =
    QueryParam::string("sort_by", "sortBy", "Sort field, e.g. 'createdDate asc'");

pub const LAST_MODIFIED: QueryParam = QueryParam::string(
    "last_modified",
    "lastModified",
    "Filter by last modified date (YYYY-MM-DD)",
);
pub const LAST_MODIFIED_LE: QueryParam =
    QueryParam::string("last_modified_le", "lastModifiedLe", "Filter: last modified ≤ date");
pub const LAST_MODIFIED_LT: QueryParam =
    QueryParam::string("last_modified_lt", "lastModifiedLt", "Filter: last modified < date");
pub const LAST_MODIFIED_GE: QueryParam =
    QueryParam::string("last_modified_ge", "lastModifiedGe", "Filter: last modified ≥ date");
pub const LAST_MODIFIED_GT: QueryParam =
    QueryParam::string("last_modified_gt", "lastModifiedGt", "Filter: last modified > date");

pub const FROM_ACCOUNT: QueryParam =
    QueryParam::string("from_account", "fromAccount", "Filter: from account number");
pub const TO_ACCOUNT: QueryParam =
    QueryParam::string("to_account", "toAccount", "Filter: to account number");

pub const ISSUE_DATE: QueryParam =
    QueryParam::string("issue_date", "issueDate", "Filter by issue date (YYYY-MM-DD)");
pub const SETTLED: QueryParam = QueryParam::string(
    "settled",
    "settled",
    "Filter by settled status: 'true' or 'false'",
);
pub const CUSTOMER_ID: QueryParam =
    QueryParam::string("customer_id", "customerId", "Filter by customer ID");
