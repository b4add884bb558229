//! Fiken API endpoint catalog, one module per area of the API.

mod accounts;
mod bank;
mod companies;
mod contacts;
mod inbox;
mod invoices;
mod journal;
mod params;
mod products;
mod projects;
mod sales;

use crate::domains::tools::endpoint::Endpoint;

/// Every Fiken endpoint exposed as a tool, grouped by area.
pub fn all_endpoints() -> impl Iterator<Item = &'static Endpoint> {
    [
        companies::ENDPOINTS,
        accounts::ENDPOINTS,
        bank::ENDPOINTS,
        contacts::ENDPOINTS,
        journal::ENDPOINTS,
        products::ENDPOINTS,
        invoices::ENDPOINTS,
        sales::ENDPOINTS,
        projects::ENDPOINTS,
        inbox::ENDPOINTS,
    ]
    .into_iter()
    .flatten()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fiken::HttpMethod;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_size() {
        assert_eq!(all_endpoints().count(), 53);
    }

    #[test]
    fn test_names_are_unique() {
        let mut seen = HashSet::new();
        for endpoint in all_endpoints() {
            assert!(seen.insert(endpoint.name), "duplicate tool {}", endpoint.name);
        }
    }

    #[test]
    fn test_path_placeholders_match_params() {
        for endpoint in all_endpoints() {
            assert!(endpoint.path.starts_with('/'), "{}", endpoint.name);

            let placeholders: Vec<&str> = endpoint
                .path
                .split('/')
                .filter_map(|segment| segment.strip_prefix('{')?.strip_suffix('}'))
                .collect();
            let params: Vec<&str> = endpoint.path_params.iter().map(|p| p.name).collect();
            assert_eq!(placeholders, params, "{}", endpoint.name);
        }
    }

    #[test]
    fn test_company_scoped_endpoints_start_with_slug() {
        for endpoint in all_endpoints().filter(|e| e.path.starts_with("/companies/")) {
            assert_eq!(endpoint.path_params[0].name, "company_slug", "{}", endpoint.name);
        }
    }

    #[test]
    fn test_bodies_only_on_writes() {
        for endpoint in all_endpoints() {
            if endpoint.body.is_some() {
                assert!(endpoint.method.sends_json(), "{}", endpoint.name);
            }
            match endpoint.method {
                HttpMethod::Put => assert!(endpoint.body.is_some(), "{}", endpoint.name),
                HttpMethod::Get | HttpMethod::Delete => {
                    assert!(endpoint.body.is_none(), "{}", endpoint.name)
                }
                HttpMethod::Post => {}
            }
        }
    }

    #[test]
    fn test_only_deletes_confirm_deletion() {
        for endpoint in all_endpoints() {
            assert_eq!(
                endpoint.deleted.is_some(),
                endpoint.method == HttpMethod::Delete,
                "{}",
                endpoint.name
            );
        }
    }

    #[test]
    fn test_query_keys_unique_per_endpoint() {
        for endpoint in all_endpoints() {
            let mut keys = HashSet::new();
            for param in endpoint.query_params {
                assert!(keys.insert(param.key), "{}: {}", endpoint.name, param.key);
            }
        }
    }
}
