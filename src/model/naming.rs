// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Identifier-casing transform from the native export convention to the
/// target's idiomatic convention. Must be pure and total.
pub type NamingTransform = fn(&str) -> String;

/// Translate an upper or lower camel case name, such as `AddProject` or
/// `projectId`, to snake case (`add_project`, `project_id`).
///
/// Every uppercase letter after the first character starts a new segment.
/// Consecutive capitals are not grouped, so `GetAPIKey` becomes `get_a_p_i_key`.
pub fn to_snake_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len() + 4);

    for (pos, c) in name.chars().enumerate() {
        if c.is_uppercase() {
            if pos != 0 {
                result.push('_');
            }
            result.extend(c.to_lowercase());
        } else {
            result.push(c);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_uppercase_boundaries() {
        assert_eq!(to_snake_case("AddProject"), "add_project");
        assert_eq!(to_snake_case("GetAllUsers"), "get_all_users");
        assert_eq!(to_snake_case("DownloadFileFromAcquisition"), "download_file_from_acquisition");
    }

    #[test]
    fn single_word_names_are_lowercased() {
        assert_eq!(to_snake_case("Search"), "search");
        assert_eq!(to_snake_case("id"), "id");
    }

    #[test]
    fn lower_camel_parameters() {
        assert_eq!(to_snake_case("projectId"), "project_id");
        assert_eq!(to_snake_case("search_query"), "search_query");
    }

    #[test]
    fn capitals_are_not_grouped() {
        assert_eq!(to_snake_case("GetAPIKey"), "get_a_p_i_key");
    }

    #[test]
    fn stable_across_runs() {
        let first = to_snake_case("TestBridge");
        for _ in 0..10 {
            assert_eq!(to_snake_case("TestBridge"), first);
        }
        assert_eq!(first, "test_bridge");
    }
}
