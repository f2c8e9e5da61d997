//! String helpers for type and action names

/// Convert a string to snake_case
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    let mut prev_is_lowercase = false;

    for (i, ch) in s.chars().enumerate() {
        if ch.is_uppercase() {
            // Add underscore before uppercase letter if:
            // - Not at the start
            // - Previous character was lowercase
            if i > 0 && prev_is_lowercase {
                result.push('_');
            }
            result.extend(ch.to_lowercase());
            prev_is_lowercase = false;
        } else if ch.is_alphanumeric() {
            result.push(ch);
            prev_is_lowercase = ch.is_lowercase();
        } else if ch == '-' || ch == '_' || ch == ' ' {
            if !result.is_empty() && !result.ends_with('_') {
                result.push('_');
            }
            prev_is_lowercase = false;
        }
    }

    // Remove duplicate underscores and trim
    let mut final_result = String::new();
    let mut prev_underscore = false;
    for ch in result.chars() {
        if ch == '_' {
            if !prev_underscore && !final_result.is_empty() {
                final_result.push(ch);
            }
            prev_underscore = true;
        } else {
            final_result.push(ch);
            prev_underscore = false;
        }
    }

    final_result.trim_matches('_').to_string()
}

/// Convert a string to UpperCamelCase (PascalCase)
pub fn to_upper_camel_case(s: &str) -> String {
    // First convert to snake_case to normalize the input
    let snake = to_snake_case(s);

    // Then split on underscores and capitalize each word
    snake
        .split('_')
        .filter(|s| !s.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            }
        })
        .collect()
}

/// Last segment of a namespaced type name (`App\Models\Post` → `Post`)
pub fn short_type_name(type_name: &str) -> &str {
    type_name
        .trim_end_matches('\\')
        .rsplit('\\')
        .next()
        .unwrap_or(type_name)
}

/// Namespace part of a type name (`App\Models\Post` → `App\Models`)
pub fn type_namespace(type_name: &str) -> &str {
    type_name
        .trim_start_matches('\\')
        .rsplit_once('\\')
        .map_or("", |(namespace, _)| namespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("bulkStore"), "bulk_store");
        assert_eq!(to_snake_case("BlogPost"), "blog_post");
        assert_eq!(to_snake_case("mark-as-read"), "mark_as_read");
        assert_eq!(to_snake_case("HTTPResponse"), "httpresponse");
    }

    #[test]
    fn test_to_upper_camel_case() {
        assert_eq!(to_upper_camel_case("create"), "Create");
        assert_eq!(to_upper_camel_case("bulkStore"), "BulkStore");
        assert_eq!(to_upper_camel_case("mark_as_read"), "MarkAsRead");
        assert_eq!(to_upper_camel_case("LIST"), "List");
    }

    #[test]
    fn test_short_type_name() {
        assert_eq!(short_type_name("App\\Models\\Post"), "Post");
        assert_eq!(short_type_name("\\Post"), "Post");
        assert_eq!(short_type_name("Post"), "Post");
    }

    #[test]
    fn test_type_namespace() {
        assert_eq!(type_namespace("App\\Models\\Post"), "App\\Models");
        assert_eq!(type_namespace("\\App\\Post"), "App");
        assert_eq!(type_namespace("Post"), "");
    }
}
