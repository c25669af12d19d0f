// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright © 2023 Adrian <adrian.eddy at gmail>

pub fn select_custom_option<'a>(options: &'a std::collections::HashMap<String, String>, keys: &[&str]) -> Option<&'a str> {
    keys.iter().find_map(|key| options.get(*key).map(|value| value.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_first_matching_key_wins() {
        let mut options = HashMap::new();
        options.insert("resizeMode".to_string(), "cover".to_string());
        options.insert("scale_type".to_string(), "fit_xy".to_string());

        assert_eq!(select_custom_option(&options, &["resize_mode", "resizeMode", "scale_type"]), Some("cover"));
        assert_eq!(select_custom_option(&options, &["scale_type", "resizeMode"]), Some("fit_xy"));
        assert_eq!(select_custom_option(&options, &["missing"]), None);
    }
}
