use nb_store::ingest::{strip_extension, title_from_path, with_extension};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_normalization_is_idempotent(name in "[a-zA-Z0-9 _/.-]{0,24}") {
        let once = with_extension(&name, "ipynb");
        prop_assert_eq!(with_extension(&once, "ipynb"), once.clone());
        prop_assert!(once.ends_with(".ipynb"));
        prop_assert_eq!(once.clone(), format!("{}.ipynb", strip_extension(&name, "ipynb")));
        prop_assert!(!once.starts_with('/'));
    }

    #[test]
    fn test_bare_and_suffixed_names_agree(name in "[a-z0-9_-]{1,12}(/[a-z0-9_-]{1,12}){0,3}") {
        prop_assert_eq!(
            with_extension(&name, "ipynb"),
            with_extension(&format!("{name}.ipynb"), "ipynb")
        );
    }

    #[test]
    fn test_title_has_no_separator_runs(name in "[a-z _-]{0,24}") {
        let title = title_from_path(strip_extension(&name, "ipynb"));
        prop_assert!(!title.contains("  "));
        prop_assert!(!title.contains('_'));
        prop_assert!(!title.contains('-'));
        prop_assert_eq!(title.trim(), title.as_str());
    }
}
