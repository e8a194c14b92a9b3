use crate::extract::Extractor;

/// Inputs covering quoting styles, repeats, odd characters and non-matches
const CORPUS: &[&str] = &[
    "",
    "no urls here",
    r#""https://campusmap.ufl.edu/b" https://campusmap.ufl.edu/a https://campusmap.ufl.edu/a"#,
    "https://campusmap.ufl.edu/z\nhttps://campusmap.ufl.edu/Z\r\nhttps://campusmap.ufl.edu/z",
    r#"{"url":"https://campusmap.ufl.edu/?loc=1","alt":'https://campusmap.ufl.edu/?loc=1'}"#,
    r"https://campusmap.ufl.edu/a\https://campusmap.ufl.edu/b\\https://campusmap.ufl.edu/a",
    "https://campusmap.ufl.edu/é https://campusmap.ufl.edu/e https://campusmap.ufl.edu/f",
    "https://campusmap.ufl.edu/https://campusmap.ufl.edu/x https://campusmap.ufl.edu/",
];

#[cfg(test)]
mod property_tests {
    use super::*;

    #[test]
    fn test_output_strictly_ascending_and_unique() {
        let extractor = Extractor::default();
        for text in CORPUS {
            let urls = extractor.extract(text).into_vec();
            for pair in urls.windows(2) {
                assert!(pair[0] < pair[1], "not strictly ascending for {:?}", text);
            }
        }
    }

    #[test]
    fn test_every_output_matches_pattern() {
        let extractor = Extractor::default();
        for text in CORPUS {
            for url in &extractor.extract(text) {
                assert!(
                    extractor.is_match_exact(url),
                    "{:?} extracted from {:?} does not match",
                    url,
                    text
                );
            }
        }
    }

    #[test]
    fn test_every_output_occurs_in_input() {
        let extractor = Extractor::default();
        for text in CORPUS {
            for url in &extractor.extract(text) {
                assert!(text.contains(url.as_str()));
            }
        }
    }

    #[test]
    fn test_idempotent() {
        let extractor = Extractor::default();
        for text in CORPUS {
            assert_eq!(extractor.extract(text), extractor.extract(text));
        }
    }

    #[test]
    fn test_set_is_dedup_of_raw_matches() {
        let extractor = Extractor::default();
        for text in CORPUS {
            let mut raw: Vec<String> = extractor
                .find_all(text)
                .into_iter()
                .map(str::to_string)
                .collect();
            raw.sort();
            raw.dedup();
            assert_eq!(extractor.extract(text).into_vec(), raw);
        }
    }

    #[test]
    fn test_greedy_run_swallows_second_prefix() {
        // No separator between the two URLs, so they form one match
        let extractor = Extractor::default();
        assert_eq!(
            extractor.extract(CORPUS[7]).into_vec(),
            vec![
                "https://campusmap.ufl.edu/https://campusmap.ufl.edu/x".to_string()
            ]
        );
    }
}
