use std::fs;

use radixa::get_result;
use walkdir::WalkDir;

/// Runs every `tests/cases/*.case` file: three input lines, a `---` line and
/// the expected output, where `error` stands for any failure.
#[test]
fn case_files_convert() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "case"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        let (input, expected) = split_case(&content).unwrap_or_else(|| panic!("Case {path:?} has no '---' separator"));

        count += 1;
        let actual = get_result(&input).unwrap_or_else(|_| "error".to_string());
        assert_eq!(actual, expected, "Case {path:?} produced the wrong output");
    }

    assert!(count > 0, "No case files found in tests/cases");
}

fn split_case(content: &str) -> Option<(String, String)> {
    let mut input = String::new();
    let mut lines = content.lines();

    for line in lines.by_ref() {
        if line == "---" {
            let expected = lines.next()?.to_string();
            return Some((input, expected));
        }
        input.push_str(line);
        input.push('\n');
    }

    None
}
