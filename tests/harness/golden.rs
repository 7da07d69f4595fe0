use super::{describe_all, parse_checked, read_tests};
use serde_derive::Deserialize;
use serde_json::from_reader;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Deserialize)]
pub struct TestCase {
    pub description: String,
    pub input: String,
    pub output: Vec<String>,
}

#[derive(Deserialize)]
struct Suite {
    #[serde(default)]
    tests: Vec<TestCase>,
}

pub fn get_test_cases() -> Vec<(PathBuf, TestCase)> {
    let mut test_cases = Vec::new();

    for (path, file) in read_tests!("*.json") {
        let suite = from_reader::<_, Suite>(file)
            .unwrap_or_else(|e| panic!("Malformed suite {}: {e}", path.display()));

        test_cases.extend(suite.tests.into_iter().map(|t| (path.clone(), t)));
    }

    test_cases
}

impl TestCase {
    pub fn run(&self) -> Result<(), String> {
        let result = parse_checked(&self.input);
        let actual = describe_all(&result);

        if actual == self.output {
            Ok(())
        } else {
            Err(format!(
                "{}\nInput: {:?}\nExpected: {:#?}\nActual: {:#?}",
                self.description, self.input, self.output, actual
            ))
        }
    }
}
