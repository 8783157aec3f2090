#[derive(Debug, Clone)]
pub struct TestCase {
    name: &'static str,
    group: TestGroup,
    body: Vec<u8>,
}

impl TestCase {
    pub fn new(name: &'static str, group: TestGroup, body: Vec<u8>) -> Self {
        Self { name, group, body }
    }

    pub fn small(name: &'static str, body: Vec<u8>) -> Self {
        Self::new(name, TestGroup::Small, body)
    }

    pub fn large(name: &'static str, body: Vec<u8>) -> Self {
        Self::new(name, TestGroup::Large, body)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn group(&self) -> TestGroup {
        self.group
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

#[derive(Clone, Copy, Debug)]
pub enum TestGroup {
    Small,
    Large,
}

impl TestGroup {
    fn records(self) -> usize {
        match self {
            TestGroup::Small => 8,
            TestGroup::Large => 8 * 1024,
        }
    }
}

/// A json document of `records` objects.
pub fn json_body(group: TestGroup) -> Vec<u8> {
    let records: Vec<String> = (0..group.records())
        .map(|i| format!(r#"{{"id":{i},"name":"user-{i}","tags":["ä","✓"],"active":{}}}"#, i % 2 == 0))
        .collect();
    format!("[{}]", records.join(",")).into_bytes()
}

/// A payload which is text up to its very last byte, the worst case for the classifier.
pub fn almost_text_body(group: TestGroup) -> Vec<u8> {
    let mut body = json_body(group);
    body.push(0xFF);
    body
}

/// Bytes cycling through every value, invalid utf-8 from byte 128 on.
pub fn binary_body(group: TestGroup) -> Vec<u8> {
    (0..group.records() * 64).map(|i| (i % 256) as u8).collect()
}

pub fn test_cases() -> Vec<TestCase> {
    vec![
        TestCase::small("json_small", json_body(TestGroup::Small)),
        TestCase::large("json_large", json_body(TestGroup::Large)),
        TestCase::large("almost_text_large", almost_text_body(TestGroup::Large)),
        TestCase::small("binary_small", binary_body(TestGroup::Small)),
        TestCase::large("binary_large", binary_body(TestGroup::Large)),
    ]
}
