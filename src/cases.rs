/// A well-formed input sent JSON-encoded to the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestCase {
    pub name: &'static str,
    pub text: &'static str,
    pub description: &'static str,
}

/// A raw request body sent without any re-encoding.
///
/// `expected_error` documents what the service ought to answer; the runner
/// never compares against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MalformedTestCase {
    pub name: &'static str,
    pub payload: &'static str,
    pub expected_error: &'static str,
}

pub const PROBLEMATIC_TEXTS: [TestCase; 4] = [
    TestCase {
        name: "Markdown formatting",
        text: "This is **bold** and *italic* text with `code` and ~~strikethrough~~",
        description: "Text with markdown formatting",
    },
    TestCase {
        name: "Special quotes",
        text: "Text with \u{201C}smart quotes\u{201D} and \u{2018}curly apostrophes\u{2019}",
        description: "Text with special quote characters",
    },
    TestCase {
        name: "Multiple newlines and spaces",
        text: "Text with\n\nmultiple\n\nnewlines\n\nand    multiple    spaces",
        description: "Text with excessive whitespace and newlines",
    },
    TestCase {
        name: "Mixed problematic content",
        text: "**Bold text** with \u{201C}quotes\u{201D} and\n\nnewlines\n\nand    spaces",
        description: "Combination of all problematic elements",
    },
];

// The payloads carry a literal newline and unbalanced quotes on purpose.
pub const MALFORMED_PAYLOADS: [MalformedTestCase; 3] = [
    MalformedTestCase {
        name: "Text with unescaped newlines",
        payload: "{\"text\": \"Hello\nWorld\", \"to\": \"fr\"}",
        expected_error: "Invalid request payload",
    },
    MalformedTestCase {
        name: "Text with special quotes",
        payload: "{\"text\": \"Hello \"World\"\", \"to\": \"fr\"}",
        expected_error: "Invalid request payload",
    },
    MalformedTestCase {
        name: "Text with markdown",
        payload: "{\"text\": \"**Hello** World\", \"to\": \"fr\"}",
        expected_error: "Invalid request payload",
    },
];
