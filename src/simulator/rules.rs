/// A canned transcript that replaces the printf-derived output whenever
/// every needle occurs in the source.
#[derive(Debug, Clone, Copy)]
pub struct CannedRule {
    pub name: &'static str,
    pub needles: &'static [&'static str],
    pub output: &'static str,
}

impl CannedRule {
    pub fn matches(&self, source: &str) -> bool {
        self.needles.iter().all(|needle| source.contains(needle))
    }
}

/// Evaluated in order; a later match overwrites an earlier one.
pub const CANNED_RULES: &[CannedRule] = &[
    CannedRule {
        name: "calculator",
        needles: &["a + b", "int a = 10, b = 5"],
        output: "Addition: 10 + 5 = 15\n\
                 Subtraction: 10 - 5 = 5\n\
                 Multiplication: 10 * 5 = 50\n\
                 Division: 10 / 5 = 2\n",
    },
    CannedRule {
        name: "for-loop",
        needles: &["for(int i = 1; i <= 5; i++)"],
        output: "Counting from 1 to 5:\n1 2 3 4 5 \n",
    },
    CannedRule {
        name: "function-call",
        needles: &["add(15, 25)"],
        output: "15 + 25 = 40\n",
    },
];

pub const HELLO_WORLD_NEEDLE: &str = "Hello, World!";
pub const HELLO_WORLD_OUTPUT: &str = "Hello, World!\n";
pub const NO_OUTPUT: &str = "Program executed successfully (no output).\n";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculator_needs_both_needles() {
        let calc = &CANNED_RULES[0];
        assert!(!calc.matches("int a = 10, b = 5;"));
        assert!(!calc.matches("return a + b;"));
        assert!(calc.matches("int a = 10, b = 5; return a + b;"));
    }

    #[test]
    fn test_for_loop_match_is_whitespace_exact() {
        let for_loop = &CANNED_RULES[1];
        assert!(for_loop.matches("for(int i = 1; i <= 5; i++) {}"));
        assert!(!for_loop.matches("for (int i = 1; i <= 5; i++) {}"));
    }

    #[test]
    fn test_calculator_output_lines() {
        assert_eq!(CANNED_RULES[0].output.lines().count(), 4);
        assert!(CANNED_RULES[0].output.starts_with("Addition: 10 + 5 = 15\nSubtraction"));
    }
}
