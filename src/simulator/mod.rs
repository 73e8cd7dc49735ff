//! Fake compile-and-run.
//!
//! Nothing here parses C. A buffer "compiles" when it mentions `#include`
//! and `main`; its "output" is the concatenated printf literals unless one
//! of the canned rules recognises a bundled sample program.

mod printf;
mod result;
mod rules;

use tracing::debug;

pub use printf::{decode_escapes, extract_output};
pub use result::{CompileError, SimulationResult};
pub use rules::{CannedRule, CANNED_RULES, HELLO_WORLD_OUTPUT, NO_OUTPUT};

/// Surface checks gating output derivation. First miss wins.
pub fn try_compile(source: &str) -> Result<(), CompileError> {
    if !source.contains("#include") {
        return Err(CompileError::MissingInclude);
    }
    if !source.contains("main") {
        return Err(CompileError::MissingMain);
    }
    Ok(())
}

/// Simulate compiling and running `source`.
pub fn simulate(source: &str) -> SimulationResult {
    match try_compile(source) {
        Ok(()) => SimulationResult::Success {
            output: derive_output(source),
        },
        Err(error) => {
            debug!(%error, "compile rejected");
            SimulationResult::Failure { error }
        }
    }
}

/// Output for a buffer that already passed [`try_compile`].
pub fn derive_output(source: &str) -> String {
    let mut output = extract_output(source);

    for rule in CANNED_RULES {
        if rule.matches(source) {
            debug!(rule = rule.name, "canned rule matched");
            output = rule.output.to_string();
        }
    }

    if output.is_empty() && source.contains(rules::HELLO_WORLD_NEEDLE) {
        output = HELLO_WORLD_OUTPUT.to_string();
    }
    if output.is_empty() {
        output = NO_OUTPUT.to_string();
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_include_checked_before_main() {
        assert_eq!(try_compile(""), Err(CompileError::MissingInclude));
        assert_eq!(try_compile("int main() {}"), Err(CompileError::MissingInclude));
        assert_eq!(try_compile("#include <x.h>"), Err(CompileError::MissingMain));
        assert_eq!(try_compile("#include <x.h>\nint main"), Ok(()));
    }

    #[test]
    fn test_later_rule_overwrites_earlier() {
        let src = "#include <stdio.h>\nint main() { int a = 10, b = 5; a + b; add(15, 25); }";
        assert_eq!(derive_output(src), "15 + 25 = 40\n");
    }

    #[test]
    fn test_hello_world_fallback_only_when_empty() {
        let src = "#include <stdio.h>\nint main() { puts(\"Hello, World!\"); }";
        assert_eq!(derive_output(src), HELLO_WORLD_OUTPUT);

        let src = "#include <stdio.h>\nint main() { printf(\"x\"); /* Hello, World! */ }";
        assert_eq!(derive_output(src), "x");
    }

    #[test]
    fn test_no_output_fallback() {
        assert_eq!(derive_output("#include <a>\nint main(){return 0;}"), NO_OUTPUT);
    }
}
