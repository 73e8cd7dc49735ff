use codeforge::simulator::{simulate, CompileError, SimulationResult, HELLO_WORLD_OUTPUT, NO_OUTPUT};
use codeforge::workspace::{sample, SAMPLE_PROGRAMS};

const CALCULATOR_TRANSCRIPT: &str = "Addition: 10 + 5 = 15\n\
Subtraction: 10 - 5 = 5\n\
Multiplication: 10 * 5 = 50\n\
Division: 10 / 5 = 2\n";

fn output_of(source: &str) -> String {
    match simulate(source) {
        SimulationResult::Success { output } => output,
        SimulationResult::Failure { error } => panic!("expected success, got {}", error),
    }
}

#[cfg(test)]
mod simulator_tests {
    use super::*;

    #[test]
    fn test_missing_include() {
        for src in ["", "int main(){return 0;}", "main", "# include <stdio.h>\nint main"] {
            let result = simulate(src);
            assert!(!result.success());
            assert_eq!(result.error(), Some(CompileError::MissingInclude));
            assert_eq!(result.exit_code(), 1);
            assert_eq!(result.output(), None);
        }
    }

    #[test]
    fn test_missing_include_message() {
        let result = simulate("int main(){return 0;}");
        let message = result.error().map(|e| e.to_string()).unwrap_or_default();
        assert!(message.contains("#include"), "got: {}", message);
    }

    #[test]
    fn test_missing_main() {
        let result = simulate("#include <stdio.h>\nint start() { return 0; }");
        assert_eq!(result.error(), Some(CompileError::MissingMain));
        assert_eq!(result.exit_code(), 1);
    }

    #[test]
    fn test_main_found_anywhere() {
        // Substring check only: "domain" satisfies it
        let result = simulate("#include <stdio.h>\n// domain");
        assert!(result.success());
        assert_eq!(result.output(), Some(NO_OUTPUT));
    }

    #[test]
    fn test_hi_scenario() {
        let result = simulate("#include <stdio.h>\nint main(){printf(\"Hi\\n\");return 0;}");
        assert_eq!(
            result,
            SimulationResult::Success {
                output: "Hi\n".to_string()
            }
        );
        assert_eq!(result.exit_code(), 0);
    }

    #[test]
    fn test_escape_combination() {
        let src = "#include <stdio.h>\nint main(){printf(\"a\\tb\\\\c\\n\");}";
        assert_eq!(output_of(src), "a\tb\\c\n");
    }

    #[test]
    fn test_printf_literals_concatenate() {
        let src = "#include <stdio.h>\nint main(){\n printf(\"one\");\n printf (\"-two\\n\");\n}";
        assert_eq!(output_of(src), "one-two\n");
    }

    #[test]
    fn test_calculator_overrides_other_printfs() {
        let src = "#include <stdio.h>\nint main(){ int a = 10, b = 5; printf(\"noise\\n\"); return a + b; }";
        assert_eq!(output_of(src), CALCULATOR_TRANSCRIPT);
    }

    #[test]
    fn test_syntax_errors_still_succeed() {
        let result = simulate("#include <stdio.h>\nint main( {{{ return");
        assert!(result.success());
        assert_eq!(result.output(), Some(NO_OUTPUT));
    }

    #[test]
    fn test_hello_world_without_printf() {
        let src = "#include <stdio.h>\nint main(){ puts(\"Hello, World!\"); }";
        assert_eq!(output_of(src), HELLO_WORLD_OUTPUT);
    }

    #[test]
    fn test_idempotent() {
        for sample in SAMPLE_PROGRAMS.iter() {
            assert_eq!(simulate(sample.code), simulate(sample.code));
        }
        assert_eq!(simulate("main"), simulate("main"));
    }

    #[test]
    fn test_result_json_shape() {
        let ok = serde_json::to_value(simulate("#include <x>\nint main(){printf(\"Hi\");}")).unwrap();
        assert_eq!(ok, serde_json::json!({"success": true, "output": "Hi", "exitCode": 0}));

        let err = serde_json::to_value(simulate("int main(){}")).unwrap();
        assert_eq!(
            err,
            serde_json::json!({"success": false, "error": "Missing #include directive", "exitCode": 1})
        );
    }
}

#[cfg(test)]
mod sample_program_tests {
    use super::*;

    #[test]
    fn test_hello_world_sample() {
        let s = sample(0).expect("hello world sample");
        assert_eq!(s.name, "Hello World");
        assert_eq!(output_of(s.code), "Hello, World!\n");
    }

    #[test]
    fn test_calculator_sample() {
        let s = sample(1).expect("calculator sample");
        assert_eq!(output_of(s.code), CALCULATOR_TRANSCRIPT);
    }

    #[test]
    fn test_for_loop_sample() {
        let s = sample(2).expect("for loop sample");
        assert_eq!(output_of(s.code), "Counting from 1 to 5:\n1 2 3 4 5 \n");
    }

    #[test]
    fn test_functions_sample() {
        let s = sample(3).expect("functions sample");
        assert_eq!(output_of(s.code), "15 + 25 = 40\n");
    }

    #[test]
    fn test_out_of_range_sample() {
        assert!(sample(4).is_none());
    }
}

#[cfg(test)]
mod runner_tests {
    use codeforge::config::Config;
    use codeforge::runner::run_file;
    use std::io::Write;

    fn write_source(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes()).expect("Failed to write temp file");
        file
    }

    #[test]
    fn test_run_file_raw_output() {
        let file = write_source("#include <stdio.h>\nint main(){printf(\"Hi\\n\");}");
        let mut out = Vec::new();
        let code = run_file(file.path(), &Config::immediate(), true, &mut out).unwrap();
        assert_eq!(code, 0);
        assert_eq!(String::from_utf8(out).unwrap(), "Hi\n");
    }

    #[test]
    fn test_run_file_transcript_on_failure() {
        let file = write_source("int main(){}");
        let mut out = Vec::new();
        let code = run_file(file.path(), &Config::immediate(), false, &mut out).unwrap();
        assert_eq!(code, 1);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Compilation failed!"));
        assert!(text.contains("Error: Missing #include directive"));
    }

    #[test]
    fn test_run_missing_file() {
        let mut out = Vec::new();
        let result = run_file(
            std::path::Path::new("definitely/not/here.c"),
            &Config::immediate(),
            false,
            &mut out,
        );
        assert!(result.is_err());
    }
}
