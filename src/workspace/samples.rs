/// A bundled program the user can load into the current file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleProgram {
    pub name: &'static str,
    pub code: &'static str,
}

pub const SAMPLE_PROGRAMS: [SampleProgram; 4] = [
    SampleProgram {
        name: "Hello World",
        code: "#include <stdio.h>\n\nint main() {\n    printf(\"Hello, World!\\n\");\n    return 0;\n}",
    },
    SampleProgram {
        name: "Basic Calculator",
        code: "#include <stdio.h>\n\nint main() {\n    int a = 10, b = 5;\n    printf(\"Addition: %d + %d = %d\\n\", a, b, a + b);\n    printf(\"Subtraction: %d - %d = %d\\n\", a, b, a - b);\n    printf(\"Multiplication: %d * %d = %d\\n\", a, b, a * b);\n    printf(\"Division: %d / %d = %d\\n\", a, b, a / b);\n    return 0;\n}",
    },
    SampleProgram {
        name: "For Loop Example",
        code: "#include <stdio.h>\n\nint main() {\n    printf(\"Counting from 1 to 5:\\n\");\n    for(int i = 1; i <= 5; i++) {\n        printf(\"%d \", i);\n    }\n    printf(\"\\n\");\n    return 0;\n}",
    },
    SampleProgram {
        name: "Functions Example",
        code: "#include <stdio.h>\n\nint add(int x, int y) {\n    return x + y;\n}\n\nint main() {\n    int result = add(15, 25);\n    printf(\"15 + 25 = %d\\n\", result);\n    return 0;\n}",
    },
];

/// Zero-based lookup.
pub fn sample(index: usize) -> Option<&'static SampleProgram> {
    SAMPLE_PROGRAMS.get(index)
}
