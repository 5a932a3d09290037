use std::panic::{catch_unwind, AssertUnwindSafe};

use pretty_assertions::assert_eq;

use super::*;
use crate::options::{CodeWriterOptions, NewLine};

// === Block Scope ===

#[test]
fn block_on_empty_writer() {
    let mut writer = CodeWriter::new();
    {
        let mut scope = writer.build_scope();
        scope.write("Inside");
    }
    assert_eq!(writer.as_str(), "{\n    Inside\n}\n");
    assert_eq!(writer.current_indent(), 0);
}

#[test]
fn block_after_code_gets_leading_space() {
    let mut writer = CodeWriter::new();
    writer.write("if (x)");
    {
        let mut scope = writer.build_scope();
        scope.writeln("y();");
    }
    assert_eq!(writer.as_str(), "if (x) {\n    y();\n}\n");
}

#[test]
fn block_after_whitespace_has_no_extra_space() {
    let mut writer = CodeWriter::new();
    writer.writeln("class C");
    drop(writer.build_scope());
    assert_eq!(writer.as_str(), "class C\n{\n}\n");
}

#[test]
fn nested_blocks_indent_and_dedent() {
    let mut writer = CodeWriter::new();
    {
        let mut outer = writer.build_scope();
        outer.writeln("a();");
        {
            let mut inner = outer.build_scope();
            inner.writeln("b();");
        }
        outer.writeln("c();");
    }
    assert_eq!(
        writer.as_str(),
        "{\n    a();\n    {\n        b();\n    }\n    c();\n}\n"
    );
}

#[test]
fn block_uses_configured_newline() {
    let mut writer = CodeWriter::with_options(CodeWriterOptions::with_new_line(NewLine::CrLf))
        .unwrap_or_else(|e| panic!("{e}"));
    {
        let mut scope = writer.build_scope();
        scope.write("Inside");
    }
    assert_eq!(writer.as_str(), "{\r\n    Inside\r\n}\r\n");
    assert_eq!(writer.location().line_index, 3);
}

#[test]
fn block_uses_configured_indent_size() {
    let mut writer =
        CodeWriter::with_options(CodeWriterOptions::with_indent_size(2)).unwrap_or_else(|e| panic!("{e}"));
    {
        let mut scope = writer.build_scope();
        scope.write("x");
    }
    assert_eq!(writer.as_str(), "{\n  x\n}\n");
}

#[test]
fn block_keeps_indent_changed_inside() {
    let mut writer = CodeWriter::new();
    {
        let mut scope = writer.build_scope();
        scope.set_current_indent(12);
        scope.write("x");
    }
    assert_eq!(writer.current_indent(), 12);
    assert_eq!(writer.as_str(), "{\n            x\n            }\n");
}

#[test]
fn block_closes_on_early_return() {
    fn emit(writer: &mut CodeWriter, bail: bool) -> Option<()> {
        let mut scope = writer.build_scope();
        scope.write("start");
        if bail {
            return None;
        }
        scope.write("unreachable");
        Some(())
    }

    let mut writer = CodeWriter::new();
    assert_eq!(emit(&mut writer, true), None);
    assert_eq!(writer.as_str(), "{\n    start\n}\n");
}

#[test]
fn block_closes_on_panic() {
    let mut writer = CodeWriter::new();
    let result = catch_unwind(AssertUnwindSafe(|| {
        let mut scope = writer.build_scope();
        scope.write("Inside");
        panic!("generation failed");
    }));
    assert!(result.is_err());
    assert_eq!(writer.as_str(), "{\n    Inside\n}\n");
    assert_eq!(writer.current_indent(), 0);
}

// === Lambda Scope ===

#[test]
fn lambda_with_parameters() {
    let mut writer = CodeWriter::new();
    {
        let mut scope = writer.build_lambda(false, &["item", "index"]);
        scope.writeln("return item;");
    }
    assert_eq!(
        writer.as_str(),
        "(item, index) => {\n    return item;\n}\n"
    );
}

#[test]
fn async_lambda_without_parameters() {
    let mut writer = CodeWriter::new();
    drop(writer.build_lambda(true, &[]));
    assert_eq!(writer.as_str(), "async () => {\n}\n");
}

// === Line Pragma Scope ===

#[test]
fn line_pragma_without_path_is_noop() {
    let mut writer = CodeWriter::new();
    {
        let mut scope = writer.build_line_pragma(&SourceSpan::unmapped(0, 4, 0, 0));
        assert!(!scope.is_active());
        scope.write("Inside");
    }
    assert_eq!(writer.as_str(), "Inside");
}

#[test]
fn line_pragma_with_empty_path_is_noop() {
    let mut writer = CodeWriter::new();
    writer.set_current_indent(4);
    {
        let mut scope = writer.build_line_pragma(&SourceSpan::new("", 0, 4, 0, 0));
        scope.write("Inside");
    }
    assert_eq!(writer.as_str(), "    Inside");
}

#[test]
fn line_pragma_body_ending_with_newline() {
    let mut writer = CodeWriter::new();
    {
        let mut scope = writer.build_line_pragma(&SourceSpan::new("test.cshtml", 0, 4, 0, 0));
        assert!(scope.is_active());
        scope.writeln("Inside");
    }
    assert_eq!(
        writer.as_str(),
        "#line 5 \"test.cshtml\"\nInside\n\n#line default\n#line hidden\n"
    );
}

#[test]
fn line_pragma_body_without_newline() {
    let mut writer = CodeWriter::new();
    {
        let mut scope = writer.build_line_pragma(&SourceSpan::new("test.cshtml", 0, 4, 0, 0));
        scope.write("Inside");
    }
    assert_eq!(
        writer.as_str(),
        "#line 5 \"test.cshtml\"\nInside\n\n#line default\n#line hidden\n"
    );
}

#[test]
fn line_pragma_starts_on_fresh_line() {
    let mut writer = CodeWriter::new();
    writer.write("var x = ");
    {
        let mut scope = writer.build_line_pragma(&SourceSpan::new("a.cshtml", 10, 2, 3, 5));
        scope.write("Model");
    }
    assert_eq!(
        writer.as_str(),
        "var x = \n#line 3 \"a.cshtml\"\nModel\n\n#line default\n#line hidden\n"
    );
}

#[test]
fn line_pragma_suspends_and_restores_indent() {
    let mut writer = CodeWriter::new();
    writer.set_current_indent(8);
    writer.writeln("outer();");
    {
        let mut scope = writer.build_line_pragma(&SourceSpan::new("a.cshtml", 0, 0, 0, 0));
        assert_eq!(scope.current_indent(), 0);
        scope.writeln("body();");
    }
    assert_eq!(writer.current_indent(), 8);
    writer.write("after();");
    assert_eq!(
        writer.as_str(),
        "        outer();\n#line 1 \"a.cshtml\"\nbody();\n\n#line default\n#line hidden\n        after();"
    );
}

#[test]
fn line_pragma_restores_indent_unconditionally() {
    let mut writer = CodeWriter::new();
    writer.set_current_indent(4);
    {
        let mut scope = writer.build_line_pragma(&SourceSpan::new("a.cshtml", 0, 0, 0, 0));
        scope.set_current_indent(16);
        scope.write("x");
    }
    assert_eq!(writer.current_indent(), 4);
}

#[test]
fn block_inside_line_pragma() {
    let mut writer = CodeWriter::new();
    {
        let mut pragma = writer.build_line_pragma(&SourceSpan::new("v.cshtml", 0, 0, 0, 0));
        let mut block = pragma.build_scope();
        block.write("x();");
    }
    assert_eq!(
        writer.as_str(),
        "#line 1 \"v.cshtml\"\n{\n    x();\n}\n\n#line default\n#line hidden\n"
    );
}

#[test]
fn line_pragma_body_ending_with_bare_cr_keeps_blank_line() {
    let mut writer = CodeWriter::new();
    {
        let mut scope = writer.build_line_pragma(&SourceSpan::new("a.cshtml", 0, 0, 0, 0));
        scope.write("x\r");
    }
    // `\r\n` is one break; the second `\n` is the blank line.
    assert_eq!(
        writer.as_str(),
        "#line 1 \"a.cshtml\"\nx\r\n\n#line default\n#line hidden\n"
    );
    assert_eq!(writer.location().line_index, 5);
}

#[test]
fn line_pragma_body_ending_with_bare_cr_under_crlf() {
    let mut writer = CodeWriter::with_options(CodeWriterOptions::with_new_line(NewLine::CrLf))
        .unwrap_or_else(|e| panic!("{e}"));
    {
        let mut scope = writer.build_line_pragma(&SourceSpan::new("a.cshtml", 0, 0, 0, 0));
        scope.write("x\r");
    }
    assert_eq!(
        writer.as_str(),
        "#line 1 \"a.cshtml\"\r\nx\r\r\n\r\n#line default\r\n#line hidden\r\n"
    );
}

#[test]
fn line_directive_number_is_decimal() {
    let mut writer = CodeWriter::new();
    drop(writer.build_line_pragma(&SourceSpan::new("big.cshtml", 0, 12_344, 0, 0)));
    assert!(writer.as_str().starts_with("#line 12345 \"big.cshtml\"\n"));
}
