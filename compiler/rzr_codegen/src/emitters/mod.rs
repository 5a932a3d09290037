//! Declaration and Statement Helpers
//!
//! Thin compositions over [`CodeWriter`] for common C# shapes. Modifier
//! tokens are written verbatim, space-separated, in the order given; no
//! keyword validation happens here.
//!
//! Helpers that take a required identifier return
//! [`CodegenError::EmptyArgument`] for an empty one, before writing
//! anything.

use rzr_ir::SourceSpan;

use crate::error::require;
use crate::scope::{write_line_directive, BlockScope};
use crate::{CodeWriter, CodegenError};

impl CodeWriter {
    /// Write `true` or `false`.
    pub fn write_boolean_literal(&mut self, value: bool) -> &mut Self {
        self.write(if value { "true" } else { "false" })
    }

    /// Write `using <namespace>`, terminated with `;` and a newline when
    /// `end_line` is set.
    pub fn write_using(&mut self, namespace: &str, end_line: bool) -> Result<&mut Self, CodegenError> {
        require("namespace", namespace)?;
        self.write("using ").write(namespace);
        if end_line {
            self.writeln(";");
        }
        Ok(self)
    }

    /// Write `<type> <name> = <value>;`, with `null` when `value` is absent.
    pub fn write_variable_declaration(
        &mut self,
        type_name: &str,
        name: &str,
        value: Option<&str>,
    ) -> Result<&mut Self, CodegenError> {
        require("type_name", type_name)?;
        require("name", name)?;
        self.write(type_name).write(" ").write(name).write(" = ");
        self.write(value.unwrap_or("null")).writeln(";");
        Ok(self)
    }

    /// Write `<name> = `.
    pub fn write_start_assignment(&mut self, name: &str) -> Result<&mut Self, CodegenError> {
        require("name", name)?;
        Ok(self.write(name).write(" = "))
    }

    /// Write `, `.
    pub fn write_parameter_separator(&mut self) -> &mut Self {
        self.write(", ")
    }

    /// Write `new <type>(`.
    pub fn write_start_new_object(&mut self, type_name: &str) -> Result<&mut Self, CodegenError> {
        require("type_name", type_name)?;
        Ok(self.write("new ").write(type_name).write("("))
    }

    /// Write `return `.
    pub fn write_start_return(&mut self) -> &mut Self {
        self.write("return ")
    }

    /// Write `<method>(`.
    pub fn write_start_method_invocation(
        &mut self,
        method_name: &str,
    ) -> Result<&mut Self, CodegenError> {
        require("method_name", method_name)?;
        Ok(self.write(method_name).write("("))
    }

    /// Write `<instance>.<method>(`.
    pub fn write_start_instance_method_invocation(
        &mut self,
        instance_name: &str,
        method_name: &str,
    ) -> Result<&mut Self, CodegenError> {
        require("instance_name", instance_name)?;
        require("method_name", method_name)?;
        self.write(instance_name).write(".");
        self.write_start_method_invocation(method_name)
    }

    /// Write `)`, then `;` and a newline when `end_line` is set.
    pub fn write_end_method_invocation(&mut self, end_line: bool) -> &mut Self {
        self.write(")");
        if end_line {
            self.writeln(";");
        }
        self
    }

    /// Write `<method>(<arg>, <arg>)`, terminated when `end_line` is set.
    pub fn write_method_invocation(
        &mut self,
        method_name: &str,
        arguments: &[&str],
        end_line: bool,
    ) -> Result<&mut Self, CodegenError> {
        self.write_start_method_invocation(method_name)?;
        self.write_separated(arguments);
        Ok(self.write_end_method_invocation(end_line))
    }

    /// Write a field declaration line.
    ///
    /// Each warning in `suppress_warnings` is disabled before the field and
    /// restored after it, in reverse order.
    pub fn write_field(
        &mut self,
        suppress_warnings: &[&str],
        modifiers: &[&str],
        type_name: &str,
        field_name: &str,
    ) -> Result<&mut Self, CodegenError> {
        require("type_name", type_name)?;
        require("field_name", field_name)?;
        for warning in suppress_warnings {
            self.write("#pragma warning disable ").writeln(warning);
        }
        self.write_modifiers(modifiers);
        self.write(type_name).write(" ").write(field_name).writeln(";");
        for warning in suppress_warnings.iter().rev() {
            self.write("#pragma warning restore ").writeln(warning);
        }
        Ok(self)
    }

    /// Write `<modifiers> <type> <name> { get; set; }`.
    pub fn write_auto_property_declaration(
        &mut self,
        modifiers: &[&str],
        type_name: &str,
        property_name: &str,
    ) -> Result<&mut Self, CodegenError> {
        require("type_name", type_name)?;
        require("property_name", property_name)?;
        self.write_modifiers(modifiers);
        self.write(type_name)
            .write(" ")
            .write(property_name)
            .writeln(" { get; set; }");
        Ok(self)
    }

    /// Write a standalone `#line <n> "<path>"` directive on its own line.
    pub fn write_line_number_directive(
        &mut self,
        span: &SourceSpan,
    ) -> Result<&mut Self, CodegenError> {
        let Some(file_path) = span.file_path() else {
            return Err(CodegenError::EmptyArgument {
                argument: "file_path",
            });
        };
        self.ensure_line_start();
        write_line_directive(self, span.line_number(), file_path);
        Ok(self)
    }

    /// Open `namespace <name>` with a block body.
    pub fn build_namespace(&mut self, name: &str) -> Result<BlockScope<'_>, CodegenError> {
        require("name", name)?;
        tracing::trace!(name, "namespace");
        self.write("namespace ").writeln(name);
        Ok(self.build_scope())
    }

    /// Open a class declaration with a block body.
    ///
    /// The base type (if any) precedes the interfaces in the base list.
    pub fn build_class_declaration(
        &mut self,
        modifiers: &[&str],
        name: &str,
        base_type: Option<&str>,
        interfaces: &[&str],
    ) -> Result<BlockScope<'_>, CodegenError> {
        require("name", name)?;
        tracing::trace!(name, ?base_type, interfaces = interfaces.len(), "class");
        self.write_modifiers(modifiers);
        self.write("class ").write(name);

        let base_type = base_type.filter(|base| !base.is_empty());
        if base_type.is_some() || !interfaces.is_empty() {
            self.write(" : ");
            self.write_optional(base_type);
            if base_type.is_some() && !interfaces.is_empty() {
                self.write_parameter_separator();
            }
            self.write_separated(interfaces);
        }
        self.newline();
        Ok(self.build_scope())
    }

    /// Open a method declaration with a block body.
    ///
    /// `parameters` are `(type, name)` pairs.
    pub fn build_method_declaration(
        &mut self,
        modifiers: &[&str],
        return_type: &str,
        name: &str,
        parameters: &[(&str, &str)],
    ) -> Result<BlockScope<'_>, CodegenError> {
        require("return_type", return_type)?;
        require("name", name)?;
        tracing::trace!(name, parameters = parameters.len(), "method");
        self.write_modifiers(modifiers);
        self.write(return_type).write(" ").write(name).write("(");
        for (i, (type_name, parameter_name)) in parameters.iter().enumerate() {
            if i > 0 {
                self.write_parameter_separator();
            }
            self.write(type_name).write(" ").write(parameter_name);
        }
        self.writeln(")");
        Ok(self.build_scope())
    }

    fn write_modifiers(&mut self, modifiers: &[&str]) {
        for modifier in modifiers {
            self.write(modifier).write(" ");
        }
    }

    fn write_separated(&mut self, items: &[&str]) {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.write_parameter_separator();
            }
            self.write(item);
        }
    }
}
