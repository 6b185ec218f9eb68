//! Snippet generation from descriptors
//!
//! Flake inputs contribute to four places in the generated flake: the
//! `inputs` block, the `outputs` argument list, the `specialArgs` bindings,
//! and the parameter list of every module wrapper. The last two must list the
//! same aliases in the same order, so they are derived together here and the
//! wrapper parameters travel as one [`WrapperArgs`] value.

use std::fmt;

use crate::config::defaults::BASELINE_WRAPPER_ARGS;
use crate::core::descriptor::{DevShell, FlakeInput};

/// Indentation of input declarations
const INPUT_INDENT: &str = "    ";

/// Indentation of `specialArgs` bindings
const BINDING_INDENT: &str = "        ";

/// Parameter list shared by every generated module wrapper
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WrapperArgs {
    extra: Vec<String>,
}

impl WrapperArgs {
    /// Wrapper parameters with the given extra aliases after the baseline
    pub fn with_extra(extra: Vec<String>) -> Self {
        Self { extra }
    }

    /// Aliases contributed by flake inputs, in order
    pub fn extra(&self) -> &[String] {
        &self.extra
    }

    /// Every parameter name: baseline first, then the extra aliases
    pub fn names(&self) -> impl Iterator<Item = &str> {
        BASELINE_WRAPPER_ARGS
            .iter()
            .copied()
            .chain(self.extra.iter().map(String::as_str))
    }
}

impl fmt::Display for WrapperArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.names().collect();
        f.write_str(&names.join(", "))
    }
}

/// Text blocks derived from the flake input list
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FlakeSnippets {
    /// Declarations for the `inputs` attribute set
    pub inputs_block: String,
    /// Names destructured by the `outputs` function, each followed by `, `
    pub output_args: String,
    /// `alias = name.attr;` bindings for `specialArgs`
    pub special_args: String,
    /// Parameters of every module wrapper
    pub wrapper_args: WrapperArgs,
}

impl FlakeSnippets {
    /// Derive all snippets from the flake inputs in one pass
    pub fn generate(inputs: &[FlakeInput]) -> Self {
        if inputs.is_empty() {
            return Self::default();
        }

        let mut input_lines = Vec::with_capacity(inputs.len());
        let mut output_args = String::new();
        let mut bindings = Vec::with_capacity(inputs.len());
        let mut aliases = Vec::with_capacity(inputs.len());

        for input in inputs {
            let mut line = format!("{INPUT_INDENT}{}.url = \"{}\";", input.name, input.url);
            if input.follows_nixpkgs {
                line.push_str(&format!(
                    "\n{INPUT_INDENT}{}.inputs.nixpkgs.follows = \"nixpkgs\";",
                    input.name
                ));
            }
            input_lines.push(line);

            output_args.push_str(&input.name);
            output_args.push_str(", ");

            bindings.push(format!(
                "{BINDING_INDENT}{} = {}.{};",
                input.arg, input.name, input.attr
            ));

            aliases.push(input.arg.clone());
        }

        Self {
            inputs_block: input_lines.join("\n"),
            output_args,
            special_args: bindings.join("\n"),
            wrapper_args: WrapperArgs::with_extra(aliases),
        }
    }
}

/// Render the `devShells` block; empty when there are no shells
pub fn render_dev_shells(shells: &[DevShell]) -> String {
    if shells.is_empty() {
        return String::new();
    }

    let mut out = String::from("devShells.${system} = {\n");
    for shell in shells {
        out.push_str(&format!("      \"{}\" = pkgs.mkShell {{\n", shell.name));
        out.push_str("        packages = with pkgs; [\n");
        for package in &shell.packages {
            out.push_str(&format!("          {package}\n"));
        }
        out.push_str("        ];\n");
        if !shell.shell_hook.is_empty() {
            out.push_str(&format!(
                "        shellHook = ''\n          {}\n        '';\n",
                shell.shell_hook
            ));
        }
        out.push_str("      };\n");
    }
    out.push_str("    };\n");
    out
}
