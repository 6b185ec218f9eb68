//! Placeholder substitution
//!
//! The base template contains `{{NAME}}` tokens from a fixed set. Substitution
//! walks the template once, left to right: each recognised token is replaced
//! by its value, unrecognised tokens are copied unchanged, and replacement text
//! is never scanned again, so a value that happens to contain `{{HOST_NAME}}`
//! stays literal.

use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::OnceLock;

/// A recognised template token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    PresetName,
    HostName,
    StateVersion,
    UserName,
    UserDescription,
    Timezone,
    DefaultLocale,
    LcAddress,
    LcIdentification,
    LcMeasurement,
    LcMonetary,
    LcName,
    LcNumeric,
    LcPaper,
    LcTelephone,
    LcTime,
    Keymap,
    FlakeInputs,
    FlakeOutputArgs,
    FlakeSpecialArgs,
    DevShellsInjection,
    ModuleInjectionPoint,
}

impl Placeholder {
    /// Every recognised token
    pub const ALL: [Placeholder; 22] = [
        Self::PresetName,
        Self::HostName,
        Self::StateVersion,
        Self::UserName,
        Self::UserDescription,
        Self::Timezone,
        Self::DefaultLocale,
        Self::LcAddress,
        Self::LcIdentification,
        Self::LcMeasurement,
        Self::LcMonetary,
        Self::LcName,
        Self::LcNumeric,
        Self::LcPaper,
        Self::LcTelephone,
        Self::LcTime,
        Self::Keymap,
        Self::FlakeInputs,
        Self::FlakeOutputArgs,
        Self::FlakeSpecialArgs,
        Self::DevShellsInjection,
        Self::ModuleInjectionPoint,
    ];

    /// Name between the braces
    pub fn name(self) -> &'static str {
        match self {
            Self::PresetName => "PRESET_NAME",
            Self::HostName => "HOST_NAME",
            Self::StateVersion => "STATE_VERSION",
            Self::UserName => "USER_NAME",
            Self::UserDescription => "USER_DESCRIPTION",
            Self::Timezone => "TIMEZONE",
            Self::DefaultLocale => "DEFAULT_LOCALE",
            Self::LcAddress => "LC_ADDRESS",
            Self::LcIdentification => "LC_IDENTIFICATION",
            Self::LcMeasurement => "LC_MEASUREMENT",
            Self::LcMonetary => "LC_MONETARY",
            Self::LcName => "LC_NAME",
            Self::LcNumeric => "LC_NUMERIC",
            Self::LcPaper => "LC_PAPER",
            Self::LcTelephone => "LC_TELEPHONE",
            Self::LcTime => "LC_TIME",
            Self::Keymap => "KEYMAP",
            Self::FlakeInputs => "FLAKE_INPUTS",
            Self::FlakeOutputArgs => "FLAKE_OUTPUT_ARGS",
            Self::FlakeSpecialArgs => "FLAKE_SPECIAL_ARGS",
            Self::DevShellsInjection => "DEVSHELLS_INJECTION",
            Self::ModuleInjectionPoint => "MODULE_INJECTION_POINT",
        }
    }

    /// Token as it appears in the template
    pub fn token(self) -> String {
        format!("{{{{{}}}}}", self.name())
    }

    /// Look up a token by the name between the braces
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }
}

fn token_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{\{([A-Z0-9_]+)\}\}").expect("token pattern is valid"))
}

/// Values for each placeholder
#[derive(Debug, Clone, Default)]
pub struct Substitutions {
    values: HashMap<Placeholder, String>,
}

impl Substitutions {
    /// Empty substitution map
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value of one placeholder
    pub fn set(&mut self, placeholder: Placeholder, value: impl Into<String>) -> &mut Self {
        self.values.insert(placeholder, value.into());
        self
    }

    /// Value of one placeholder, if set
    pub fn get(&self, placeholder: Placeholder) -> Option<&str> {
        self.values.get(&placeholder).map(String::as_str)
    }

    /// Apply the map to a template in a single pass
    pub fn apply(&self, template: &str) -> String {
        token_regex()
            .replace_all(template, |caps: &Captures<'_>| {
                Placeholder::from_name(&caps[1])
                    .and_then(|p| self.values.get(&p))
                    .cloned()
                    .unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    }
}

/// Starter template containing every placeholder once
pub fn starter_template() -> &'static str {
    r#"{
  description = "{{PRESET_NAME}} - generated by legoflake";

  inputs = {
    nixpkgs.url = "github:NixOS/nixpkgs/nixos-unstable";
    nixpkgs-master.url = "github:NixOS/nixpkgs/master";
{{FLAKE_INPUTS}}
  };

  outputs = { self, nixpkgs, nixpkgs-master, {{FLAKE_OUTPUT_ARGS}}... }:
    let
      system = "x86_64-linux";
      pkgs = nixpkgs.legacyPackages.${system};
    in {
    nixosConfigurations."{{HOST_NAME}}" = nixpkgs.lib.nixosSystem {
      inherit system;
      specialArgs = {
        pkgs-master = import nixpkgs-master { inherit system; config.allowUnfree = true; };
{{FLAKE_SPECIAL_ARGS}}
      };
      modules = [
        ({ ... }: {
          networking.hostName = "{{HOST_NAME}}";
          system.stateVersion = "{{STATE_VERSION}}";
          time.timeZone = "{{TIMEZONE}}";
          i18n.defaultLocale = "{{DEFAULT_LOCALE}}";
          i18n.extraLocaleSettings = {
            LC_ADDRESS = "{{LC_ADDRESS}}";
            LC_IDENTIFICATION = "{{LC_IDENTIFICATION}}";
            LC_MEASUREMENT = "{{LC_MEASUREMENT}}";
            LC_MONETARY = "{{LC_MONETARY}}";
            LC_NAME = "{{LC_NAME}}";
            LC_NUMERIC = "{{LC_NUMERIC}}";
            LC_PAPER = "{{LC_PAPER}}";
            LC_TELEPHONE = "{{LC_TELEPHONE}}";
            LC_TIME = "{{LC_TIME}}";
          };
          console.keyMap = "{{KEYMAP}}";
          users.users."{{USER_NAME}}" = {
            isNormalUser = true;
            description = "{{USER_DESCRIPTION}}";
            extraGroups = [ "networkmanager" "wheel" ];
          };
        })
{{MODULE_INJECTION_POINT}}
      ];
    };

    {{DEVSHELLS_INJECTION}}
  };
}
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_token_format() {
        assert_eq!(Placeholder::HostName.token(), "{{HOST_NAME}}");
    }

    #[test]
    fn test_from_name_roundtrip() {
        for placeholder in Placeholder::ALL {
            assert_eq!(Placeholder::from_name(placeholder.name()), Some(placeholder));
        }
        assert_eq!(Placeholder::from_name("NOPE"), None);
    }

    #[test]
    fn test_replaces_every_occurrence() {
        let mut subs = Substitutions::new();
        subs.set(Placeholder::HostName, "box");
        assert_eq!(subs.apply("{{HOST_NAME}}-{{HOST_NAME}}"), "box-box");
    }

    #[test]
    fn test_unknown_tokens_left_untouched() {
        let subs = Substitutions::new();
        assert_eq!(subs.apply("a {{SOMETHING_ELSE}} b"), "a {{SOMETHING_ELSE}} b");
    }

    #[test]
    fn test_known_but_unset_token_left_untouched() {
        let subs = Substitutions::new();
        assert_eq!(subs.apply("{{KEYMAP}}"), "{{KEYMAP}}");
    }

    #[test]
    fn test_values_are_not_rescanned() {
        let mut subs = Substitutions::new();
        subs.set(Placeholder::UserDescription, "{{HOST_NAME}}");
        subs.set(Placeholder::HostName, "box");
        assert_eq!(
            subs.apply("{{USER_DESCRIPTION}} on {{HOST_NAME}}"),
            "{{HOST_NAME}} on box"
        );
    }

    #[test]
    fn test_starter_template_contains_every_token() {
        let template = starter_template();
        for placeholder in Placeholder::ALL {
            assert!(
                template.contains(&placeholder.token()),
                "missing {}",
                placeholder.token()
            );
        }
    }

    #[test]
    fn test_nix_interpolation_is_not_a_token() {
        let subs = Substitutions::new();
        assert_eq!(subs.apply("pkgs.${system}"), "pkgs.${system}");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(crate::config::defaults::MIN_PROPTEST_ITERATIONS))]

        /// Every known token is replaced and none survives when all are set
        #[test]
        fn prop_all_tokens_substituted(
            picks in proptest::collection::vec(0usize..22, 0..40),
            filler in "[a-z ;=\n]{0,12}",
        ) {
            let mut template = String::new();
            for i in &picks {
                template.push_str(&filler);
                template.push_str(&Placeholder::ALL[*i].token());
            }

            let mut subs = Substitutions::new();
            for placeholder in Placeholder::ALL {
                subs.set(placeholder, format!("<{}>", placeholder.name().to_lowercase()));
            }
            let output = subs.apply(&template);

            for placeholder in Placeholder::ALL {
                prop_assert!(!output.contains(&placeholder.token()));
                let expected = picks.iter().filter(|i| Placeholder::ALL[**i] == placeholder).count();
                let marker = format!("<{}>", placeholder.name().to_lowercase());
                prop_assert_eq!(output.matches(&marker).count(), expected);
            }
        }
    }
}
