//! Registry mapping short model aliases to upstream model identifiers.

/// A supported OpenAI model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelSpec {
    /// Upstream model identifier sent in the request body.
    pub name: &'static str,
    /// Whether the model uses the chat completions API.
    pub chat: bool,
}

/// Every alias accepted by [`ModelSpec::resolve`], for help text.
pub const ALIASES: [&str; 6] = ["turbo", "gpt4", "davinci", "curie", "babbage", "ada"];

impl ModelSpec {
    /// Resolve a short alias to its model spec.
    ///
    /// Lookup is exact and case-sensitive over a fixed alias set; an
    /// unknown alias returns `None`.
    pub fn resolve(alias: &str) -> Option<ModelSpec> {
        let spec = match alias {
            "turbo" => ModelSpec {
                name: "gpt-3.5-turbo",
                chat: true,
            },
            "gpt4" => ModelSpec {
                name: "gpt-4",
                chat: true,
            },
            "davinci" => ModelSpec {
                name: "text-davinci-003",
                chat: false,
            },
            "curie" => ModelSpec {
                name: "text-curie-001",
                chat: false,
            },
            "babbage" => ModelSpec {
                name: "text-babbage-001",
                chat: false,
            },
            "ada" => ModelSpec {
                name: "text-ada-001",
                chat: false,
            },
            _ => return None,
        };
        Some(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_chat_models() {
        let turbo = ModelSpec::resolve("turbo").unwrap();
        assert_eq!(turbo.name, "gpt-3.5-turbo");
        assert!(turbo.chat);

        let gpt4 = ModelSpec::resolve("gpt4").unwrap();
        assert_eq!(gpt4.name, "gpt-4");
        assert!(gpt4.chat);
    }

    #[test]
    fn resolves_legacy_models() {
        for (alias, name) in [
            ("davinci", "text-davinci-003"),
            ("curie", "text-curie-001"),
            ("babbage", "text-babbage-001"),
            ("ada", "text-ada-001"),
        ] {
            let spec = ModelSpec::resolve(alias).unwrap();
            assert_eq!(spec.name, name);
            assert!(!spec.chat);
        }
    }

    #[test]
    fn unknown_alias_is_none() {
        assert_eq!(ModelSpec::resolve("gpt-3.5-turbo"), None);
        assert_eq!(ModelSpec::resolve("Turbo"), None);
        assert_eq!(ModelSpec::resolve(""), None);
    }

    #[test]
    fn every_listed_alias_resolves() {
        for alias in ALIASES {
            assert!(ModelSpec::resolve(alias).is_some(), "{alias}");
        }
    }
}
