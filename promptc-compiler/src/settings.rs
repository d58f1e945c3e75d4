//! Process-wide tunables beyond a single `CompileInput`.
//!
//! All ambient tunables live in one explicit struct, never a global —
//! `compile()` itself never reads the environment, only `promptc-cli`
//! does, so the library stays referentially transparent.

/// Currently holds a single knob: the default token budget a CLI-style
/// caller falls back to when the operator doesn't pass one explicitly.
/// The compiler function never consults this itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompilerSettings {
    pub default_token_budget: u32,
}

impl Default for CompilerSettings {
    fn default() -> Self {
        Self { default_token_budget: 0 }
    }
}

impl CompilerSettings {
    /// Read from environment variables, falling back to [`Default`] for
    /// anything unset or unparsable.
    ///
    /// - `PROMPTC_DEFAULT_TOKEN_BUDGET`: default token budget (default: `0`, unlimited).
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            default_token_budget: std::env::var("PROMPTC_DEFAULT_TOKEN_BUDGET")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.default_token_budget),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unlimited_budget() {
        assert_eq!(CompilerSettings::default().default_token_budget, 0);
    }
}
