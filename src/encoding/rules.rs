// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::model::ParamKind;

/// A buffer-encoding strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncodingRule {
    /// Stringify, then encode as NUL-terminated UTF-8.
    Plain,
    /// Serialize to a JSON document, then apply [`EncodingRule::Plain`] to the text.
    Payload,
}

impl EncodingRule {
    /// Returns true if values need a serialization step before buffer conversion.
    #[inline]
    pub fn serializes(self) -> bool {
        matches!(self, Self::Payload)
    }

    /// The rule applied to the output of this rule's serialization step.
    #[inline]
    pub fn buffer_rule(self) -> EncodingRule {
        EncodingRule::Plain
    }
}

/// Fixed mapping from parameter kind to encoding rule, plus the rule for the
/// API key buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodingRules {
    plain: EncodingRule,
    payload: EncodingRule,
    token: EncodingRule,
}

impl EncodingRules {
    pub const fn standard() -> Self {
        Self {
            plain: EncodingRule::Plain,
            payload: EncodingRule::Payload,
            token: EncodingRule::Plain,
        }
    }

    pub fn rule_for(&self, kind: ParamKind) -> EncodingRule {
        match kind {
            ParamKind::Plain => self.plain,
            ParamKind::Payload => self.payload,
        }
    }

    /// The API key is always a plain buffer, whatever the parameter kinds.
    pub fn token_rule(&self) -> EncodingRule {
        self.token
    }
}

impl Default for EncodingRules {
    fn default() -> Self {
        Self::standard()
    }
}
