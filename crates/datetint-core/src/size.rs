//! Size tokens, responsive size specs, and render-time size resolution.
//!
//! The picker's size can be a single fixed token or a per-breakpoint map.
//! Resolution happens once per render pass and is deliberately lenient:
//! unknown token strings degrade to `md` with a warning instead of failing.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Discrete size level for the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum SizeToken {
    Xs,
    Sm,
    #[default]
    Md,
    Xl,
}

impl SizeToken {
    /// Parse a size token string. Unknown values fall back to `md`.
    pub fn parse(s: &str) -> Self {
        match s {
            "xs" => SizeToken::Xs,
            "sm" => SizeToken::Sm,
            "md" => SizeToken::Md,
            "xl" => SizeToken::Xl,
            other => {
                tracing::warn!("Unknown size token '{}', falling back to 'md'", other);
                SizeToken::Md
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SizeToken::Xs => "xs",
            SizeToken::Sm => "sm",
            SizeToken::Md => "md",
            SizeToken::Xl => "xl",
        }
    }
}

impl fmt::Display for SizeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SizeToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SizeToken {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(SizeToken::parse(&s))
    }
}

/// Named viewport-width thresholds of the host design system.
///
/// `min_width` is the smallest viewport (in px) at which the breakpoint
/// applies. `Base` always applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Base,
    Sm,
    Md,
    Lg,
    Xl,
}

impl Breakpoint {
    /// Minimum viewport width (px) at which this breakpoint applies.
    pub const fn min_width(self) -> u32 {
        match self {
            Breakpoint::Base => 0,
            Breakpoint::Sm => 480,
            Breakpoint::Md => 768,
            Breakpoint::Lg => 992,
            Breakpoint::Xl => 1280,
        }
    }
}

/// A size specification: one fixed token, or a per-breakpoint map.
///
/// # Example
///
/// ```toml
/// size = "xl"
/// # or
/// size = { base = "xs", md = "md", xl = "xl" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SizeSpec {
    /// A single token used at every viewport width.
    Fixed(SizeToken),
    /// Breakpoint-dependent tokens. The entry with the largest breakpoint
    /// not exceeding the current viewport wins.
    Responsive(BTreeMap<Breakpoint, SizeToken>),
}

impl Default for SizeSpec {
    fn default() -> Self {
        SizeSpec::Fixed(SizeToken::Md)
    }
}

impl From<SizeToken> for SizeSpec {
    fn from(token: SizeToken) -> Self {
        SizeSpec::Fixed(token)
    }
}

impl SizeSpec {
    /// Build a responsive spec from (breakpoint, token) pairs.
    pub fn responsive<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Breakpoint, SizeToken)>,
    {
        SizeSpec::Responsive(entries.into_iter().collect())
    }
}

/// Viewport knowledge at render time.
///
/// Before the first layout pass the viewport width is unknown; `unset()`
/// models that state. There are no error conditions anywhere in breakpoint
/// resolution; absent matches fall back rather than failing.
#[derive(Debug, Clone, Copy, Default)]
pub struct BreakpointContext {
    viewport_width: Option<u32>,
}

impl BreakpointContext {
    /// A context with no viewport information yet.
    pub fn unset() -> Self {
        Self {
            viewport_width: None,
        }
    }

    /// A context for a known viewport width in px.
    pub fn with_viewport(width: u32) -> Self {
        Self {
            viewport_width: Some(width),
        }
    }

    pub fn viewport_width(&self) -> Option<u32> {
        self.viewport_width
    }

    /// Pick the concrete token for a spec under this viewport.
    ///
    /// Responsive specs select the entry with the largest breakpoint whose
    /// threshold does not exceed the viewport. If no entry matches (or the
    /// viewport is still unknown), the smallest defined breakpoint's value
    /// is used. An empty map yields the default token.
    pub fn pick(&self, spec: &SizeSpec) -> SizeToken {
        match spec {
            SizeSpec::Fixed(token) => *token,
            SizeSpec::Responsive(map) => {
                let smallest = map.values().next().copied().unwrap_or_default();
                match self.viewport_width {
                    Some(width) => map
                        .iter()
                        .filter(|(bp, _)| bp.min_width() <= width)
                        .next_back()
                        .map(|(_, token)| *token)
                        .unwrap_or(smallest),
                    None => smallest,
                }
            }
        }
    }
}

/// Lifecycle of render-time size resolution.
///
/// The resolver starts `Unresolved` (the server-rendering / pre-first-paint
/// window) and transitions to `Resolved` exactly once. It never reverts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ResolvePhase {
    #[default]
    Unresolved,
    Resolved,
}

/// Per-picker size resolver with the one-shot pre-paint gate.
#[derive(Debug, Default)]
pub struct SizeResolver {
    phase: ResolvePhase,
}

impl SizeResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Signal that the viewport became available.
    ///
    /// Hosts that learn the viewport out-of-band (eager hydration) can call
    /// this to skip the empty first pass. Idempotent.
    pub fn viewport_ready(&mut self) {
        self.phase = ResolvePhase::Resolved;
    }

    pub fn is_resolved(&self) -> bool {
        self.phase == ResolvePhase::Resolved
    }

    /// Resolve a spec for the current render pass.
    ///
    /// Returns `None` for the pass in which the resolver is still
    /// `Unresolved`, flipping to `Resolved` as a side effect so every later
    /// pass delegates to the breakpoint context.
    pub fn resolve(&mut self, spec: &SizeSpec, ctx: &BreakpointContext) -> Option<SizeToken> {
        match self.phase {
            ResolvePhase::Unresolved => {
                self.phase = ResolvePhase::Resolved;
                None
            }
            ResolvePhase::Resolved => Some(ctx.pick(spec)),
        }
    }
}
