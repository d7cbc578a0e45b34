//! The picker engine.
//!
//! [`DatePicker`] owns the configuration and the size-resolution lifecycle
//! and turns both into a [`Rendered`] snapshot per pass. The first render
//! pass returns `None` while the size is still unresolved; hosts render
//! nothing for that pass and call again once a viewport exists.

use crate::config::{CalendarProps, InputControl, PickerConfig, RootProps};
use crate::metrics::dimensions;
use crate::sheet::{self, SheetContext};
use crate::size::{BreakpointContext, SizeResolver, SizeToken};
use crate::style::StyleSheet;
use crate::theme::{ColorMode, customize};

/// Host-side inputs that can change between render passes.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderEnv {
    pub color_mode: ColorMode,
    pub viewport: BreakpointContext,
}

impl RenderEnv {
    pub fn new(color_mode: ColorMode, viewport: BreakpointContext) -> Self {
        Self {
            color_mode,
            viewport,
        }
    }
}

/// One render pass worth of output.
#[derive(Debug, Clone)]
pub struct Rendered {
    /// The size token everything below was derived from.
    pub size: SizeToken,
    /// The compiled style sheet for the whole widget.
    pub style: StyleSheet,
    /// Wrapper styling.
    pub root: RootProps,
    /// The input control to render, themed or caller-supplied.
    pub input: InputControl,
    /// Calendar feature toggles, passed through for the host to act on.
    pub calendar: CalendarProps,
}

/// A configured picker with its size-resolution state.
pub struct DatePicker {
    config: PickerConfig,
    resolver: SizeResolver,
}

impl DatePicker {
    pub fn new(config: PickerConfig) -> Self {
        Self {
            config,
            resolver: SizeResolver::new(),
        }
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// Signal that viewport measurements are available, skipping the
    /// deferred first pass.
    pub fn viewport_ready(&mut self) {
        self.resolver.viewport_ready();
    }

    /// Produce a render snapshot, or `None` while the size is unresolved.
    pub fn render(&mut self, env: &RenderEnv) -> Option<Rendered> {
        let size = self.resolver.resolve(&self.config.size, &env.viewport)?;

        let palette = customize(
            env.color_mode,
            self.config.accent.as_deref(),
            self.config.extend_theme.as_ref(),
        );
        let dims = dimensions(size);
        let ctx = SheetContext {
            size,
            input_size: self.config.input.size,
            placement: self.config.placement,
        };
        let style = sheet::compile(&palette, &dims, &ctx);

        // A caller-supplied input is used verbatim. The themed default
        // inherits the picker-wide disabled flag.
        let input = match &self.config.custom_input {
            Some(custom) => custom.clone(),
            None => InputControl {
                size: self.config.input.size,
                disabled: self.config.disabled,
                placeholder: self.config.input.placeholder.clone(),
                classes: self.config.input.classes.clone(),
            },
        };

        Some(Rendered {
            size,
            style,
            root: self.config.root.clone(),
            input,
            calendar: self.config.calendar.clone(),
        })
    }
}
