use std::fmt;

use super::*;

/// Outcome of a single activation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// The activation callback ran exactly once.
    Dispatched,
    /// The button is enabled but has no callback, so activation is a no-op.
    NoHandler,
    /// The button is disabled and the callback was suppressed.
    Disabled,
}

/// Observable DOM attributes of a rendered button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonAttrs {
    /// Visible text.
    pub label: String,
    /// `data-variant` value.
    pub variant: &'static str,
    /// `data-size` value.
    pub size: &'static str,
    /// Native `disabled` state.
    pub disabled: bool,
}

/// Resolved button options: the observable attributes plus the activation rule.
#[derive(Clone)]
pub struct ButtonContract {
    label: String,
    variant: ButtonVariant,
    size: ButtonSize,
    disabled: bool,
    on_activate: Option<Callback<()>>,
}

impl ButtonContract {
    /// Enabled primary/medium button with no callback.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            disabled: false,
            on_activate: None,
        }
    }

    /// Sets the style variant.
    pub fn with_variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Sets the size.
    pub fn with_size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Sets the disabled state.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Sets (or clears) the activation callback.
    pub fn with_on_activate(mut self, on_activate: Option<Callback<()>>) -> Self {
        self.on_activate = on_activate;
        self
    }

    /// Displayed label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Resolved style variant.
    pub fn variant(&self) -> ButtonVariant {
        self.variant
    }

    /// Resolved size.
    pub fn size(&self) -> ButtonSize {
        self.size
    }

    /// Whether the button reports a disabled status.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// DOM attributes emitted for this button.
    pub fn attrs(&self) -> ButtonAttrs {
        ButtonAttrs {
            label: self.label.clone(),
            variant: self.variant.token(),
            size: self.size.token(),
            disabled: self.disabled,
        }
    }

    /// Handles one activation event.
    ///
    /// A disabled button never calls its callback, even when the event reaches
    /// it programmatically.
    pub fn activate(&self) -> Activation {
        if self.disabled {
            logging::debug_warn!("activation ignored: button `{}` is disabled", self.label);
            return Activation::Disabled;
        }
        match self.on_activate.as_ref() {
            Some(on_activate) => {
                on_activate.call(());
                Activation::Dispatched
            }
            None => Activation::NoHandler,
        }
    }
}

impl fmt::Debug for ButtonContract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ButtonContract")
            .field("label", &self.label)
            .field("variant", &self.variant)
            .field("size", &self.size)
            .field("disabled", &self.disabled)
            .field("on_activate", &self.on_activate.is_some())
            .finish()
    }
}

#[component]
/// Basic action button.
///
/// Emits `data-variant` and `data-size` tokens and the native `disabled`
/// attribute so tests and stylesheets can observe the resolved options.
pub fn Button(
    /// Text displayed on the button.
    #[prop(into)]
    label: String,
    /// Called once per activation while the button is enabled.
    #[prop(optional)]
    on_activate: Option<Callback<()>>,
    /// Style variant.
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Size token.
    #[prop(default = ButtonSize::Medium)]
    size: ButtonSize,
    /// Disables activation.
    #[prop(optional)]
    disabled: bool,
) -> impl IntoView {
    let contract = ButtonContract::new(label)
        .with_variant(variant)
        .with_size(size)
        .with_disabled(disabled)
        .with_on_activate(on_activate);
    let attrs = contract.attrs();

    view! {
        <button
            type="button"
            class="sample-button"
            disabled=attrs.disabled
            aria-disabled=bool_token(attrs.disabled)
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-disabled=bool_token(attrs.disabled)
            data-variant=attrs.variant
            data-size=attrs.size
            on:click=move |_| {
                contract.activate();
            }
        >
            {attrs.label}
        </button>
    }
}
