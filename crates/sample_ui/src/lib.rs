//! Sample presentational component library.
//!
//! The crate exports two Leptos components, [`Button`] and [`Card`], together
//! with their option records ([`ButtonProps`], [`CardProps`]) and the stable
//! `data-*` DOM contract that documentation demos and end-to-end tests read:
//! `data-variant` and `data-size` on buttons, `data-component="card"` and
//! `data-part="header|content|footer"` on cards.
//!
//! Each component resolves its options into a plain contract value
//! ([`ButtonContract`], [`CardContract`]) before rendering, so the observable
//! output can be checked without a browser.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod primitives;
mod tokens;
mod width;

pub use primitives::{
    Activation, Button, ButtonAttrs, ButtonContract, ButtonProps, Card, CardContract, CardProps,
    CardRegion,
};
pub use tokens::{ButtonSize, ButtonVariant, TokenError};
pub use width::{CardWidth, WidthError};

/// Convenience imports for crates consuming the component set.
pub mod prelude {
    pub use crate::{
        Activation, Button, ButtonContract, ButtonProps, ButtonSize, ButtonVariant, Card,
        CardContract, CardProps, CardRegion, CardWidth,
    };
}
