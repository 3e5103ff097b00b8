//! Presentational primitives and their resolved render contracts.

use leptos::*;

use crate::tokens::bool_token;
use crate::{ButtonSize, ButtonVariant, CardWidth};

mod button;
mod card;

pub use button::{Activation, Button, ButtonAttrs, ButtonContract, ButtonProps};
pub use card::{Card, CardContract, CardProps, CardRegion};
