//! Metric evaluator implementations.
//!
//! Binary checks ([`WhiteBalanceCheck`], [`HighlightClippingCheck`],
//! [`ContrastCheck`]) feed the penalty policy; categorical graders
//! ([`HighlightControl`], [`ShadowDetail`], [`ColorAccuracy`],
//! [`BrightnessBalance`], [`ContrastDepth`], [`Sharpness`]) feed the tally
//! policy. All thresholds are named config fields, not inlined literals.

mod brightness;
mod contrast;
mod highlight;
mod placeholder;
mod shadow;
pub mod stats;
mod white_balance;

pub use brightness::{BrightnessBalance, BrightnessBalanceConfig};
pub use contrast::{ContrastCheck, ContrastConfig, ContrastDepth};
pub use highlight::{
    HighlightClippingCheck, HighlightClippingConfig, HighlightControl, HighlightControlConfig,
};
pub use placeholder::{ColorAccuracy, Sharpness};
pub use shadow::{ShadowDetail, ShadowDetailConfig};
pub use stats::LumaHistogram;
pub use white_balance::{WhiteBalanceCheck, WhiteBalanceConfig};
