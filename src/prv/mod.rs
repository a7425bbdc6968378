//! Drilling mud 순환 계통용 PRV discharge sizing 계산 모듈 모음.

pub mod adequacy;
pub mod mud_weights;
pub mod sizing;

pub use adequacy::*;
pub use mud_weights::*;
pub use sizing::*;
