//! 핵심 계산 로직을 라이브러리로 분리하여 CLI와 데스크톱 GUI가 같은 코드를 공유한다.

pub mod app;
pub mod config;
pub mod conversion;
pub mod i18n;
pub mod prv;
pub mod quantity;
pub mod ui_cli;
pub mod units;
