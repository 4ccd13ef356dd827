//! 부분적으로 토사가 퇴적된 원형 암거의 정상류 수리 계산 도구.
//! 핵심 계산(`culvert`)은 라이브러리로 분리하고 CLI는 입력 수집과 출력만 담당한다.

pub mod app;
pub mod args;
pub mod config;
pub mod conversion;
pub mod culvert;
pub mod quantity;
pub mod ui_cli;
pub mod units;
