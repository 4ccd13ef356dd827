//! 부분적으로 토사가 퇴적된 원형 암거(culvert)의 정상류 수리 계산 모듈 모음.
//! 단면 기하, 손실계수(mu), 수위차, 유량, 유속을 순서대로 계산한다.

pub mod error;
pub mod geometry;
pub mod input;
pub mod model;
pub mod params;
pub mod rating;
pub mod resistance;

pub use error::CulvertError;
pub use input::{CulvertInput, SiltLayer, WaterLevels};
pub use model::{evaluate, CulvertResult};
pub use params::CulvertParameters;
pub use rating::{rating_curve, RatingPoint};

/// 중력가속도 [m/s²]. 원래 계산표와 동일하게 9.81을 사용한다.
pub const G: f64 = 9.81;
