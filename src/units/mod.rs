//! 결과 표시용 단위 정의 및 변환 모듈 모음.

pub mod flow;
pub mod length;
pub mod velocity;

pub use flow::{convert_flow, FlowUnit};
pub use length::{convert_length, LengthUnit};
pub use velocity::{convert_velocity, VelocityUnit};
