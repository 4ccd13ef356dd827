use thiserror::Error;

/// 암거 수리 계산 중 발생 가능한 오류.
///
/// 모든 오류는 0 나눗셈, 범위 밖 역삼각함수, 음수 제곱근이 일어나기 전에
/// 명시적인 사전 조건 검사로 검출된다.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CulvertError {
    /// 퇴적 단면 비율이 잘못되었거나 통수 단면적이 0 이하인 경우
    #[error("단면 기하 오류: {0}")]
    Geometry(String),
    /// 하류 통수 단면적, Chezy 계수 등 분모가 0 이하인 경우
    #[error("0 또는 음수로 나눔: {0}")]
    Division(String),
    /// 손실계수 합이 0 이하인 경우
    #[error("저항계수 오류: {0}")]
    Resistance(String),
    /// 하류 수위가 상류 수위보다 높은 경우
    #[error("수위차 오류: 하류 수위({downstream} m)가 상류 수위({upstream} m)보다 높습니다.")]
    InvalidHead { upstream: f64, downstream: f64 },
    /// 유한하지 않거나 허용 범위를 벗어난 입력값
    #[error("입력 오류: {0}")]
    InvalidParameter(String),
}
