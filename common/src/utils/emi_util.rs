use rust_decimal::{Decimal, MathematicalOps};

/// EMI（等额本息）月供计算
///
/// 标准摊还公式:
///
///   r = R / 100 / 12
///   emi = P × r × (1+r)^N / ((1+r)^N − 1)
///
/// 约定:
/// - r = 0 时公式退化为 0/0，按线性均摊 P / N 处理
/// - 非法输入（P ≤ 0、N = 0、R < 0）返回 0，调用方据此渲染占位符
/// - 结果保留两位小数（货币精度）
///
/// 纯函数，无副作用
pub fn calculate_emi(principal: Decimal, annual_rate_percent: Decimal, months: u32) -> Decimal {
    if principal <= Decimal::ZERO || months == 0 || annual_rate_percent < Decimal::ZERO {
        return Decimal::ZERO;
    }

    let n = Decimal::from(months);

    // 零利率: 线性均摊
    if annual_rate_percent.is_zero() {
        return (principal / n).round_dp(2);
    }

    // 月利率 r = R / 100 / 12
    let r = annual_rate_percent / Decimal::from(100) / Decimal::from(12);
    let factor = (Decimal::ONE + r).powi(months as i64);
    let emi = principal * r * factor / (factor - Decimal::ONE);

    emi.round_dp(2)
}

/// 表单输入版本的 EMI 计算
///
/// 金额或期数还没填完、或者不是数字时返回 0 占位，不报错，
/// 让表单在用户输入过程中始终能渲染预估月供
pub fn emi_from_form(
    amount: Option<&str>,
    plan: Option<&str>,
    annual_rate_percent: Decimal,
) -> Decimal {
    let principal = match amount.and_then(|s| s.trim().parse::<Decimal>().ok()) {
        Some(p) => p,
        None => return Decimal::ZERO,
    };
    let months = match plan.and_then(|s| s.trim().parse::<u32>().ok()) {
        Some(m) => m,
        None => return Decimal::ZERO,
    };

    calculate_emi(principal, annual_rate_percent, months)
}
