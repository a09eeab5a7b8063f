/// Serde 序列化辅助函数
///
/// 提供常用的自定义序列化/反序列化功能

/// 宽松的金额字段模块
///
/// 旧版前端把 EMI 金额格式化成字符串（toFixed(2)）再提交，
/// 所以后端数据里同一字段既可能是 JSON 数字也可能是字符串。
/// 读取时两者都接受，写出时统一为两位小数的字符串。
///
/// # Example (在 common crate 内部)
/// ```
/// use serde::{Serialize, Deserialize};
/// use rust_decimal::Decimal;
///
/// #[derive(Serialize, Deserialize)]
/// struct MyStruct {
///     #[serde(with = "common::utils::serde_helpers::decimal_flex")]
///     pub emi_amount: Decimal,
/// }
/// ```
pub mod decimal_flex {
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer, Serializer};
    use std::str::FromStr;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum NumOrStr {
            Num(f64),
            Str(String),
        }

        match NumOrStr::deserialize(deserializer)? {
            NumOrStr::Num(n) => {
                Decimal::from_f64_retain(n).ok_or_else(|| serde::de::Error::custom("invalid decimal"))
            }
            NumOrStr::Str(s) => Decimal::from_str(s.trim()).map_err(serde::de::Error::custom),
        }
    }

    pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.round_dp(2).to_string())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use serde::{Deserialize, Serialize};
    use std::str::FromStr;

    #[derive(Serialize, Deserialize)]
    struct Wrapper {
        #[serde(with = "super::decimal_flex")]
        amount: Decimal,
    }

    #[test]
    fn test_accepts_number_and_string() {
        let from_num: Wrapper = serde_json::from_str(r#"{"amount": 88.85}"#).unwrap();
        assert_eq!(from_num.amount, Decimal::from_str("88.85").unwrap());

        let from_str: Wrapper = serde_json::from_str(r#"{"amount": "88.85"}"#).unwrap();
        assert_eq!(from_str.amount, Decimal::from_str("88.85").unwrap());
    }

    #[test]
    fn test_serializes_two_decimal_places() {
        let w = Wrapper { amount: Decimal::from_str("88.8487").unwrap() };
        assert_eq!(serde_json::to_string(&w).unwrap(), r#"{"amount":"88.85"}"#);
    }
}
