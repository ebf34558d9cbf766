//! プロセスレコード

use crate::Result;
use std::fmt;

/// プロセス（名前、ID、呼び出し先ID、実行時間）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Process {
    pub name: String,
    pub id: i32,
    /// 次に呼び出すプロセスのID
    pub call: i32,
    /// 実行時間（ミリ秒）
    pub duration: u32,
}

impl Process {
    /// 新しいプロセスを作成する
    pub fn new(name: impl Into<String>, id: i32, call: i32, duration: u32) -> Self {
        Self {
            name: name.into(),
            id,
            call,
            duration,
        }
    }

    /// 区切り文字で分割された1レコード（`name|id|call|duration`）をパースする
    pub fn parse_record(line: &str, delimiter: char) -> Result<Self> {
        let fields: Vec<&str> = line.split(delimiter).map(str::trim).collect();
        if fields.len() != 4 {
            return Err(anyhow::anyhow!(
                "Expected 4 fields separated by '{}', found {}",
                delimiter,
                fields.len()
            ));
        }

        let name = fields[0];
        if name.is_empty() {
            return Err(anyhow::anyhow!("Process name is empty"));
        }

        Ok(Self {
            name: name.to_string(),
            id: parse_field("id", fields[1])?,
            call: parse_field("call", fields[2])?,
            duration: parse_field("duration", fields[3])?,
        })
    }
}

impl Default for Process {
    fn default() -> Self {
        Self::new("test", -1, -1, 0)
    }
}

impl fmt::Display for Process {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.name, self.id, self.call, self.duration)
    }
}

/// 数値フィールドをパースする
fn parse_field<T>(field: &str, value: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    value
        .parse::<T>()
        .map_err(|e| anyhow::anyhow!("Invalid {} '{}': {}", field, value, e))
}
