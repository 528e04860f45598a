//! Batch Report - 批量渲染结果累积
//!
//! 逐单元的结果列表由 BatchRunner 返回给调用方，
//! 汇总数字从列表推导，不单独维护计数器

use std::path::PathBuf;

/// 单元渲染成功的产物信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedAudio {
    /// 写入的字节数
    pub byte_length: usize,
    /// 输出文件路径
    pub path: PathBuf,
}

/// 单个旁白单元的渲染结果
#[derive(Debug, Clone)]
pub struct UnitOutcome {
    pub unit_id: String,
    pub section: Option<String>,
    /// 单元声明的朗读时长（秒）
    pub duration_secs: Option<u32>,
    /// 成功时为产物信息，失败时为错误描述
    pub result: Result<RenderedAudio, String>,
}

impl UnitOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// 批量渲染报告
///
/// 覆盖目录中全部单元，单元失败不会中断批量，
/// 部分失败仅通过 failed() > 0 可见
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    outcomes: Vec<UnitOutcome>,
}

impl BatchReport {
    pub fn new(outcomes: Vec<UnitOutcome>) -> Self {
        Self { outcomes }
    }

    pub fn outcomes(&self) -> &[UnitOutcome] {
        &self.outcomes
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.succeeded()
    }

    /// 成功单元声明时长之和（秒）
    pub fn synthesized_duration_secs(&self) -> u32 {
        self.outcomes
            .iter()
            .filter(|o| o.is_success())
            .filter_map(|o| o.duration_secs)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn success(id: &str, secs: Option<u32>) -> UnitOutcome {
        UnitOutcome {
            unit_id: id.to_string(),
            section: None,
            duration_secs: secs,
            result: Ok(RenderedAudio {
                byte_length: 3,
                path: PathBuf::from(format!("audio/jp/{}.mp3", id)),
            }),
        }
    }

    fn failure(id: &str, secs: Option<u32>) -> UnitOutcome {
        UnitOutcome {
            unit_id: id.to_string(),
            section: None,
            duration_secs: secs,
            result: Err("HTTP 500".to_string()),
        }
    }

    #[test]
    fn test_counts() {
        let report = BatchReport::new(vec![
            success("a", Some(10)),
            failure("b", Some(20)),
            success("c", None),
        ]);
        assert_eq!(report.total(), 3);
        assert_eq!(report.succeeded(), 2);
        assert_eq!(report.failed(), 1);
    }

    #[test]
    fn test_synthesized_duration_counts_successes_only() {
        let report = BatchReport::new(vec![
            success("a", Some(10)),
            failure("b", Some(20)),
            success("c", Some(5)),
            success("d", None),
        ]);
        assert_eq!(report.synthesized_duration_secs(), 15);
    }

    #[test]
    fn test_empty_report() {
        let report = BatchReport::default();
        assert_eq!(report.total(), 0);
        assert_eq!(report.succeeded(), 0);
        assert_eq!(report.synthesized_duration_secs(), 0);
    }
}
