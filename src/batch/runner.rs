//! # 批量执行器
//!
//! 并行执行批量处理任务。
//!
//! ## 功能
//! - 基于 rayon 的并行迭代，结果保持输入顺序
//! - 进度条显示
//! - 错误收集与汇总报告
//!
//! ## 依赖关系
//! - 被 `commands/batch.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `rayon` 进行并行计算

use crate::error::{LorentzError, Result};
use crate::utils::progress;

use rayon::prelude::*;

/// 单个任务处理结果
#[derive(Debug, Clone)]
pub enum ProcessResult<R> {
    /// 处理成功
    Success(R),
    /// 跳过了写出步骤（如输出已存在），但仍产生结果
    Skipped(R, String), // (结果, 跳过原因)
    /// 处理失败
    Failed(String, String), // (任务名称, 错误信息)
}

/// 批量处理结果统计
#[derive(Debug)]
pub struct BatchResult<R> {
    /// 成功数量
    pub success: usize,
    /// 跳过数量
    pub skipped: usize,
    /// 失败数量
    pub failed: usize,
    /// 成功与跳过任务的输出（按输入顺序）
    pub outputs: Vec<R>,
    /// 跳过原因
    pub skip_reasons: Vec<String>,
    /// 失败详情
    pub failures: Vec<(String, String)>,
}

impl<R> Default for BatchResult<R> {
    fn default() -> Self {
        Self {
            success: 0,
            skipped: 0,
            failed: 0,
            outputs: Vec::new(),
            skip_reasons: Vec::new(),
            failures: Vec::new(),
        }
    }
}

impl<R> BatchResult<R> {
    /// 合并处理结果
    pub fn merge(&mut self, result: ProcessResult<R>) {
        match result {
            ProcessResult::Success(output) => {
                self.success += 1;
                self.outputs.push(output);
            }
            ProcessResult::Skipped(output, reason) => {
                self.skipped += 1;
                self.outputs.push(output);
                self.skip_reasons.push(reason);
            }
            ProcessResult::Failed(name, err) => {
                self.failed += 1;
                self.failures.push((name, err));
            }
        }
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.success + self.skipped + self.failed
    }
}

/// 批量执行器
pub struct BatchRunner {
    /// 并行作业数
    jobs: usize,
    /// 是否显示进度条
    show_progress: bool,
}

impl BatchRunner {
    /// 创建新的批量执行器，`jobs = 0` 表示使用全部 CPU
    pub fn new(jobs: usize) -> Self {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        Self {
            jobs,
            show_progress: true,
        }
    }

    /// 设置是否显示进度条
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn jobs(&self) -> usize {
        self.jobs
    }

    /// 并行处理任务列表
    pub fn run<T, R, F>(&self, items: Vec<T>, processor: F) -> Result<BatchResult<R>>
    where
        T: Sync,
        R: Send,
        F: Fn(&T) -> ProcessResult<R> + Sync + Send,
    {
        let pb = progress::create_progress_bar(items.len() as u64, "Processing");
        if !self.show_progress {
            pb.set_draw_target(indicatif::ProgressDrawTarget::hidden());
        }

        // 配置 rayon 线程池
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()
            .map_err(|e| LorentzError::Other(format!("Failed to build thread pool: {}", e)))?;

        let results: Vec<ProcessResult<R>> = pool.install(|| {
            items
                .par_iter()
                .map(|item| {
                    let result = processor(item);
                    pb.inc(1);
                    result
                })
                .collect()
        });

        pb.finish_and_clear();

        // 汇总结果
        let mut batch_result = BatchResult::default();
        for result in results {
            batch_result.merge(result);
        }

        Ok(batch_result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_preserves_order_and_counts() {
        let runner = BatchRunner::new(2).with_progress(false);
        let items: Vec<i32> = (0..20).collect();

        let result = runner
            .run(items, |&i| match i % 5 {
                0 => ProcessResult::Skipped(i * 10, format!("{} skipped", i)),
                4 => ProcessResult::Failed(i.to_string(), "boom".to_string()),
                _ => ProcessResult::Success(i * 10),
            })
            .unwrap();

        assert_eq!(result.total(), 20);
        assert_eq!(result.skipped, 4);
        assert_eq!(result.failed, 4);
        assert_eq!(result.success, 12);
        assert_eq!(result.outputs.len(), 16);
        assert_eq!(result.outputs[..4], [0, 10, 20, 30]);
        assert_eq!(result.skip_reasons[1], "5 skipped");
        assert_eq!(result.failures[0], ("4".to_string(), "boom".to_string()));
    }

    #[test]
    fn test_zero_jobs_uses_all_cores() {
        assert_eq!(BatchRunner::new(0).jobs(), num_cpus::get());
    }
}
