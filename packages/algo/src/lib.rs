//! # tutor-algo - 自适应测评核心算法库
//!
//! 本 crate 提供纯 Rust 实现的自适应测评算法:
//!
//! - **Level Adjustment** - 每个科目的难度状态机与掌握判定
//! - **Answer Evaluation** - 区分数值与文本的答案比对
//! - **Quiz Sampling** - 按难度无放回随机抽题
//! - **Recommendations** - 单次测验与整体学习建议
//! - **Progress** - 科目平均分与趋势分类
//!
//! ## 设计理念
//!
//! - **纯函数** - 不持有任何学习者状态，状态由调用方保存
//! - **可复用** - 核心算法与服务层分离
//! - **充分测试** - 所有算法都有完整的单元测试
//!
//! ## 模块结构
//!
//! - [`level`] - 难度状态机 (升级、重置、掌握)
//! - [`evaluate`] - 答案比对与评分
//! - [`quiz`] - 抽题
//! - [`recommend`] - 学习建议
//! - [`progress`] - 平均分与趋势
//! - [`sanitize`] - 数据清洗 (分数范围、数值稳定性)
//! - [`types`] - 公共类型和常量
//!
//! ## 使用示例
//!
//! ```rust
//! use tutor_algo::{adjust_level, Difficulty, LevelPolicy};
//!
//! let transition = adjust_level(Difficulty::Easy, 100.0, &LevelPolicy::default());
//! assert_eq!(transition.next, Difficulty::Medium);
//! assert!(!transition.mastered_now);
//! ```

// ============================================================================
// 模块声明
// ============================================================================

pub mod evaluate;
pub mod level;
pub mod progress;
pub mod quiz;
pub mod recommend;
pub mod sanitize;
pub mod types;

// ============================================================================
// 重新导出
// ============================================================================

/// 重新导出所有公共类型
pub use types::*;

/// 重新导出答案评估
pub use evaluate::{check_answer, grade, GradedQuiz, ResponseDetail};

/// 重新导出难度状态机
pub use level::{adjust_level, LevelPolicy, LevelTransition};

/// 重新导出进度统计
pub use progress::{
    average_scores, classify_subject, overall_trend, performance_trend, scores_by_subject,
    OverallTrend, PerformanceTrend, SubjectTrend, TrendParams,
};

/// 重新导出抽题
pub use quiz::sample_questions;

/// 重新导出学习建议
pub use recommend::{profile_recommendations, quiz_recommendations, RecommendationThresholds};
