//! Procedural item generation from fixed templates.
//!
//! Each question type has one body template with a single placeholder that is
//! filled from a pool of themes, item lists, problems or scenes. Generation is
//! plain data substitution; the only randomness is the pool draw.

use crate::core::dimension::CreativityDimension;
use crate::core::question::{
    DEFAULT_TIME_LIMIT_SECS, QuestionItem, QuestionType, ScoringWeights,
};
use chrono::Utc;
use rand::Rng;
use rand::seq::SliceRandom;

/// Objects whose alternative uses are asked for
pub const THEMES: &[&str] = &[
    "砖头", "回形针", "报纸", "雨伞", "橡皮筋", "塑料瓶", "绳子", "纸箱", "勺子", "旧衣服",
];

/// Groups of objects whose common traits are asked for
pub const ITEM_LISTS: &[&str] = &[
    "苹果、橙子、香蕉",
    "汽车、飞机、轮船",
    "书、电脑、手机",
    "钢笔、铅笔、记号笔",
    "山、河、湖",
    "桌子、椅子、柜子",
    "猫、狗、鸟",
];

/// Open problems to design a solution for
pub const PROBLEMS: &[&str] = &[
    "如何让城市更环保",
    "如何提高学习效率",
    "如何减少交通拥堵",
    "如何降低校园垃圾",
    "如何节约用水",
    "如何减少食物浪费",
    "如何提升社区安全",
];

/// Imaginary scenes to describe
pub const SCENES: &[&str] = &[
    "未来学校",
    "外星球",
    "海底城市",
    "天空之城",
    "微缩世界",
    "蒸汽朋克城市",
];

/// Template for one question type
#[derive(Debug, Clone, Copy)]
pub struct ItemTemplate {
    pub question_type: QuestionType,
    /// Body text with a single `{}` placeholder
    body: &'static str,
    pool: &'static [&'static str],
    pub dimensions: &'static [CreativityDimension],
}

impl ItemTemplate {
    /// Look up the template for a question type
    pub fn for_type(question_type: QuestionType) -> Self {
        use CreativityDimension::*;
        match question_type {
            QuestionType::DivergentThinking => Self {
                question_type,
                body: "请尽可能多地列举出{}的用途。至少写出10个不同的用途。",
                pool: THEMES,
                dimensions: &[Fluency, Flexibility],
            },
            QuestionType::ConvergentThinking => Self {
                question_type,
                body: "请找出以下物品的共同点：{}。至少找出5个共同特征。",
                pool: ITEM_LISTS,
                dimensions: &[Flexibility, Originality],
            },
            QuestionType::CreativeProblemSolving => Self {
                question_type,
                body: "请设计一个创新的解决方案来解决以下问题：{}。",
                pool: PROBLEMS,
                dimensions: &[Originality, Elaboration],
            },
            QuestionType::Imagination => Self {
                question_type,
                body: "请描述一个想象中的{}，要求具有创新性和独特性。",
                pool: SCENES,
                dimensions: &[Originality, Elaboration],
            },
        }
    }

    /// Fill the placeholder with the given substitution
    pub fn render(&self, substitution: &str) -> String {
        self.body.replacen("{}", substitution, 1)
    }

    /// Build the item at 1-based position `idx` with a random substitution
    pub fn build<R: Rng + ?Sized>(&self, idx: usize, rng: &mut R) -> QuestionItem {
        let substitution = self.pool.choose(rng).copied().unwrap_or_default();
        QuestionItem {
            id: format!("{}_{}", self.question_type.id_prefix(), idx),
            question_type: self.question_type,
            title: format!("{} {}", self.question_type.label(), idx),
            content: self.render(substitution),
            time_limit: DEFAULT_TIME_LIMIT_SECS,
            dimensions: self.dimensions.to_vec(),
            weights: ScoringWeights::default(),
            generated_at: Some(Utc::now()),
        }
    }
}

/// Generate a full pool of `count` items for one question type.
///
/// Items are numbered from 1, so identifiers are unique within the type.
pub fn generate_pool<R: Rng + ?Sized>(
    question_type: QuestionType,
    count: usize,
    rng: &mut R,
) -> Vec<QuestionItem> {
    let template = ItemTemplate::for_type(question_type);
    (1..=count).map(|idx| template.build(idx, rng)).collect()
}
