//! Prompt templates for judge scoring

use crate::scoring::JudgeSlot;

/// Templates for generating judge prompts
pub struct PromptTemplate;

impl PromptTemplate {
    /// Rubric shared by every judge, with the expected JSON shape
    fn rubric(question: &str, answer: &str) -> String {
        format!(
            r#"请评估以下学生答案的创造力水平，从四个维度进行评分（0-10分）：

题目: {}
学生答案: {}

请从以下维度评分：
1. 流畅性 (Fluency): 答案的数量和丰富程度
2. 灵活性 (Flexibility): 答案的多样性和变化性
3. 独创性 (Originality): 答案的独特性和创新性
4. 精细性 (Elaboration): 答案的详细程度和深度

请以JSON格式返回评分结果：
{{
    "fluency": 分数,
    "flexibility": 分数,
    "originality": 分数,
    "elaboration": 分数,
    "comments": "评价意见"
}}
重要要求：仅输出上述JSON对象本身，不要包含任何多余文字、解释或代码块标记。
"#,
            question, answer
        )
    }

    /// Rubric with a role-framing preamble
    pub fn with_role(role_hint: &str, question: &str, answer: &str) -> String {
        format!("你是{}。{}", role_hint, Self::rubric(question, answer))
    }

    /// Prompt for one of the two dual-mode judges
    pub fn for_judge(slot: JudgeSlot, question: &str, answer: &str) -> String {
        Self::with_role(slot.role_hint(), question, answer)
    }

    /// Prompt for single-judge mode (no role framing)
    pub fn single(question: &str, answer: &str) -> String {
        Self::rubric(question, answer)
    }
}
