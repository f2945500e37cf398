use rand::Rng;

use crate::input::record::StudentRecord;
use crate::model::flags::BehaviourFlag;
use crate::model::pronouns::resolve;
use crate::model::thresholds::{MarkBand, RuleVariant, TASK_FAIL_THRESHOLD};
use crate::templates::render::RenderContext;
use crate::templates::{TemplateError, TemplateKey, TemplateStore};

/// Written in place of a band comment when the final mark is absent.
pub const NO_FINAL_MARK: &str = "!!!NO FINAL MARK!!! - ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleCategory<'a> {
    FinalMark(MarkBand),
    TaskFailure { task: &'a str },
    Behaviour(BehaviourFlag),
}

impl RuleCategory<'_> {
    pub fn template_key(&self) -> TemplateKey {
        match self {
            RuleCategory::FinalMark(band) => TemplateKey::Band(*band),
            RuleCategory::TaskFailure { .. } => TemplateKey::TaskFailure,
            RuleCategory::Behaviour(flag) => TemplateKey::Behaviour(*flag),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlannedComment<'a> {
    NoFinalMark,
    Rule(RuleCategory<'a>),
}

/// Comments a record draws, in report order: final band, failed tasks in
/// column order, then flags in flag order. Classes without a variant get no
/// final-mark comment at all.
pub fn plan_comments(record: &StudentRecord, variant: Option<RuleVariant>) -> Vec<PlannedComment<'_>> {
    let mut plan = Vec::new();

    if let Some(variant) = variant {
        match record.final_score.value() {
            None => plan.push(PlannedComment::NoFinalMark),
            Some(v) => plan.push(PlannedComment::Rule(RuleCategory::FinalMark(
                variant.table().band(v),
            ))),
        }
    }

    for task in &record.tasks {
        let Some(v) = task.score.value() else {
            continue;
        };
        if v < TASK_FAIL_THRESHOLD {
            plan.push(PlannedComment::Rule(RuleCategory::TaskFailure {
                task: &task.name,
            }));
        }
    }

    for flag in record.flags.iter() {
        plan.push(PlannedComment::Rule(RuleCategory::Behaviour(flag)));
    }

    plan
}

pub struct CommentEngine<'s> {
    store: &'s TemplateStore,
}

impl<'s> CommentEngine<'s> {
    pub fn new(store: &'s TemplateStore) -> Self {
        Self { store }
    }

    pub fn render_rule<R: Rng + ?Sized>(
        &self,
        record: &StudentRecord,
        category: &RuleCategory<'_>,
        rng: &mut R,
    ) -> Result<String, TemplateError> {
        let set = self.store.get(category.template_key())?;
        let task_name = match category {
            RuleCategory::TaskFailure { task } => *task,
            _ => "",
        };
        let ctx = RenderContext {
            student_name: &record.id.preferred_name,
            pronouns: resolve(record.gender),
            task_name,
        };
        set.render(rng, &ctx)
    }

    pub fn evaluate<R: Rng + ?Sized>(
        &self,
        record: &StudentRecord,
        variant: Option<RuleVariant>,
        rng: &mut R,
    ) -> Result<Vec<String>, TemplateError> {
        let plan = plan_comments(record, variant);
        let mut comments = Vec::with_capacity(plan.len());
        for planned in &plan {
            match planned {
                PlannedComment::NoFinalMark => comments.push(NO_FINAL_MARK.to_string()),
                PlannedComment::Rule(category) => {
                    comments.push(self.render_rule(record, category, rng)?)
                }
            }
        }
        Ok(comments)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/rules.rs"]
mod tests;
