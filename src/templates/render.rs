//! Placeholder substitution for comment templates.
//!
//! Templates use `{name}` slots; `{{` and `}}` produce literal braces.

use crate::model::pronouns::PronounSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    StudentName,
    Subjective,
    SubjectiveCap,
    Objective,
    Possessive,
    PossessiveCap,
    Label,
    TaskName,
}

impl Placeholder {
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "sname" => Placeholder::StudentName,
            "he_she" => Placeholder::Subjective,
            "He_She" => Placeholder::SubjectiveCap,
            "him_her" => Placeholder::Objective,
            "his_her" => Placeholder::Possessive,
            "His_Her" => Placeholder::PossessiveCap,
            "boy_girl" => Placeholder::Label,
            "ass_name" => Placeholder::TaskName,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderFault {
    UnknownPlaceholder(String),
    UnclosedBrace(usize),
    StrayClosingBrace(usize),
}

impl std::fmt::Display for RenderFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderFault::UnknownPlaceholder(name) => write!(f, "unknown placeholder {{{name}}}"),
            RenderFault::UnclosedBrace(at) => write!(f, "unclosed '{{' at byte {at}"),
            RenderFault::StrayClosingBrace(at) => write!(f, "unmatched '}}' at byte {at}"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub student_name: &'a str,
    pub pronouns: PronounSet,
    pub task_name: &'a str,
}

impl RenderContext<'_> {
    fn value(&self, placeholder: Placeholder) -> &str {
        match placeholder {
            Placeholder::StudentName => self.student_name,
            Placeholder::Subjective => self.pronouns.subjective,
            Placeholder::SubjectiveCap => self.pronouns.subjective_cap,
            Placeholder::Objective => self.pronouns.objective,
            Placeholder::Possessive => self.pronouns.possessive,
            Placeholder::PossessiveCap => self.pronouns.possessive_cap,
            Placeholder::Label => self.pronouns.label,
            Placeholder::TaskName => self.task_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment<'t> {
    Text(&'t str),
    Slot(Placeholder),
}

fn parse(template: &str) -> Result<Vec<Segment<'_>>, RenderFault> {
    let bytes = template.as_bytes();
    let mut segments = Vec::new();
    let mut start = 0usize;
    let mut i = 0usize;

    while i < bytes.len() {
        match bytes[i] {
            b'{' => {
                if start < i {
                    segments.push(Segment::Text(&template[start..i]));
                }
                if bytes.get(i + 1) == Some(&b'{') {
                    segments.push(Segment::Text("{"));
                    i += 2;
                    start = i;
                    continue;
                }
                let close = template[i + 1..]
                    .find(['}', '{'])
                    .map(|off| i + 1 + off)
                    .filter(|&end| bytes[end] == b'}')
                    .ok_or(RenderFault::UnclosedBrace(i))?;
                let name = &template[i + 1..close];
                let slot = Placeholder::from_name(name)
                    .ok_or_else(|| RenderFault::UnknownPlaceholder(name.to_string()))?;
                segments.push(Segment::Slot(slot));
                i = close + 1;
                start = i;
            }
            b'}' => {
                if bytes.get(i + 1) != Some(&b'}') {
                    return Err(RenderFault::StrayClosingBrace(i));
                }
                if start < i {
                    segments.push(Segment::Text(&template[start..i]));
                }
                segments.push(Segment::Text("}"));
                i += 2;
                start = i;
            }
            _ => i += 1,
        }
    }
    if start < bytes.len() {
        segments.push(Segment::Text(&template[start..]));
    }
    Ok(segments)
}

/// Checks a template without rendering it.
pub fn validate(template: &str) -> Result<(), RenderFault> {
    parse(template).map(|_| ())
}

pub fn render(template: &str, ctx: &RenderContext<'_>) -> Result<String, RenderFault> {
    let segments = parse(template)?;
    let mut out = String::with_capacity(template.len() + 16);
    for segment in segments {
        match segment {
            Segment::Text(text) => out.push_str(text),
            Segment::Slot(slot) => out.push_str(ctx.value(slot)),
        }
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/src_inline/templates/render.rs"]
mod tests;
