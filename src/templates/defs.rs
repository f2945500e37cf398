use crate::model::flags::BehaviourFlag;
use crate::model::thresholds::MarkBand;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TemplateKey {
    Band(MarkBand),
    TaskFailure,
    Behaviour(BehaviourFlag),
}

#[derive(Debug, Clone, Copy)]
pub struct TemplateDef {
    pub key: TemplateKey,
    pub file_name: &'static str,
}

const BUILTIN_TEMPLATES: &[TemplateDef] = &[
    TemplateDef {
        key: TemplateKey::Band(MarkBand::Fail),
        file_name: "1_fail.txt",
    },
    TemplateDef {
        key: TemplateKey::Band(MarkBand::Careful),
        file_name: "2_careful.txt",
    },
    TemplateDef {
        key: TemplateKey::Band(MarkBand::Satisfactory),
        file_name: "3_satisfactory.txt",
    },
    TemplateDef {
        key: TemplateKey::Band(MarkBand::Good),
        file_name: "4_good.txt",
    },
    TemplateDef {
        key: TemplateKey::Band(MarkBand::Excellent),
        file_name: "5_excellent.txt",
    },
    TemplateDef {
        key: TemplateKey::TaskFailure,
        file_name: "6_assessmentfail.txt",
    },
    TemplateDef {
        key: TemplateKey::Behaviour(BehaviourFlag::Pleasure),
        file_name: "7_pleasure.txt",
    },
    TemplateDef {
        key: TemplateKey::Behaviour(BehaviourFlag::Attention),
        file_name: "8_attention.txt",
    },
    TemplateDef {
        key: TemplateKey::Behaviour(BehaviourFlag::Disruption),
        file_name: "9_disrupt.txt",
    },
    TemplateDef {
        key: TemplateKey::Behaviour(BehaviourFlag::Read),
        file_name: "10_read.txt",
    },
];

pub fn builtin_templates() -> &'static [TemplateDef] {
    BUILTIN_TEMPLATES
}

pub fn file_name_for(key: TemplateKey) -> &'static str {
    BUILTIN_TEMPLATES
        .iter()
        .find(|d| d.key == key)
        .map(|d| d.file_name)
        .unwrap_or("<unregistered>")
}
