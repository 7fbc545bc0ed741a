use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::dao::BaseObject;
use crate::types::LocalizedString;

/// A question and its answer. `section_id` refers back to the owning
/// [`FaqSection`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct Faq {
    #[serde(flatten)]
    pub base: BaseObject,
    pub question: LocalizedString,
    pub answer: LocalizedString,
    pub section_id: String,
}

crate::impl_dao!(Faq, "faq", |this, r| {
    r.read("question", &mut this.question);
    r.read("answer", &mut this.answer);
    r.read_reference("sectionId", "section", &mut this.section_id);
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct FaqSection {
    #[serde(flatten)]
    pub base: BaseObject,
    pub code: String,
    pub faqs: Vec<Faq>,
    pub icon: String,
    pub title: LocalizedString,
}

impl FaqSection {
    /// Append `faq`, pointing its `section_id` at this section.
    pub fn add_faq(&mut self, mut faq: Faq) {
        faq.section_id.clone_from(&self.base.id);
        self.faqs.push(faq);
    }
}

crate::impl_dao!(FaqSection, "faq_section", |this, r| {
    r.read("code", &mut this.code);
    r.read("faqs", &mut this.faqs);
    r.read("icon", &mut this.icon);
    r.read("title", &mut this.title);
});
