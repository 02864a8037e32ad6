//! Input-collection state machine for the founder submission form.
//!
//! Each text field moves between `Editing` and `Locked`; locking is the
//! only validation gate and requires a non-blank value. No network I/O
//! happens here — the form only produces a validated payload.

use launchkit_core::{
    resolve_audience, NewCampaignInput, UploadAttachment, UploadMeta, AUDIENCE_OPTIONS,
    CUSTOM_AUDIENCE_SENTINEL,
};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("unknown target audience option: {0}")]
    UnknownAudience(String),
    #[error("form is incomplete: business idea, target audience, and value proposition are required")]
    Incomplete,
}

/// Per-field edit/lock state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldState {
    #[default]
    Editing,
    Locked,
}

/// A text field that can be committed (locked) and explicitly unlocked.
#[derive(Debug, Clone, Default)]
pub struct LockableField {
    value: String,
    state: FieldState,
}

impl LockableField {
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.state == FieldState::Locked
    }

    #[must_use]
    pub fn state(&self) -> FieldState {
        self.state
    }

    /// Replace the value while editing. Ignored while locked: a committed
    /// value is read-only until explicitly unlocked.
    pub fn edit(&mut self, value: impl Into<String>) {
        if self.state == FieldState::Editing {
            self.value = value.into();
        }
    }

    /// Commit the field. Only fires when the trimmed value is non-empty;
    /// a whitespace-only field stays in `Editing`.
    pub fn lock(&mut self) -> bool {
        if self.value.trim().is_empty() {
            return false;
        }
        self.state = FieldState::Locked;
        true
    }

    /// Return to `Editing`. A value that was only whitespace is cleared.
    pub fn unlock(&mut self) {
        self.state = FieldState::Editing;
        if self.value.trim().is_empty() {
            self.value.clear();
        }
    }
}

/// Form sections reported by the completeness indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    BusinessIdea,
    TargetAudience,
    ValueProposition,
    Uploads,
}

/// State for one founder submission attempt.
#[derive(Debug, Default)]
pub struct InputForm {
    business_idea: LockableField,
    target_audience: LockableField,
    custom_audience: LockableField,
    value_proposition: LockableField,
    uploads: Vec<UploadAttachment>,
}

impl InputForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn business_idea(&self) -> &LockableField {
        &self.business_idea
    }

    pub fn business_idea_mut(&mut self) -> &mut LockableField {
        &mut self.business_idea
    }

    pub fn target_audience(&self) -> &LockableField {
        &self.target_audience
    }

    pub fn custom_audience(&self) -> &LockableField {
        &self.custom_audience
    }

    pub fn custom_audience_mut(&mut self) -> &mut LockableField {
        &mut self.custom_audience
    }

    pub fn value_proposition(&self) -> &LockableField {
        &self.value_proposition
    }

    pub fn value_proposition_mut(&mut self) -> &mut LockableField {
        &mut self.value_proposition
    }

    pub fn uploads(&self) -> &[UploadAttachment] {
        &self.uploads
    }

    /// Select a target audience from the fixed option set.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::UnknownAudience`] for values outside the set.
    pub fn select_audience(&mut self, option: &str) -> Result<(), FormError> {
        if !AUDIENCE_OPTIONS.contains(&option) {
            return Err(FormError::UnknownAudience(option.to_string()));
        }
        self.target_audience.edit(option);
        Ok(())
    }

    /// Lock/unlock for the audience selection follow the same transitions
    /// as the text fields.
    pub fn target_audience_mut(&mut self) -> &mut LockableField {
        &mut self.target_audience
    }

    /// True while the "Other" sentinel is selected; the custom audience
    /// field is only active then.
    #[must_use]
    pub fn custom_audience_active(&self) -> bool {
        self.target_audience.value() == CUSTOM_AUDIENCE_SENTINEL
    }

    /// Append an attachment. Uploads are never locked.
    pub fn add_upload(&mut self, attachment: UploadAttachment) {
        self.uploads.push(attachment);
    }

    /// Remove an attachment by index; out-of-range indices are a no-op.
    pub fn remove_upload(&mut self, index: usize) -> Option<UploadAttachment> {
        if index < self.uploads.len() {
            Some(self.uploads.remove(index))
        } else {
            None
        }
    }

    /// The audience value used downstream: the trimmed custom text when
    /// the sentinel is selected, the selection otherwise.
    #[must_use]
    pub fn resolved_audience(&self) -> String {
        resolve_audience(self.target_audience.value(), self.custom_audience.value())
    }

    /// Completeness display per section. Uploads count here but do not
    /// gate validity.
    #[must_use]
    pub fn is_field_completed(&self, field: FormField) -> bool {
        match field {
            FormField::BusinessIdea => !self.business_idea.value().trim().is_empty(),
            FormField::TargetAudience => !self.resolved_audience().is_empty(),
            FormField::ValueProposition => !self.value_proposition.value().trim().is_empty(),
            FormField::Uploads => !self.uploads.is_empty(),
        }
    }

    /// The submission gate: business idea present, an audience selected
    /// (the sentinel requires custom text), and a value proposition
    /// present. Uploads are optional.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.is_field_completed(FormField::BusinessIdea)
            && self.is_field_completed(FormField::TargetAudience)
            && self.is_field_completed(FormField::ValueProposition)
    }

    /// Produce the trimmed store payload. Upload metadata only — the
    /// bytes are forwarded separately to the generator.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Incomplete`] while [`InputForm::is_valid`]
    /// is false.
    pub fn payload(&self) -> Result<NewCampaignInput, FormError> {
        if !self.is_valid() {
            return Err(FormError::Incomplete);
        }
        let uploads: Vec<UploadMeta> = self.uploads.iter().map(|a| a.meta.clone()).collect();
        Ok(NewCampaignInput {
            business_idea: self.business_idea.value().trim().to_string(),
            target_audience: self.resolved_audience(),
            unique_value_proposition: self.value_proposition.value().trim().to_string(),
            tag: None,
            uploads,
        })
    }
}
