use services::error::SignupError;
use services::SignupReceipt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

/// Inline confirmation/failure banner shown after a simulated submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerVm {
    pub kind: BannerKind,
    pub message: String,
    pub detail: String,
}

impl BannerVm {
    #[must_use]
    pub fn success(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Success,
            message: message.into(),
            detail: detail.into(),
        }
    }

    #[must_use]
    pub fn from_receipt(receipt: &SignupReceipt) -> Self {
        Self::success(receipt.message.clone(), receipt.detail.clone())
    }

    #[must_use]
    pub fn from_signup_error(err: &SignupError) -> Self {
        Self {
            kind: BannerKind::Error,
            message: "Submission failed".to_string(),
            detail: err.to_string(),
        }
    }

    #[must_use]
    pub fn class(&self) -> &'static str {
        match self.kind {
            BannerKind::Success => "banner banner--success",
            BannerKind::Error => "banner banner--error",
        }
    }
}
